//! 프로세스 메모리 기반 사용자 리포지토리
//!
//! 테스트와 `STORE_BACKEND=memory` 로컬 실행에 사용합니다.
//! `ObjectId`는 생성 시각 순으로 증가하므로 `BTreeMap` 순회 순서가 곧 생성 순서입니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::{entities::users::user::User, models::page::{Page, PageRequest}},
    errors::{AppError, AppResult},
};
use super::UserStore;

/// 메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 레코드 수
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, BTreeMap<ObjectId, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, BTreeMap<ObjectId, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string()))
    }

    fn page_of<'a, I>(matching: I, page: &PageRequest) -> Page<User>
    where
        I: Iterator<Item = &'a User>,
    {
        let matching: Vec<&User> = matching.collect();
        let total_elements = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(page.size).unwrap_or(usize::MAX);

        let items = matching
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Page::new(items, page, total_elements)
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.values().find(|user| user.email == email).cloned())
    }

    async fn exists_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let id = *user.id.get_or_insert_with(ObjectId::new);
        self.write()?.insert(id, user.clone());

        debug!("메모리 사용자 레코드 저장: {}", id);
        Ok(user)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<()> {
        self.write()?.remove(id);
        Ok(())
    }

    async fn find_all_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: &PageRequest,
    ) -> AppResult<Page<User>> {
        let users = self.read()?;
        let matching = users
            .values()
            .filter(|user| user.birth_date >= from && user.birth_date <= to);

        Ok(Self::page_of(matching, page))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<Page<User>> {
        let users = self.read()?;

        Ok(Self::page_of(users.values(), page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, birth_date: (i32, u32, u32)) -> User {
        User {
            id: None,
            email: email.to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            birth_date: NaiveDate::from_ymd_opt(birth_date.0, birth_date.1, birth_date.2).unwrap(),
            address: None,
            phone_number: None,
        }
    }

    #[actix_web::test]
    async fn test_save_assigns_id_and_overwrites() {
        let store = InMemoryUserRepository::new();

        let saved = store.save(user("a@x.com", (1990, 1, 1))).await.unwrap();
        let id = saved.id.unwrap();

        let mut changed = saved.clone();
        changed.first_name = "Dave".to_string();
        let overwritten = store.save(changed).await.unwrap();

        assert_eq!(overwritten.id, Some(id));
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.find_by_id(&id).await.unwrap().unwrap().first_name, "Dave");
    }

    #[actix_web::test]
    async fn test_find_by_email_is_exact() {
        let store = InMemoryUserRepository::new();
        store.save(user("a@x.com", (1990, 1, 1))).await.unwrap();

        assert!(store.find_by_email("a@x.com").await.unwrap().is_some());
        assert!(store.find_by_email("A@x.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_birth_date_range_is_inclusive_and_paged() {
        let store = InMemoryUserRepository::new();
        store.save(user("a@x.com", (1989, 12, 31))).await.unwrap();
        store.save(user("b@x.com", (1990, 1, 1))).await.unwrap();
        store.save(user("c@x.com", (1995, 6, 15))).await.unwrap();
        store.save(user("d@x.com", (2000, 1, 1))).await.unwrap();
        store.save(user("e@x.com", (2000, 1, 2))).await.unwrap();

        let from = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

        let first = store
            .find_all_by_birth_date_between(from, to, &PageRequest::new(0, 2))
            .await
            .unwrap();
        let second = store
            .find_all_by_birth_date_between(from, to, &PageRequest::new(1, 2))
            .await
            .unwrap();

        assert_eq!(first.total_elements, 3);
        let emails: Vec<_> = first.items.iter().chain(second.items.iter()).map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["b@x.com", "c@x.com", "d@x.com"]);
    }

    #[actix_web::test]
    async fn test_delete_missing_id_is_ok() {
        let store = InMemoryUserRepository::new();

        assert!(store.delete_by_id(&ObjectId::new()).await.is_ok());
        assert!(store.is_empty().unwrap());
    }
}
