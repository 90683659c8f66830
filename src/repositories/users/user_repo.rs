//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션을 사용하는 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **덮어쓰기 저장**: ID가 있는 레코드는 `replace_one` (upsert)로 통째로 교체
//! - **문자열 날짜 범위**: `birth_date`가 `YYYY-MM-DD` 문자열이므로 `$gte`/`$lte`
//!   사전식 비교가 날짜 비교와 같음
//! - **안정적 페이지 순서**: `_id` 오름차순 (생성 순)
//! - **인덱스**: `email`, `birth_date` 비고유 인덱스. 이메일 유일성은 서비스 계층
//!   생성 경로에서 검사하므로 고유 제약을 두지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{CountOptions, FindOptions, IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::{entities::users::user::User, models::page::{Page, PageRequest}},
    errors::{AppError, AppResult},
};
use super::UserStore;

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION_NAME)
    }

    /// 시작 시 필요한 인덱스를 생성합니다.
    pub async fn init(&self) -> AppResult<()> {
        self.create_indexes().await?;
        debug!("{} 컬렉션 인덱스 준비 완료", Self::COLLECTION_NAME);
        Ok(())
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 조회 인덱스 (중복 검사용, 고유 제약 없음)
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email_lookup".to_string())
                .build())
            .build();

        // 생년월일 범위 조회 인덱스
        let birth_date_index = IndexModel::builder()
            .keys(doc! { "birth_date": 1 })
            .options(IndexOptions::builder()
                .name("birth_date_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, birth_date_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_page(&self, filter: Document, page: &PageRequest) -> AppResult<Page<User>> {
        let total_elements = self.collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(i64::try_from(page.size).unwrap_or(i64::MAX))
            .build();

        let users: Vec<User> = self.collection()
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page::new(users, page, total_elements))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let options = CountOptions::builder().limit(1).build();

        let count = self.collection()
            .count_documents(doc! { "_id": *id })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            Some(id) => {
                let options = ReplaceOptions::builder().upsert(true).build();

                self.collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .with_options(options)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                debug!("사용자 레코드 덮어쓰기: {}", id);
            }
            None => {
                let result = self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
                })?;
                user.id = Some(id);

                debug!("사용자 레코드 생성: {}", id);
            }
        }

        Ok(user)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<()> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("사용자 레코드 삭제: {} ({}건)", id, result.deleted_count);
        Ok(())
    }

    async fn find_all_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: &PageRequest,
    ) -> AppResult<Page<User>> {
        let filter = doc! {
            "birth_date": {
                "$gte": from.to_string(),
                "$lte": to.to_string(),
            }
        };

        self.find_page(filter, page).await
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<Page<User>> {
        self.find_page(doc! {}, page).await
    }
}
