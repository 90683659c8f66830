//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`] trait에만 의존하며, 실행 시 설정에 따라
//! 다음 구현 중 하나가 주입됩니다.
//!
//! - [`UserRepository`](user_repo::UserRepository) - MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 프로세스 메모리
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserStore, memory_repo::InMemoryUserRepository};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = store.find_by_email("john@example.com").await?;
//! ```

pub mod memory_repo;
pub mod user_repo;

use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::{entities::users::user::User, models::page::{Page, PageRequest}},
    errors::AppResult,
};

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::UserRepository;

/// 사용자 레코드 저장소 계약
///
/// 개별 레코드의 영속성과 동시 접근 직렬화는 구현체가 책임집니다.
/// 낙관적 동시성 토큰은 없으며 마지막 `save`가 이깁니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 이메일이 정확히 일치하는 레코드를 찾습니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn exists_by_id(&self, id: &ObjectId) -> AppResult<bool>;

    /// 레코드를 저장합니다.
    ///
    /// `id`가 없으면 새 ID를 부여해 생성하고, 있으면 같은 ID의 레코드를 덮어씁니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 레코드를 삭제합니다. 존재하지 않는 ID여도 에러가 아닙니다.
    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<()>;

    /// `from <= birth_date <= to`인 레코드를 저장소 순서대로 한 페이지 조회합니다.
    async fn find_all_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: &PageRequest,
    ) -> AppResult<Page<User>>;

    async fn find_all(&self, page: &PageRequest) -> AppResult<Page<User>>;
}
