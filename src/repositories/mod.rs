//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층이 의존하는 저장소 trait과 그 구현체들을 제공합니다.
//! MongoDB를 주 저장소로 사용하고, 테스트와 로컬 실행을 위한 메모리 저장소를 함께 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(database);
//! user_repo.init().await?;
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
