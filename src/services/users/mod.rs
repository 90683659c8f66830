//! 사용자 레코드 서비스 모듈
//!
//! 사용자 레코드의 쓰기 파이프라인과 조회를 담당합니다.
//!
//! # Modules
//!
//! - [`merge`]: 부분 수정 요청을 편집 가능한 표현에 병합
//! - [`rules`]: 이메일 유일성, 최소 나이 규칙
//! - [`user_service`]: 조회, 규칙, 병합, 저장을 순서대로 조율
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(store, UserServiceConfig::from_env());
//! let id = service.create_user(request).await?;
//! ```

pub mod merge;
pub mod rules;
pub mod user_service;

pub use user_service::{parse_user_id, UserService};
