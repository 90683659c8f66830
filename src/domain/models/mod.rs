//! # Domain Models
//!
//! 엔티티와 DTO 사이에서 서비스 계층이 사용하는 도메인 모델입니다.
//!
//! - [`user_profile`] - 병합 엔진이 다루는 편집 가능한 사용자 표현
//! - [`page`] - 페이지 요청과 페이지 결과

pub mod page;
pub mod user_profile;

pub use page::{Page, PageRequest};
pub use user_profile::UserProfile;
