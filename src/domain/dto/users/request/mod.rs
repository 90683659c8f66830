//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 문자열을 구조화된 Rust 타입으로
//! 변환하고 검증합니다. Spring Boot의 `@RequestBody`, `@RequestParam`과 같은 역할입니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성, 필수 필드 존재 (`serde`)
//! 2. **형식 검증**: 이메일, 길이, 숫자 패턴 등 필드 규칙 (`validator`)
//! 3. **비즈니스 검증**: 이메일 중복, 최소 나이 (서비스 계층)
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 핸들러에서 `AppError::ValidationError`(400)로 변환됩니다.

pub mod create_user;
pub mod update_user;
pub mod search;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
pub use search::{BirthDateRangeQuery, PageQuery};
