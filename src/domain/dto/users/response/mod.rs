//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//! Spring Boot의 `@ResponseBody`와 유사한 역할입니다.
//!
//! - `UserResponse` - 단일 사용자 정보 (ID는 16진수 문자열)
//! - `CreateUserResponse` - 생성된 사용자 ID
//! - `UserPageResponse` - 목록/범위 조회 결과와 페이지 메타데이터
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "data": [
//!     {
//!       "id": "507f1f77bcf86cd799439011",
//!       "email": "john@example.com",
//!       "first_name": "John",
//!       "last_name": "Smith",
//!       "birth_date": "1990-01-01",
//!       "address": "Baker Street",
//!       "phone_number": "0677377711"
//!     }
//!   ],
//!   "page": 0,
//!   "size": 20,
//!   "total_elements": 1
//! }
//! ```

pub mod user_response;

pub use user_response::{CreateUserResponse, UserPageResponse, UserResponse};
