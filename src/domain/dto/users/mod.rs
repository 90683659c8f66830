//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs    # 생성, 전체 교체 (POST, PUT)
//! │   ├── update_user.rs    # 부분 수정 (PATCH)
//! │   └── search.rs         # 페이지, 생년월일 범위 쿼리
//! └── response/
//!     └── user_response.rs  # 단건, 생성 결과, 페이지 응답
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Valid @RequestBody UserCreateRequestDto` | `CreateUserRequest` |
//! | `@RequestBody UserDto` (PATCH) | `UpdateUserRequest` |
//! | `UserDto` 응답 | `UserResponse` |
//! | `WrapperDto<UserDto>` | `UserPageResponse` |
//! | `Pageable` | `PageQuery` → `PageRequest` |

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
