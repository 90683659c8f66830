//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의하며,
//! 엔티티와 DTO 사이의 변환은 `From` 구현으로 제공합니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | MapStruct `UserMapper` | `From` 구현 | Entity ↔ DTO 변환 |

pub mod users;
