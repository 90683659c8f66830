//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 병합, 규칙 검사, 저장 조율            ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore 구현체                ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러의 책임
//!
//! - 경로, 쿼리, 본문 추출 (`web::Path`, `web::Query`, `web::Json`)
//! - `validator`를 이용한 형식 검증
//! - `web::Data<UserService>`로 주입된 서비스 호출
//! - 결과를 상태 코드와 JSON으로 변환
//!
//! 에러는 `AppError`의 `ResponseError` 구현이 HTTP 응답으로 변환합니다.

pub mod users;
