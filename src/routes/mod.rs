//! API 라우트 설정 모듈
//!
//! 사용자 레코드 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Features
//!
//! - 사용자 레코드 CRUD 및 범위 조회 API 엔드포인트
//! - 본문/쿼리 역직렬화 실패를 `AppError::ValidationError`로 통일
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .app_data(web::Data::new(PaginationConfig::from_env()))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 사용자 레코드 API의 기본 경로
pub const USERS_PATH: &str = "/api/v1/users";

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 추출자 실패를 에러 응답 형식에 맞춥니다
///
/// 잘못된 JSON 본문이나 쿼리 문자열도 `{"error": "..."}` 형태의 400 응답이 됩니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
}

/// 사용자 레코드 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/users` - 사용자 생성
/// - `GET /api/v1/users` - 사용자 목록 조회
/// - `GET /api/v1/users/search` - 생년월일 범위 조회
/// - `GET /api/v1/users/{id}` - 사용자 조회
/// - `PATCH /api/v1/users/{id}` - 사용자 부분 수정
/// - `PUT /api/v1/users/{id}` - 사용자 전체 교체
/// - `DELETE /api/v1/users/{id}` - 사용자 삭제
///
/// `/search`는 `/{user_id}`보다 먼저 등록되어야 합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"john@example.com","first_name":"John","last_name":"Smith","birth_date":"1990-01-01"}'
///
/// curl "http://localhost:8080/api/v1/users/search?from=1980-01-01&to=2000-01-01&page=0&size=20"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(USERS_PATH)
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::search_by_birth_date)
            .service(handlers::users::get_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::put_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_records_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
