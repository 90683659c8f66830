//! # User Record HTTP Handlers
//!
//! 사용자 레코드 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청 경계의 형식 검증만 수행하고, 비즈니스 규칙은 [`UserService`]에 위임합니다.
//!
//! ## RESTful API 설계
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users` | 사용자 목록 조회 (페이징) | 200 OK |
//! | `GET` | `/users/search` | 생년월일 범위 조회 (페이징) | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 부분 수정 | 204 No Content |
//! | `PUT` | `/users/{id}` | 사용자 전체 교체 | 204 No Content |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @PatchMapping("/{id}")
//! public ResponseEntity<Void> patchUser(@PathVariable String id,
//!                                       @Valid @RequestBody UpdateUserDto dto) {
//!     userService.patchUser(id, dto);
//!     return ResponseEntity.noContent().build();
//! }
//! ```
//!
//! ```rust,ignore
//! #[patch("/{user_id}")]
//! pub async fn patch_user(
//!     service: web::Data<UserService>,
//!     user_id: web::Path<String>,
//!     payload: web::Json<UpdateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     service.patch_user(&user_id, payload.into_inner()).await?;
//!     Ok(HttpResponse::NoContent().finish())
//! }
//! ```
//!
//! ## 의존성 주입
//!
//! `UserService`와 `PaginationConfig`는 `App::app_data`로 등록되어
//! `web::Data` 추출자로 전달됩니다. 전역 싱글톤은 사용하지 않습니다.

use actix_web::{delete, get, http::header, patch, post, put, web, HttpResponse};
use validator::Validate;
use crate::{
    config::PaginationConfig,
    domain::dto::users::{
        request::{BirthDateRangeQuery, CreateUserRequest, PageQuery, UpdateUserRequest},
        response::{CreateUserResponse, UserPageResponse},
    },
    errors::AppError,
    routes::USERS_PATH,
    services::users::UserService,
};

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "john@example.com",
///   "first_name": "John",
///   "last_name": "Smith",
///   "birth_date": "1990-01-01",
///   "address": "Baker Street",
///   "phone_number": "0677377711"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
///
/// `Location: /api/v1/users/{id}` 헤더와 함께 생성된 ID를 반환합니다.
///
/// ```json
/// { "id": "507f1f77bcf86cd799439011" }
/// ```
///
/// ## 실패 사례
///
/// - 형식 검증 실패, 최소 나이 미달: 400 Bad Request
/// - 이메일 중복: 409 Conflict
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let id = service.create_user(payload.into_inner()).await?.to_hex();

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("{}/{}", USERS_PATH, id)))
        .json(CreateUserResponse { id }))
}

/// 사용자 목록 조회 핸들러
///
/// `GET /users?page=0&size=20`
///
/// 페이지 번호는 0부터 시작하며, `size`는 설정된 최대 크기로 제한됩니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    pagination: web::Data<PaginationConfig>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = query.page_request(&pagination)?;
    let users = service.find_all(page).await?;

    Ok(HttpResponse::Ok().json(UserPageResponse::from(users)))
}

/// 생년월일 범위 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/search?from=1990-01-01&to=2000-01-01&page=0&size=20`
///
/// 양 끝 날짜를 포함합니다. `from`이 `to`보다 늦으면 400 Bad Request입니다.
#[get("/search")]
pub async fn search_by_birth_date(
    service: web::Data<UserService>,
    pagination: web::Data<PaginationConfig>,
    query: web::Query<BirthDateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let page = query.page_request(&pagination)?;
    let users = service
        .find_by_birth_date_range(query.from, query.to, page)
        .await?;

    Ok(HttpResponse::Ok().json(UserPageResponse::from(users)))
}

/// 사용자 조회 핸들러
///
/// `GET /users/{user_id}`
///
/// 잘못된 ID 형식은 400, 존재하지 않는 ID는 404입니다.
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정 핸들러
///
/// # 엔드포인트
///
/// `PATCH /users/{user_id}`
///
/// 본문에 포함된 필드만 변경됩니다. 본문의 `id` 필드는 무시됩니다.
///
/// ```json
/// { "first_name": "Dave" }
/// ```
///
/// # 응답
///
/// - 성공: 204 No Content
/// - 존재하지 않는 ID: 404 Not Found
/// - 병합된 생년월일이 최소 나이 미달: 400 Bad Request
#[patch("/{user_id}")]
pub async fn patch_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    service.patch_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 전체 교체 핸들러
///
/// `PUT /users/{user_id}`
///
/// 생성과 같은 본문을 받아 변경 가능한 모든 속성을 교체합니다.
/// 본문에 없는 선택 필드는 비워집니다.
#[put("/{user_id}")]
pub async fn put_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    service.put_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// # 응답
///
/// ## 성공 (204 No Content)
///
/// 이미 삭제되었거나 존재하지 않는 ID도 204를 반환합니다.
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/v1/users/507f1f77bcf86cd799439011
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
