//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 레코드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | HTTP 상태 | 발생 지점 |
//! |------|-----------|-----------|
//! | `NotFound` | 404 | 존재하지 않는 사용자 ID |
//! | `DuplicateEmail` | 409 | 이미 등록된 이메일로 생성 |
//! | `UnderAge` | 400 | 최소 나이 미달 |
//! | `InvalidRange` | 400 | `from`이 `to`보다 늦은 범위 조회 |
//! | `ValidationError` | 400 | 요청 경계의 입력값 검증 실패 |
//! | `MergeFailure` | 500 | 패치 적용 실패 (결함 신호) |
//! | `DatabaseError` | 500 | 저장소 연산 실패 |
//! | `InternalError` | 500 | 그 외 시스템 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn load(store: &dyn UserStore, id: &ObjectId) -> AppResult<User> {
//!     store.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이메일 중복 에러 (409 Conflict)
    ///
    /// 생성 경로에서만 발생합니다.
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// 최소 나이 미달 에러 (400 Bad Request)
    ///
    /// 설정된 최소 나이를 메시지에 포함합니다.
    #[error("Under age: 사용자 나이는 최소 {0}세 이상이어야 합니다")]
    UnderAge(u32),

    /// 잘못된 날짜 범위 에러 (400 Bad Request)
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// 패치 적용 실패 에러 (500 Internal Server Error)
    ///
    /// 정상적인 입력으로는 발생하지 않아야 하므로 결함 신호로 취급합니다.
    #[error("Merge failure: {0}")]
    MergeFailure(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnderAge(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
