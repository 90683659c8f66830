//! # 사용자 생성 및 전체 교체 요청 DTO
//!
//! 새 사용자 생성(`POST`)과 전체 교체(`PUT`)에 공통으로 사용하는 요청 구조입니다.
//! Spring Boot의 `@Valid @RequestBody` 패턴을 Rust로 구현한 것으로,
//! 필수 필드 누락은 역직렬화 단계에서, 형식과 길이는 [`Validate`]에서 걸러집니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `email` | 필수, 이메일 형식 |
//! | `first_name`, `last_name` | 필수, 1-25자 |
//! | `birth_date` | 필수, 오늘 이전 날짜 |
//! | `address` | 선택, 최대 100자 |
//! | `phone_number` | 선택, 최대 20자, 숫자만 |
//!
//! 이메일 중복과 최소 나이는 서비스 계층의 비즈니스 규칙으로 별도 검증합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "email": "john@example.com",
//!   "first_name": "John",
//!   "last_name": "Smith",
//!   "birth_date": "1990-01-01",
//!   "address": "Baker Street",
//!   "phone_number": "0677377711"
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::models::user_profile::UserProfile;

/// 사용자 생성 / 전체 교체 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 25, message = "이름은 1-25자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 25, message = "성은 1-25자 사이여야 합니다"))]
    pub last_name: String,

    #[validate(custom(function = "validate_past_date"))]
    pub birth_date: NaiveDate,

    #[validate(length(max = 100, message = "주소는 100자를 넘을 수 없습니다"))]
    pub address: Option<String>,

    #[validate(length(max = 20, message = "전화번호는 20자를 넘을 수 없습니다"))]
    #[validate(custom(function = "validate_phone_digits"))]
    pub phone_number: Option<String>,
}

impl From<CreateUserRequest> for UserProfile {
    fn from(request: CreateUserRequest) -> Self {
        let CreateUserRequest {
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        } = request;

        Self {
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        }
    }
}

/// 생년월일이 오늘보다 이전인지 검증
pub(crate) fn validate_past_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date >= chrono::Local::now().date_naive() {
        return Err(ValidationError::new("birth_date_not_past")
            .with_message("생년월일은 과거 날짜여야 합니다".into()));
    }
    Ok(())
}

/// 전화번호가 숫자로만 이루어졌는지 검증
pub(crate) fn validate_phone_digits(phone_number: &str) -> Result<(), ValidationError> {
    if !phone_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_phone_number")
            .with_message("전화번호는 숫자만 포함해야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            email: "john@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: Some("Baker Street".to_string()),
            phone_number: Some("0677377711".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let request = CreateUserRequest {
            address: None,
            phone_number: None,
            ..valid_request()
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails() {
        let request = CreateUserRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_name_length_limits() {
        let empty = CreateUserRequest {
            first_name: String::new(),
            ..valid_request()
        };
        let too_long = CreateUserRequest {
            last_name: "a".repeat(26),
            ..valid_request()
        };

        assert!(empty.validate().unwrap_err().field_errors().contains_key("first_name"));
        assert!(too_long.validate().unwrap_err().field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_future_birth_date_fails() {
        let request = CreateUserRequest {
            birth_date: chrono::Local::now().date_naive() + chrono::Duration::days(1),
            ..valid_request()
        };

        assert!(request.validate().unwrap_err().field_errors().contains_key("birth_date"));
    }

    #[test]
    fn test_phone_number_must_be_digits() {
        let request = CreateUserRequest {
            phone_number: Some("+38-067".to_string()),
            ..valid_request()
        };

        assert!(request.validate().unwrap_err().field_errors().contains_key("phone_number"));
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        let json = r#"{"email":"john@example.com","first_name":"John","birth_date":"1990-01-01"}"#;

        assert!(serde_json::from_str::<CreateUserRequest>(json).is_err());
    }
}
