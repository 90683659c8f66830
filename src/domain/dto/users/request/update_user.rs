//! 사용자 부분 수정 요청 DTO
//!
//! `PATCH` 요청 본문입니다. 모든 필드가 선택이며, 값이 없는 필드는 "변경 없음"을 뜻합니다.
//! 본문에 `id`가 있어도 알 수 없는 필드로 무시되며, 대상 ID는 항상 경로에서 받습니다.
//! 값이 있는 필드에는 [`CreateUserRequest`](super::CreateUserRequest)와 같은 형식 규칙을 적용합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;
use super::create_user::{validate_past_date, validate_phone_digits};

/// 사용자 부분 수정 요청 DTO
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 25, message = "이름은 1-25자 사이여야 합니다"))]
    pub first_name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 25, message = "성은 1-25자 사이여야 합니다"))]
    pub last_name: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_past_date"))]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(max = 100, message = "주소는 100자를 넘을 수 없습니다"))]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "전화번호는 20자를 넘을 수 없습니다"))]
    #[validate(custom(function = "validate_phone_digits"))]
    pub phone_number: Option<String>,
}

impl UpdateUserRequest {
    /// 변경할 필드가 하나도 없는지 여부
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
