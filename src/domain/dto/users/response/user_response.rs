use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::{entities::users::user::User, models::page::Page};

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
            ..
        } = user;

        Self {
            id,
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: String,
}

/// 사용자 목록 응답 DTO (페이지 메타데이터 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPageResponse {
    pub data: Vec<UserResponse>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl From<Page<UserResponse>> for UserPageResponse {
    fn from(page: Page<UserResponse>) -> Self {
        Self {
            data: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
        }
    }
}
