//! 사용자 레코드의 편집 가능한 표현
//!
//! ID를 제외한 모든 변경 가능 속성을 담습니다. 부분 수정 시 저장된 레코드를
//! 이 형태로 투영한 뒤 패치를 병합하고, 다시 엔티티로 되돌립니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 편집 가능한 사용자 속성 집합
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
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
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        }
    }
}
