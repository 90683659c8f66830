//! # 사용자 엔티티
//!
//! MongoDB `users` 컬렉션에 저장되는 사용자 레코드입니다.
//!
//! ## 필드 저장 형식
//!
//! - `_id`: 저장소가 최초 저장 시 부여하는 `ObjectId`. 이후 변경되지 않습니다.
//! - `birth_date`: `YYYY-MM-DD` 형식의 문자열. 사전식 비교가 날짜 순서와
//!   일치하므로 범위 조회에 그대로 사용할 수 있습니다.
//! - `address`, `phone_number`: 값이 없으면 문서에서 생략됩니다.
//!
//! 이메일 유일성은 저장소 제약이 아닌 생성 경로의 사전 검사로 보장됩니다.

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::models::user_profile::UserProfile;

/// 저장된 사용자 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl User {
    /// 편집 가능한 속성과 ID로 엔티티를 만듭니다.
    ///
    /// `id`가 `None`이면 저장 시 새 ID가 부여됩니다.
    pub fn from_profile(id: Option<ObjectId>, profile: UserProfile) -> Self {
        let UserProfile {
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        } = profile;

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

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            email: "john@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: None,
            phone_number: Some("0677377711".to_string()),
        }
    }

    #[test]
    fn test_from_profile_keeps_given_id() {
        let id = ObjectId::new();
        let user = User::from_profile(Some(id), sample_profile());

        assert_eq!(user.id, Some(id));
        assert_eq!(user.id_string(), Some(id.to_hex()));
        assert_eq!(user.first_name, "John");
    }

    #[test]
    fn test_bson_document_uses_iso_birth_date_and_skips_empty_fields() {
        let user = User::from_profile(None, sample_profile());
        let document = mongodb::bson::to_document(&user).unwrap();

        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("address"));
        assert_eq!(document.get_str("birth_date").unwrap(), "1990-01-01");
        assert_eq!(document.get_str("phone_number").unwrap(), "0677377711");
    }
}
