//! # Domain Entities Module
//!
//! 저장소에 영속되는 엔티티를 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑됩니다.
//!
//! ## MongoDB 매핑
//!
//! - `_id` 필드는 `Option<ObjectId>`로 표현되며, 저장 전까지는 `None`입니다.
//! - 생년월일은 `YYYY-MM-DD` 문자열로 저장되어 사전순 비교가 날짜순 비교와 같습니다.
//! - 값이 없는 선택 필드는 문서에 기록하지 않습니다.
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Document` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `LocalDate` | `chrono::NaiveDate` |
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let saved = store.save(User::from_profile(None, profile)).await?;
//! assert!(saved.id.is_some());
//! ```

pub mod users;
