//! # Domain Layer
//!
//! - [`entities`] - 저장소에 영속되는 엔티티
//! - [`models`] - 서비스 계층 도메인 모델 (편집 가능한 표현, 페이지)
//! - [`dto`] - HTTP 경계의 요청/응답 객체

pub mod entities;
pub mod dto;
pub mod models;
