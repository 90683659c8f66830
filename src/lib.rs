//! 사용자 레코드 관리 서비스
//!
//! 사용자 레코드를 생성, 조회, 부분 수정, 전체 교체, 삭제하는 REST API 서비스입니다.
//! 쓰기 전에 이메일 유일성과 최소 나이 규칙을 검사하고,
//! 부분 수정은 필드 단위 병합으로 처리합니다.
//!
//! # Features
//!
//! - **사용자 레코드 관리**: 생성, 조회, 부분 수정(PATCH), 전체 교체(PUT), 삭제
//! - **생년월일 범위 조회**: 양 끝을 포함하는 페이지 단위 조회
//! - **비즈니스 규칙**: 생성 시 이메일 유일성, 설정 가능한 최소 나이
//! - **MongoDB**: 사용자 데이터 영구 저장
//! - **메모리 저장소**: 테스트 및 로컬 실행용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 추출, 형식 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 규칙 검사, 병합, 저장 조율
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserStore     │ ← 저장소 trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소 구현체
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_records_service::config::UserServiceConfig;
//! use user_records_service::repositories::users::InMemoryUserRepository;
//! use user_records_service::services::users::UserService;
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     UserServiceConfig::from_env(),
//! );
//! let id = service.create_user(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
