//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 저장소, Rate Limiting, 환경 관련 설정
//! - [`user_config`] - 최소 나이, 페이지 크기 등 사용자 레코드 규칙 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export HTTP_WORKERS="4"
//!
//! # 저장소 설정
//! export STORE_BACKEND="mongodb"        # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_records_dev"
//!
//! # 비즈니스 규칙
//! export API_ADULT_AGE="18"
//! export PAGE_SIZE_DEFAULT="20"
//! export PAGE_SIZE_MAX="100"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${api.adult_age}")` | `UserServiceConfig::from_env()` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod user_config;

pub use data_config::{Environment, RateLimitConfig, ServerConfig, StoreBackend};
pub use user_config::{PaginationConfig, UserServiceConfig};
