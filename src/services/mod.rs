//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체와 설정을 생성자로 주입받습니다.
//! 애플리케이션 시작 시 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user_service = UserService::new(store, UserServiceConfig::default());
//! ```

pub mod users;
