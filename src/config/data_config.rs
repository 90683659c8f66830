//! 서버, 저장소, 환경 관련 설정
//!
//! 모든 값은 환경 변수에서 읽으며, 값이 없거나 파싱에 실패하면
//! 개발 환경에서 안전한 기본값을 사용합니다.

use std::convert::Infallible;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use log::error;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로부터 현재 환경을 결정합니다.
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_env("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        parse_env("HTTP_WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 레코드 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션 (운영 기본값)
    MongoDb,
    /// 프로세스 메모리 (테스트, 로컬 실행용)
    Memory,
}

impl StoreBackend {
    /// `STORE_BACKEND` 환경 변수로부터 백엔드를 결정합니다.
    pub fn current() -> Self {
        let Ok(backend) = env::var("STORE_BACKEND").unwrap_or_default().parse();
        backend
    }
}

/// 알 수 없는 값은 MongoDB로 해석합니다.
impl FromStr for StoreBackend {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        })
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self {
            per_second: parse_env("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// 환경 변수를 읽어 파싱합니다.
///
/// 변수가 없으면 기본값을, 파싱에 실패하면 에러를 기록한 뒤 기본값을 반환합니다.
pub(crate) fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!(" In-Memory ".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!("mongodb".parse::<StoreBackend>(), Ok(StoreBackend::MongoDb));
        assert_eq!("".parse::<StoreBackend>(), Ok(StoreBackend::MongoDb));
    }

    #[test]
    fn test_parse_env_falls_back_on_missing_and_invalid() {
        assert_eq!(parse_env::<u32>("USER_RECORDS_TEST_UNSET_VARIABLE", 7), 7);

        unsafe { env::set_var("USER_RECORDS_TEST_INVALID_NUMBER", "abc") };
        assert_eq!(parse_env::<u32>("USER_RECORDS_TEST_INVALID_NUMBER", 9), 9);

        unsafe { env::set_var("USER_RECORDS_TEST_VALID_NUMBER", " 42 ") };
        assert_eq!(parse_env::<u32>("USER_RECORDS_TEST_VALID_NUMBER", 9), 42);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
