//! 사용자 레코드 비즈니스 규칙 설정
//!
//! Spring의 `@Value("${api.adult_age}")` 주입 대신 설정 구조체를 만들어
//! [`UserService::new`](crate::services::users::user_service::UserService::new)에
//! 명시적으로 전달합니다. 한 번 읽은 뒤에는 변경되지 않습니다.

use super::data_config::parse_env;

/// 사용자 서비스 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// 생성 및 수정 시 요구되는 최소 나이 (만 나이, 년 단위)
    pub adult_age: u32,
}

impl UserServiceConfig {
    pub const DEFAULT_ADULT_AGE: u32 = 18;

    pub fn new(adult_age: u32) -> Self {
        Self { adult_age }
    }

    /// `API_ADULT_AGE` 환경 변수에서 설정을 읽습니다 (기본값: 18).
    pub fn from_env() -> Self {
        Self::new(parse_env("API_ADULT_AGE", Self::DEFAULT_ADULT_AGE))
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADULT_AGE)
    }
}

/// 목록 조회 페이지 크기 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_size: u64,
    pub max_size: u64,
}

impl PaginationConfig {
    /// `PAGE_SIZE_DEFAULT` (기본값: 20), `PAGE_SIZE_MAX` (기본값: 100)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_size = parse_env("PAGE_SIZE_MAX", defaults.max_size).max(1);
        let default_size = parse_env("PAGE_SIZE_DEFAULT", defaults.default_size)
            .clamp(1, max_size);

        Self { default_size, max_size }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_adult_age() {
        assert_eq!(UserServiceConfig::default().adult_age, 18);
    }

    #[test]
    fn test_pagination_defaults() {
        let config = PaginationConfig::default();

        assert_eq!(config.default_size, 20);
        assert_eq!(config.max_size, 100);
    }
}
