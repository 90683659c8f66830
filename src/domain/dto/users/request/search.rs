//! 목록 및 생년월일 범위 조회 쿼리 파라미터
//!
//! `serde_urlencoded`는 `#[serde(flatten)]`과 숫자 필드를 함께 다루지 못하므로
//! 두 쿼리 구조체가 `page`, `size`를 각자 선언합니다.

use chrono::NaiveDate;
use serde::Deserialize;
use crate::{
    config::PaginationConfig,
    domain::models::page::PageRequest,
    errors::{AppError, AppResult},
};

/// `GET /users?page=&size=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl PageQuery {
    pub fn page_request(&self, config: &PaginationConfig) -> AppResult<PageRequest> {
        resolve_page(self.page, self.size, config)
    }
}

/// `GET /users/search?from=&to=&page=&size=`
#[derive(Debug, Clone, Deserialize)]
pub struct BirthDateRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl BirthDateRangeQuery {
    pub fn page_request(&self, config: &PaginationConfig) -> AppResult<PageRequest> {
        resolve_page(self.page, self.size, config)
    }
}

/// 페이지 파라미터를 [`PageRequest`]로 변환합니다.
///
/// `size`가 없으면 기본 크기를, 최대 크기를 넘으면 최대 크기를 사용합니다.
/// 건너뛸 레코드 수가 `i64::MAX`를 넘는 페이지는 거부합니다.
fn resolve_page(page: Option<u64>, size: Option<u64>, config: &PaginationConfig) -> AppResult<PageRequest> {
    let size = match size {
        Some(0) => {
            return Err(AppError::ValidationError(
                "페이지 크기는 1 이상이어야 합니다".to_string(),
            ));
        }
        Some(size) => size.min(config.max_size),
        None => config.default_size,
    };

    let request = PageRequest::new(page.unwrap_or(0), size);
    if i64::try_from(request.offset()).is_err() {
        return Err(AppError::ValidationError(format!(
            "페이지 번호가 너무 큽니다: {}",
            request.page
        )));
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_absent() {
        let request = PageQuery::default()
            .page_request(&PaginationConfig::default())
            .unwrap();

        assert_eq!(request, PageRequest::new(0, 20));
    }

    #[test]
    fn test_size_is_clamped_to_max() {
        let query = PageQuery { page: Some(2), size: Some(5000) };
        let request = query.page_request(&PaginationConfig::default()).unwrap();

        assert_eq!(request, PageRequest::new(2, 100));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let query = PageQuery { page: None, size: Some(0) };

        assert!(matches!(
            query.page_request(&PaginationConfig::default()),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_page_beyond_addressable_offset_is_rejected() {
        let query = PageQuery { page: Some(u64::MAX), size: None };

        assert!(matches!(
            query.page_request(&PaginationConfig::default()),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_largest_addressable_page_is_accepted() {
        let last = i64::MAX as u64 / 20;
        let query = PageQuery { page: Some(last), size: Some(20) };

        assert_eq!(
            query.page_request(&PaginationConfig::default()).unwrap(),
            PageRequest::new(last, 20)
        );
    }
}
