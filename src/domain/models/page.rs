//! 페이지 단위 조회 모델
//!
//! Spring Data의 `Pageable`/`Page`에 대응합니다. 페이지 번호는 0부터 시작합니다.

use serde::{Deserialize, Serialize};

/// 조회할 페이지 창
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// 건너뛸 레코드 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// 저장소가 반환하는 한 페이지 분량의 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    /// 조건에 맞는 전체 레코드 수
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    /// 페이지 메타데이터를 유지한 채 항목만 변환합니다.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
