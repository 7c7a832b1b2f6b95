//! Generic page request / page result types.
//!
//! Pages are zero-based. The request side is built by the API layer from
//! query parameters; the result side carries the content slice plus the
//! totals the caller needs to render paging controls.

use serde::Serialize;

/// Default page size when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on the page size accepted from a request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A zero-based page request with an optional ordering property.
#[derive(Debug, Clone)]
pub struct PageRequest {
    page: i64,
    size: i64,
    pub sort: Option<String>,
}

impl PageRequest {
    /// Build a request, clamping `page` to `>= 0` and `size` to
    /// `1..=MAX_PAGE_SIZE`.
    pub fn new(page: i64, size: i64, sort: Option<String>) -> Self {
        Self {
            page: page.max(0),
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// Row limit for the underlying query.
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Row offset for the underlying query. Saturates rather than
    /// overflowing for out-of-range page numbers; any such offset is past
    /// the last row anyway, so the query returns an empty page.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, None)
    }
}

/// One page of results plus paging metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number_of_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let size = request.limit();
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };
        Self {
            number_of_elements: content.len() as i64,
            content,
            page: request.page(),
            size,
            total_elements,
            total_pages,
        }
    }

    /// Convert the content, preserving all paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number_of_elements: self.number_of_elements,
        }
    }
}
