//! Pagination types for projected collections.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ordering direction for sorted pagination requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

/// A request for a page of results.
///
/// Page numbers are 1-based: the first page is `page_number == 1`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaginationRequest {
    /// The page number (1-based).
    #[validate(range(min = 1, message = "Page number must be at least 1"))]
    pub page_number: usize,
    /// The number of items per page.
    #[validate(range(min = 1, message = "Page size must be at least 1"))]
    pub page_size: usize,
    /// The field to sort by, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    /// The direction to sort in; ascending when unspecified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

impl PaginationRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 10;

    /// Creates a new unsorted page request.
    #[must_use]
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
            sort_field: None,
            sort_direction: None,
        }
    }

    /// Creates a page request sorted on the given field.
    #[must_use]
    pub fn with_sort(
        page_number: usize,
        page_size: usize,
        sort_field: impl Into<String>,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            page_number,
            page_size,
            sort_field: Some(sort_field.into()),
            sort_direction: Some(sort_direction),
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }

    /// Returns the number of items to skip before the requested page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page_number.saturating_sub(1) * self.page_size
    }

    /// Returns the number of items on a full page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.page_size
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A page of projected results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult<T> {
    /// The items on this page, bounded to `page_size`.
    pub items: Vec<T>,
    /// The total number of items across all pages.
    pub total_count: u64,
    /// The page number this result holds (1-based).
    pub page_number: usize,
    /// The requested page size.
    pub page_size: usize,
    /// The total number of pages.
    pub total_pages: u64,
}

impl<T> PaginationResult<T> {
    /// Creates a new pagination result, deriving `total_pages`.
    #[must_use]
    pub fn new(items: Vec<T>, total_count: u64, page_number: usize, page_size: usize) -> Self {
        let total_pages = if page_size > 0 {
            total_count.div_ceil(page_size as u64)
        } else {
            0
        };

        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
        }
    }

    /// Creates an empty result for the given page.
    #[must_use]
    pub fn empty(page_number: usize, page_size: usize) -> Self {
        Self::new(Vec::new(), 0, page_number, page_size)
    }

    /// Returns true if this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there is a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page_number as u64) < self.total_pages
    }

    /// Returns true if there is a page before this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    /// Maps the page items to a different type, keeping the page metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginationResult<U> {
        PaginationResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

impl<T> IntoIterator for PaginationResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_offset() {
        assert_eq!(PaginationRequest::new(1, 10).offset(), 0);
        assert_eq!(PaginationRequest::new(2, 10).offset(), 10);
        assert_eq!(PaginationRequest::new(5, 15).offset(), 60);
    }

    #[test]
    fn test_request_first() {
        let req = PaginationRequest::first();
        assert_eq!(req.page_number, 1);
        assert_eq!(req.page_size, PaginationRequest::DEFAULT_SIZE);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_request_validation() {
        assert!(PaginationRequest::new(1, 10).validate().is_ok());
        assert!(PaginationRequest::new(0, 10).validate().is_err());
        assert!(PaginationRequest::new(1, 0).validate().is_err());
    }

    #[test]
    fn test_request_with_sort() {
        let req = PaginationRequest::with_sort(1, 10, "name", SortDirection::Desc);
        assert_eq!(req.sort_field.as_deref(), Some("name"));
        assert_eq!(req.sort_direction, Some(SortDirection::Desc));
    }

    #[test]
    fn test_total_pages_ceiling() {
        let result: PaginationResult<i32> = PaginationResult::new(vec![1], 11, 1, 5);
        assert_eq!(result.total_pages, 3); // ceil(11 / 5)

        let exact: PaginationResult<i32> = PaginationResult::new(vec![1], 10, 1, 5);
        assert_eq!(exact.total_pages, 2);
    }

    #[test]
    fn test_has_next_and_previous() {
        let middle: PaginationResult<i32> = PaginationResult::new(vec![1, 2], 25, 2, 10);
        assert!(middle.has_next());
        assert!(middle.has_previous());

        let first: PaginationResult<i32> = PaginationResult::new(vec![1, 2], 25, 1, 10);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last: PaginationResult<i32> = PaginationResult::new(vec![1, 2], 22, 3, 10);
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn test_empty_result() {
        let result: PaginationResult<i32> = PaginationResult::empty(1, 10);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_result_map() {
        let result = PaginationResult::new(vec![1, 2, 3], 3, 1, 10);
        let mapped = result.map(|x| x * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.total_count, 3);
        assert_eq!(mapped.total_pages, 1);
    }

    #[test]
    fn test_request_serde_roundtrip() {
        let req = PaginationRequest::with_sort(2, 20, "name", SortDirection::Asc);
        let json = serde_json::to_string(&req).unwrap();
        let parsed: PaginationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.page_number, 2);
        assert_eq!(parsed.page_size, 20);
        assert_eq!(parsed.sort_field.as_deref(), Some("name"));
        assert_eq!(parsed.sort_direction, Some(SortDirection::Asc));
    }

    #[test]
    fn test_sort_direction_serde() {
        assert_eq!(serde_json::to_string(&SortDirection::Asc).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"desc\"");
    }
}
