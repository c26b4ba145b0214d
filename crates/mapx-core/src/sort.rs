//! Sort capability applied from a pagination request.

use crate::{PaginationRequest, SortDirection};
use std::cmp::Ordering;

/// Trait for items that expose a comparable key per sortable field.
///
/// Returning `None` means the item has no key for that field; such items
/// order after keyed ones.
pub trait Sortable {
    /// Returns the item's sort key for the given field name, if any.
    fn sort_key(&self, field: &str) -> Option<String>;
}

/// Extension trait applying a pagination request's sort directive.
pub trait SortExt<T> {
    /// Sorts the sequence per the request; identity when the request
    /// specifies no sort field. The sort is stable.
    #[must_use]
    fn sort_by_request(self, request: &PaginationRequest) -> Vec<T>;
}

impl<T: Sortable> SortExt<T> for Vec<T> {
    fn sort_by_request(mut self, request: &PaginationRequest) -> Vec<T> {
        let Some(field) = request.sort_field.as_deref() else {
            return self;
        };
        let direction = request.sort_direction.unwrap_or_default();

        self.sort_by(|a, b| match (a.sort_key(field), b.sort_key(field)) {
            (Some(ka), Some(kb)) => match direction {
                SortDirection::Asc => ka.cmp(&kb),
                SortDirection::Desc => kb.cmp(&ka),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        self
    }
}
