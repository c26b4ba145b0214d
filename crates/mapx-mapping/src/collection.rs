//! Collection projection extensions.

use mapx_core::{Mapper, MapxResult, PaginationRequest, PaginationResult, SortExt, Sortable, ValidateExt};
use tracing::debug;

/// Extension trait projecting a collection of source items into
/// destination items via the mapping capability.
///
/// Implemented for `[S]`, so both slices and `Vec<S>` get the methods.
pub trait MapToExt<S> {
    /// Maps every item into a destination instance, preserving order and
    /// count. The first mapping failure aborts and propagates.
    fn map_to<D, M: Mapper<S, D>>(&self, mapper: &M) -> MapxResult<Vec<D>>;

    /// Maps the full collection, sorts it per the request, and returns the
    /// requested page.
    ///
    /// Mapping happens on the whole input before slicing, so `total_count`
    /// reflects the unpaginated source. A page number past the end yields
    /// an empty page with `total_count` intact. A page number or page size
    /// of zero is rejected with a validation error.
    fn to_pagination<D, M>(
        &self,
        request: &PaginationRequest,
        mapper: &M,
    ) -> MapxResult<PaginationResult<D>>
    where
        D: Sortable,
        M: Mapper<S, D>;
}

impl<S> MapToExt<S> for [S] {
    fn map_to<D, M: Mapper<S, D>>(&self, mapper: &M) -> MapxResult<Vec<D>> {
        self.iter().map(|item| mapper.map(item)).collect()
    }

    fn to_pagination<D, M>(
        &self,
        request: &PaginationRequest,
        mapper: &M,
    ) -> MapxResult<PaginationResult<D>>
    where
        D: Sortable,
        M: Mapper<S, D>,
    {
        request.validate_request()?;

        debug!(
            "Paginating projected collection, page: {}, size: {}, total: {}",
            request.page_number,
            request.page_size,
            self.len()
        );

        let total_count = self.len() as u64;
        let items: Vec<D> = self
            .map_to(mapper)?
            .sort_by_request(request)
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect();

        Ok(PaginationResult::new(
            items,
            total_count,
            request.page_number,
            request.page_size,
        ))
    }
}
