//! Result type alias for mapx.

use crate::MapxError;

/// A specialized `Result` type for mapx operations.
pub type MapxResult<T> = Result<T, MapxError>;
