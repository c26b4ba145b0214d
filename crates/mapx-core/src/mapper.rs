//! The mapping capability and fallback control flow.

use crate::{MapxError, MapxResult};

/// The external object-mapping capability, bound to a source and
/// destination shape.
///
/// Implementations come pre-configured: field-correspondence rules are
/// entirely their responsibility. Mapping failures propagate unhandled
/// through every extension built on top of this trait.
pub trait Mapper<S, D> {
    /// Maps a source value into a new destination instance.
    fn map(&self, source: &S) -> MapxResult<D>;

    /// Maps a source value's fields onto an existing destination instance.
    fn map_into(&self, source: &S, destination: &mut D) -> MapxResult<()>;
}

/// Outcome of a fallback action invoked when an expected source is absent.
///
/// Absence by itself is never an error; a fallback decides whether the
/// operation continues as a no-op or aborts with a domain error.
#[derive(Debug)]
pub enum Fallback {
    /// The operation continues; absent source stays a no-op.
    Continue,
    /// The operation aborts with the given error, surfaced unmodified.
    Abort(MapxError),
}

impl Fallback {
    /// Shorthand for aborting with a technical error.
    #[must_use]
    pub fn technical<T: Into<String>>(message: T) -> Self {
        Self::Abort(MapxError::technical(message))
    }

    /// Shorthand for aborting with a functional error.
    #[must_use]
    pub fn functional<T: Into<String>>(message: T) -> Self {
        Self::Abort(MapxError::functional(message))
    }
}
