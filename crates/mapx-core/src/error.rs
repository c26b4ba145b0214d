//! Unified error type for the mapx crates.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for mapx operations.
///
/// Covers validation of caller input, mapping-engine failures, and the
/// domain errors that fallback actions raise on behalf of callers.
#[derive(Error, Debug)]
pub enum MapxError {
    /// Validation error on caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Resource not found: {resource_type} with key {key}")]
    NotFound {
        resource_type: &'static str,
        key: String,
    },

    /// Technical error raised by a caller-supplied fallback
    #[error("{0}")]
    Technical(String),

    /// Functional (business) error raised by a caller-supplied fallback
    #[error("{0}")]
    Functional(String),

    /// Failure signalled by the mapping capability
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MapxError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Technical(_) => "TECHNICAL_ERROR",
            Self::Functional(_) => "FUNCTIONAL_ERROR",
            Self::Mapping(_) => "MAPPING_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error for a keyed resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, key: T) -> Self {
        Self::NotFound {
            resource_type,
            key: key.to_string(),
        }
    }

    /// Creates a technical error.
    #[must_use]
    pub fn technical<T: Into<String>>(message: T) -> Self {
        Self::Technical(message.into())
    }

    /// Creates a functional error.
    #[must_use]
    pub fn functional<T: Into<String>>(message: T) -> Self {
        Self::Functional(message.into())
    }

    /// Creates a mapping error.
    #[must_use]
    pub fn mapping<T: Into<String>>(message: T) -> Self {
        Self::Mapping(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for MapxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}
