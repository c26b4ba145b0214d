//! # Mapx Core
//!
//! Core types and traits for the mapx mapping extensions: the error type,
//! pagination request/result, the sort and keyed-source capabilities, and
//! the `Mapper` trait the extension crates build on.

pub mod error;
pub mod lookup;
pub mod mapper;
pub mod pagination;
pub mod result;
pub mod sort;
pub mod validation;

pub use error::*;
pub use lookup::*;
pub use mapper::*;
pub use pagination::*;
pub use result::*;
pub use sort::*;
pub use validation::*;
