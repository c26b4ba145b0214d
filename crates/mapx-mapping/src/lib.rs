//! # Mapx Mapping
//!
//! Extension traits layered on the mapx `Mapper` capability: bulk
//! collection projection with pagination, and conditional "map if exists"
//! field copying from nullable sources or lookup-by-key structures.

pub mod collection;
pub mod conditional;

pub use collection::MapToExt;
pub use conditional::MapIfExistExt;
