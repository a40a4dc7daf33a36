//! Convenience re-exports for common neox usage.
//!
//! ```rust
//! use neox::prelude::*;
//! ```
//!
//! This imports the `NeoxStruct` derive and trait, the typed getters
//! (`RecordExt`), the row traits, the mapper, the error type and the value
//! wrapper types.

pub use crate::NeoxStruct;
pub use neox_core::traits::{FromNeoxValue, NeoxStruct as NeoxStructTrait};
pub use neox_core::{RecordExt, RowMapper, RowSource, SourceRow, ValueKind};
pub use neox_core::NeoxError;
pub use neox_core::{NeoxBytes, Point2D, Point3D};
pub use crate::records::Records;
pub use crate::stream::NeoxStream;
