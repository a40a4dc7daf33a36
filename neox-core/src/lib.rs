
//! Core traits, error types, value conversions and the row mapper for neox.
//!
//! This crate is not meant to be used directly — use the [`neox`] facade
//! crate instead, which re-exports everything you need.

pub mod traits;
pub mod error;

pub mod kind;
pub mod value;
pub mod source;
pub mod record;
pub mod mapper;

pub use error::NeoxError;
pub use kind::{HasKind, ValueKind};
pub use value::{NeoxBytes, Point2D, Point3D};
pub use source::{RowSource, SourceRow};
pub use record::RecordExt;
pub use mapper::{MappingCache, RowMapper};
pub use traits::{FieldMeta, FromNeoxValue, NeoxStruct, Shape};

/// The dynamically-typed value carried by rows.
pub use neo4rs::BoltType as Value;
