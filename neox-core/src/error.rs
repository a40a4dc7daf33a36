//! Error types for neox mapping and conversions.

use std::sync::Arc;
use thiserror::Error;

/// Unified error type for all neox operations.
///
/// Only [`InvalidDestination`](NeoxError::InvalidDestination), [`NoRecord`](NeoxError::NoRecord)
/// and upstream stream errors ever escape [`RowMapper::map_into`](crate::mapper::RowMapper::map_into).
/// Conversion errors raised while assigning a single field are logged and the
/// field is skipped. Derived `set_field` impls wrap them with
/// [`with_context`](NeoxError::with_context):
///
/// ```text
/// User::age (tag 'user_age'): type mismatch: expected Integer, got String (u32)
/// ```
#[derive(Error, Debug)]
pub enum NeoxError {
    /// The destination handed to the mapper is not a struct.
    #[error("invalid destination: expected a struct, got {found}")]
    InvalidDestination { found: String },

    /// The row source has no current row (not advanced yet, or exhausted).
    #[error("no current record on the result stream")]
    NoRecord,

    /// A general mapping error with a freeform message.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// A `BoltType` variant did not match the expected Rust type.
    #[error("type mismatch: expected {expected}, got {got} ({context})")]
    TypeMismatch {
        expected: String,
        got: String,
        context: String,
    },

    /// `set_field` was called with an index the destination does not map.
    #[error("no mapped field at index {index} on {struct_name}")]
    UnknownField { index: usize, struct_name: String },

    /// Wraps an inner error with the struct, field and tag it came from.
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<NeoxError>,
    },

    /// A driver error retained by a result stream.
    ///
    /// Shared so the same failure can be reported on every later call.
    #[error("result stream failed: {0}")]
    Stream(Arc<neo4rs::Error>),

    /// A `neo4rs::Error` from the underlying driver.
    #[error("neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),
}

impl NeoxError {
    /// Create a [`TypeMismatch`](NeoxError::TypeMismatch) error.
    pub fn type_mismatch(expected: &str, got: &str, context: &str) -> Self {
        NeoxError::TypeMismatch {
            expected: expected.to_owned(),
            got: got.to_owned(),
            context: context.to_owned(),
        }
    }

    /// Create an [`InvalidDestination`](NeoxError::InvalidDestination) error.
    pub fn invalid_destination(found: &str) -> Self {
        NeoxError::InvalidDestination {
            found: found.to_owned(),
        }
    }

    /// Create an [`UnknownField`](NeoxError::UnknownField) error.
    pub fn unknown_field(index: usize, struct_name: &str) -> Self {
        NeoxError::UnknownField {
            index,
            struct_name: struct_name.to_owned(),
        }
    }

    /// Wrap this error with additional context, producing a [`Context`](NeoxError::Context) variant.
    ///
    /// ```rust
    /// # use neox_core::NeoxError;
    /// let err = NeoxError::type_mismatch("Integer", "String", "u32");
    /// let wrapped = err.with_context("User::age (tag 'user_age')");
    /// assert!(wrapped.to_string().contains("User::age"));
    /// ```
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        NeoxError::Context {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// Returns `true` if this is an [`InvalidDestination`](NeoxError::InvalidDestination) error.
    pub fn is_invalid_destination(&self) -> bool {
        matches!(self, NeoxError::InvalidDestination { .. })
    }
}
