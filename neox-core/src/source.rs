//! Row access for Neo4j query results.
//!
//! These traits isolate the `neo4rs` row, node and relationship APIs so the
//! mapper and the typed getters only depend on this module.

use std::collections::HashMap;

use neo4rs::BoltType as Value;

use crate::error::NeoxError;

/// A lookup of column name to dynamically-typed value.
pub trait SourceRow {
    /// Read the value stored under `name`.
    ///
    /// Returns `None` if the row has no such column.
    fn get(&self, name: &str) -> Option<Value>;

    /// Check whether a column exists in the row.
    fn has_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl SourceRow for neo4rs::Row {
    fn get(&self, name: &str) -> Option<Value> {
        neo4rs::Row::get::<Value>(self, name).ok()
    }
}

/// Node properties as a row, for mapping a returned node onto a struct.
impl SourceRow for neo4rs::BoltNode {
    fn get(&self, name: &str) -> Option<Value> {
        neo4rs::BoltNode::get::<Value>(self, name).ok()
    }
}

/// Relationship properties as a row.
impl SourceRow for neo4rs::BoltRelation {
    fn get(&self, name: &str) -> Option<Value> {
        neo4rs::BoltRelation::get::<Value>(self, name).ok()
    }
}

impl SourceRow for HashMap<String, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).cloned()
    }
}

impl<R: SourceRow + ?Sized> SourceRow for &R {
    fn get(&self, name: &str) -> Option<Value> {
        (**self).get(name)
    }
}

/// A result stream positioned on a current row.
///
/// The mapper borrows the stream, never owns it: it checks [`err`](RowSource::err)
/// first and reads [`current`](RowSource::current) only when the stream is healthy.
pub trait RowSource {
    type Row: SourceRow;

    /// The error the stream failed with, if any.
    fn err(&self) -> Option<NeoxError>;

    /// The row the stream is positioned on. `None` before the first advance
    /// and after exhaustion.
    fn current(&self) -> Option<&Self::Row>;
}
