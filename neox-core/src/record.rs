//! Typed single-value getters over any [`SourceRow`].

use crate::kind::ValueKind;
use crate::source::SourceRow;
use crate::traits::FromNeoxValue;

/// Typed accessors for a result row.
///
/// Each getter returns `None` when the key is absent or the stored value is
/// of a different kind. No coercion happens: `get_float` on an integer
/// column is `None`.
///
/// ```rust
/// use neo4rs::{BoltList, BoltType, Row};
/// use neox_core::RecordExt;
///
/// let row = Row::new(
///     BoltList::from(vec![BoltType::from("name"), BoltType::from("age")]),
///     BoltList::from(vec![BoltType::from("Ada"), BoltType::from(36)]),
/// );
/// assert_eq!(row.get_string("name").as_deref(), Some("Ada"));
/// assert_eq!(row.get_int("age"), Some(36));
/// assert_eq!(row.get_int("name"), None);
/// ```
pub trait RecordExt: SourceRow {
    /// Read `key` as an integer.
    fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            neo4rs::BoltType::Integer(i) => Some(i.value),
            _ => None,
        }
    }

    /// Read `key` as a string.
    fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            neo4rs::BoltType::String(s) => Some(s.value),
            _ => None,
        }
    }

    /// Read `key` as a float.
    fn get_float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            neo4rs::BoltType::Float(f) => Some(f.value),
            _ => None,
        }
    }

    /// Read `key` as a boolean.
    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            neo4rs::BoltType::Boolean(b) => Some(b.value),
            _ => None,
        }
    }

    /// Read `key` as any [`FromNeoxValue`] type.
    fn get_as<T: FromNeoxValue>(&self, key: &str) -> Option<T> {
        T::from_value(self.get(key)?).ok()
    }

    /// Runtime kind of the value stored under `key`.
    fn kind_of(&self, key: &str) -> Option<ValueKind> {
        self.get(key).map(|v| ValueKind::of(&v))
    }
}

impl<R: SourceRow + ?Sized> RecordExt for R {}
