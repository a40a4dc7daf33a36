//! Value kinds: the runtime type class of a Bolt value and the static type
//! class of a destination field.

use neo4rs::BoltType as Value;

/// The type class of a Bolt value.
///
/// The mapper compares the kind of each row value against the kind recorded
/// for the destination field and only assigns on a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Bytes,
    List,
    Map,
    Node,
    Relation,
    UnboundedRelation,
    Path,
    Point2D,
    Point3D,
    Duration,
    Date,
    Time,
    LocalTime,
    LocalDateTime,
    DateTime,
    DateTimeZoneId,
    /// Field kind only: accepts a value of any kind.
    Any,
}

impl ValueKind {
    /// Runtime kind of a value.
    pub fn of(v: &Value) -> Self {
        match v {
            Value::Null(_) => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Node(_) => ValueKind::Node,
            Value::Relation(_) => ValueKind::Relation,
            Value::UnboundedRelation(_) => ValueKind::UnboundedRelation,
            Value::Path(_) => ValueKind::Path,
            Value::Point2D(_) => ValueKind::Point2D,
            Value::Point3D(_) => ValueKind::Point3D,
            Value::Duration(_) => ValueKind::Duration,
            Value::Date(_) => ValueKind::Date,
            Value::Time(_) => ValueKind::Time,
            Value::LocalTime(_) => ValueKind::LocalTime,
            Value::LocalDateTime(_) => ValueKind::LocalDateTime,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::DateTimeZoneId(_) => ValueKind::DateTimeZoneId,
        }
    }

    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Boolean => "Boolean",
            ValueKind::Integer => "Integer",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::Bytes => "Bytes",
            ValueKind::List => "List",
            ValueKind::Map => "Map",
            ValueKind::Node => "Node",
            ValueKind::Relation => "Relationship",
            ValueKind::UnboundedRelation => "UnboundedRelationship",
            ValueKind::Path => "Path",
            ValueKind::Point2D => "Point2D",
            ValueKind::Point3D => "Point3D",
            ValueKind::Duration => "Duration",
            ValueKind::Date => "Date",
            ValueKind::Time => "Time",
            ValueKind::LocalTime => "LocalTime",
            ValueKind::LocalDateTime => "LocalDateTime",
            ValueKind::DateTime => "DateTime",
            ValueKind::DateTimeZoneId => "DateTimeZoneId",
            ValueKind::Any => "Any",
        }
    }

    /// Whether a field of kind `self` can hold a value of kind `value`.
    ///
    /// Kinds must be equal, except that `Any` accepts everything and
    /// `DateTime` also accepts `DateTimeZoneId`.
    pub fn accepts(self, value: ValueKind) -> bool {
        match (self, value) {
            (ValueKind::Any, _) => true,
            (ValueKind::DateTime, ValueKind::DateTimeZoneId) => true,
            (field, value) => field == value,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns a human-readable name for a [`neo4rs::BoltType`] variant.
pub fn type_name(v: &Value) -> &'static str {
    ValueKind::of(v).name()
}

/// The static kind of a Rust type used as a destination field.
///
/// Implemented for every type that also implements
/// [`FromNeoxValue`](crate::traits::FromNeoxValue). The derive reads these
/// constants to build the field-descriptor table.
pub trait HasKind {
    const KIND: ValueKind;
    /// `Null` values are accepted and map to the type's empty state.
    const NULLABLE: bool = false;
}

