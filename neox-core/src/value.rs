//! Destination field types.
//!
//! Each type that can back a struct field gets its static [`ValueKind`]
//! ([`HasKind`]) and its [`FromNeoxValue`] conversion from a single
//! declaration, so the kind the mapper checks and the variant the conversion
//! accepts cannot drift apart.

use std::collections::HashMap;

use neo4rs::BoltType as Value;

use crate::error::NeoxError;
use crate::kind::{type_name, HasKind, ValueKind};
use crate::traits::FromNeoxValue;

/// The error for a value whose kind `T` does not accept.
fn mismatch<T: HasKind>(got: &Value) -> NeoxError {
    NeoxError::type_mismatch(T::KIND.name(), type_name(got), std::any::type_name::<T>())
}

/// The error for a value of the right kind that still does not fit `T`.
fn unrepresentable<T>(detail: impl std::fmt::Display) -> NeoxError {
    NeoxError::Mapping(format!("{} cannot hold {detail}", std::any::type_name::<T>()))
}

/// Declares a field type: `Kind => Type, |bolt_payload| conversion`.
///
/// The conversion receives the payload of the `BoltType::Kind` variant and
/// returns `Result<Type, NeoxError>`.
macro_rules! field_type {
    ($kind:ident => $t:ty, |$v:ident| $convert:expr) => {
        impl HasKind for $t {
            const KIND: ValueKind = ValueKind::$kind;
        }

        impl FromNeoxValue for $t {
            fn from_value(value: Value) -> Result<Self, NeoxError> {
                match value {
                    Value::$kind($v) => $convert,
                    other => Err(mismatch::<$t>(&other)),
                }
            }
        }
    };
}

macro_rules! integer_field {
    ($($t:ty),+) => {
        $(field_type!(Integer => $t, |i| {
            <$t>::try_from(i.value).map_err(|_| unrepresentable::<$t>(i.value))
        });)+
    };
}

integer_field!(i64, i32, i16, i8, u64, u32, u16, u8);

field_type!(Float => f64, |f| Ok(f.value));
field_type!(Float => f32, |f| Ok(f.value as f32));
field_type!(String => String, |s| Ok(s.value));
field_type!(Boolean => bool, |b| Ok(b.value));
field_type!(Node => neo4rs::BoltNode, |n| Ok(n));
field_type!(Relation => neo4rs::BoltRelation, |r| Ok(r));
field_type!(Bytes => NeoxBytes, |b| Ok(NeoxBytes(b.value.to_vec())));
field_type!(Point2D => Point2D, |p| Ok(Point2D {
    sr_id: p.sr_id.value,
    x: p.x.value,
    y: p.y.value,
}));
field_type!(Point3D => Point3D, |p| Ok(Point3D {
    sr_id: p.sr_id.value,
    x: p.x.value,
    y: p.y.value,
    z: p.z.value,
}));
field_type!(Date => chrono::NaiveDate, |d| {
    d.try_into().map_err(|e: neo4rs::Error| unrepresentable::<chrono::NaiveDate>(e))
});
field_type!(LocalTime => chrono::NaiveTime, |t| Ok(t.into()));
field_type!(Time => (chrono::NaiveTime, chrono::FixedOffset), |t| Ok(t.into()));
field_type!(LocalDateTime => chrono::NaiveDateTime, |dt| {
    dt.try_into().map_err(|e: neo4rs::Error| unrepresentable::<chrono::NaiveDateTime>(e))
});
field_type!(Duration => std::time::Duration, |d| Ok(d.into()));

/// `DateTime` fields also take zoned values; see [`ValueKind::accepts`].
impl HasKind for chrono::DateTime<chrono::FixedOffset> {
    const KIND: ValueKind = ValueKind::DateTime;
}

impl FromNeoxValue for chrono::DateTime<chrono::FixedOffset> {
    fn from_value(value: Value) -> Result<Self, NeoxError> {
        type Target = chrono::DateTime<chrono::FixedOffset>;
        match value {
            Value::DateTime(dt) => dt.try_into().map_err(|e: neo4rs::Error| unrepresentable::<Target>(e)),
            Value::DateTimeZoneId(dt) => (&dt).try_into().map_err(|e: neo4rs::Error| unrepresentable::<Target>(e)),
            other => Err(mismatch::<Target>(&other)),
        }
    }
}

/// A field of the raw value type takes anything, unconverted.
impl HasKind for Value {
    const KIND: ValueKind = ValueKind::Any;
}

impl FromNeoxValue for Value {
    fn from_value(value: Value) -> Result<Self, NeoxError> {
        Ok(value)
    }
}

// Containers: the kind is the container's, elements convert one by one.

impl<T> HasKind for Vec<T> {
    const KIND: ValueKind = ValueKind::List;
}

impl<T: FromNeoxValue> FromNeoxValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, NeoxError> {
        match value {
            Value::List(xs) => xs.value.into_iter().map(T::from_value).collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<V> HasKind for HashMap<String, V> {
    const KIND: ValueKind = ValueKind::Map;
}

impl<V: FromNeoxValue> FromNeoxValue for HashMap<String, V> {
    fn from_value(value: Value) -> Result<Self, NeoxError> {
        match value {
            Value::Map(m) => m
                .value
                .into_iter()
                .map(|(k, v)| Ok((k.value, V::from_value(v)?)))
                .collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

/// Same kind as `T`, and `Null` is accepted as `None`.
impl<T: HasKind> HasKind for Option<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = true;
}

impl<T: FromNeoxValue> FromNeoxValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, NeoxError> {
        match value {
            Value::Null(_) => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// A spatial point in two dimensions. `sr_id` names the coordinate system
/// (`4326` WGS 84, `7203` cartesian).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point2D {
    pub sr_id: i64,
    pub x: f64,
    pub y: f64,
}

/// [`Point2D`] with a height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point3D {
    pub sr_id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Raw bytes. `Vec<u8>` is a list field, so bytes get their own type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeoxBytes(pub Vec<u8>);
