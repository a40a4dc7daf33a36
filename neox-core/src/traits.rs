//! Core traits for mapping between Neo4j bolt values and Rust structs.

use neo4rs::BoltType as Value;

use crate::error::NeoxError;
use crate::kind::{HasKind, ValueKind};

/// Converts a single `neo4rs::BoltType` value into a Rust type.
///
/// This is the conversion primitive behind every destination field. See
/// [`value`](crate::value) for the provided implementations.
pub trait FromNeoxValue: Sized {
    /// Convert a [`BoltType`](neo4rs::BoltType) into `Self`.
    fn from_value(value: Value) -> Result<Self, NeoxError>;
}

/// The static shape of a mapping destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A struct with named, settable fields.
    Record { name: &'static str },
    /// Anything else: a scalar, a list, a map.
    Value(ValueKind),
}

impl Shape {
    pub fn is_record(&self) -> bool {
        matches!(self, Shape::Record { .. })
    }

    /// Name used in log lines and error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Shape::Record { name } => name,
            Shape::Value(kind) => kind.name(),
        }
    }
}

/// Descriptor of one destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Column name this field is read from. Empty when the field is untagged.
    pub tag: &'static str,
    /// Rust field name.
    pub name: &'static str,
    /// Position of the field in the struct declaration.
    pub index: usize,
    pub kind: ValueKind,
    pub nullable: bool,
}

impl FieldMeta {
    /// Describe a field of type `T`.
    pub fn of<T: HasKind>(tag: &'static str, name: &'static str, index: usize) -> Self {
        FieldMeta {
            tag,
            name,
            index,
            kind: T::KIND,
            nullable: T::NULLABLE,
        }
    }

    /// Whether a value of kind `kind` may be assigned to this field.
    pub fn accepts(&self, kind: ValueKind) -> bool {
        self.kind.accepts(kind) || (self.nullable && kind == ValueKind::Null)
    }
}

/// A destination the [`RowMapper`](crate::mapper::RowMapper) can write into.
///
/// Implemented by `#[derive(NeoxStruct)]`, which generates the field
/// descriptor table from `#[neox(tag = "...")]` attributes. Scalars and
/// collections implement it too, reporting a non-record [`Shape`] so the
/// mapper can reject them with [`NeoxError::InvalidDestination`].
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Default, NeoxStruct)]
/// struct User {
///     #[neox(tag = "user_name")]
///     name: String,
///     #[neox(tag = "user_age")]
///     age: u32,
/// }
/// ```
pub trait NeoxStruct {
    /// Static shape of the destination. Must be cheap: called on every map.
    fn shape(&self) -> Shape;

    /// Enumerate the mapped fields. Called once per mapper instance.
    fn fields(&self) -> Vec<FieldMeta>;

    /// Assign `value` to the field declared at `index`.
    ///
    /// On error the field is left unchanged.
    fn set_field(&mut self, index: usize, value: Value) -> Result<(), NeoxError>;
}

macro_rules! impl_value_destination {
    ($($t:ty),+ $(,)?) => {
        $(impl NeoxStruct for $t {
            fn shape(&self) -> Shape {
                Shape::Value(<$t as HasKind>::KIND)
            }

            fn fields(&self) -> Vec<FieldMeta> {
                Vec::new()
            }

            fn set_field(&mut self, _index: usize, _value: Value) -> Result<(), NeoxError> {
                Err(NeoxError::invalid_destination(stringify!($t)))
            }
        })+
    };
}

impl_value_destination!(i64, i32, i16, i8, u64, u32, u16, u8, f64, f32, bool, String, Value);

impl<T> NeoxStruct for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Value(ValueKind::List)
    }

    fn fields(&self) -> Vec<FieldMeta> {
        Vec::new()
    }

    fn set_field(&mut self, _index: usize, _value: Value) -> Result<(), NeoxError> {
        Err(NeoxError::invalid_destination("Vec<T>"))
    }
}

impl<V> NeoxStruct for std::collections::HashMap<String, V> {
    fn shape(&self) -> Shape {
        Shape::Value(ValueKind::Map)
    }

    fn fields(&self) -> Vec<FieldMeta> {
        Vec::new()
    }

    fn set_field(&mut self, _index: usize, _value: Value) -> Result<(), NeoxError> {
        Err(NeoxError::invalid_destination("HashMap<String, V>"))
    }
}

/// Mapping through a box writes into the boxed struct.
impl<T: NeoxStruct + ?Sized> NeoxStruct for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn fields(&self) -> Vec<FieldMeta> {
        (**self).fields()
    }

    fn set_field(&mut self, index: usize, value: Value) -> Result<(), NeoxError> {
        (**self).set_field(index, value)
    }
}
