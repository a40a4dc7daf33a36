
//! Procedural macros for neox.
//!
//! This crate is not meant to be used directly — use the [`neox`] facade
//! crate which re-exports all macros.

extern crate proc_macro;

use proc_macro::TokenStream;

mod neox_struct;

/// Derive `neox::core::traits::NeoxStruct` for a struct.
///
/// Generates the field-descriptor table the row mapper caches: for each
/// field its tag, declaration index and value kind, plus a setter that
/// converts a row value via `FromNeoxValue`.
///
/// # Attributes
///
/// **Field-level:**
/// - `#[neox(tag = "...")]` — the column name the field is read from. A
///   field without a tag is mapped under the empty column name.
/// - `#[neox(skip)]` — leave the field out of the mapping entirely.
///
/// # Field type behaviour
///
/// - **`Option<T>`** — also accepts `null`, which sets `None`.
/// - **`neo4rs::BoltType`** — accepts a value of any kind.
/// - **`T: FromNeoxValue + HasKind`** — accepts values of `T`'s kind only.
///
/// # Example
///
/// ```rust,ignore
/// use neox::prelude::*;
///
/// #[derive(Debug, Default, NeoxStruct)]
/// struct User {
///     #[neox(tag = "user_name")]
///     name: String,
///     #[neox(tag = "user_age")]
///     age: u32,
///     #[neox(tag = "nickname")]
///     nickname: Option<String>,
///     #[neox(skip)]
///     loaded_at: Option<std::time::Instant>,
/// }
/// ```
#[proc_macro_derive(NeoxStruct, attributes(neox))]
pub fn neox_struct(input: TokenStream) -> TokenStream {
    neox_struct::expand(input)
}
