#![doc = r#"
Typed extensions for query results of the [`neo4rs`] Neo4j driver.

`neox` adds two things on top of the driver's rows:

* typed getters (`get_int`, `get_string`, `get_float`, `get_bool`,
  `get_as`) that return `None` instead of erroring when a column is missing
  or holds a value of another kind, and
* a row mapper that copies tagged columns onto the fields of a struct,
  building the struct's field table once per result stream.

Connections, queries and transactions stay `neo4rs`'s business.

# Quick start

## Tag a destination struct

```rust
use neox::prelude::*;

#[derive(Debug, Default, NeoxStruct)]
struct User {
    #[neox(tag = "user_name")]
    name: String,
    #[neox(tag = "user_age")]
    age: u32,
    #[neox(tag = "nickname")]
    nickname: Option<String>,
}
```

A field without a tag is mapped under the empty column name.
`#[neox(skip)]` leaves a field out of the mapping.

## Map rows

```rust
use neo4rs::{BoltList, BoltType, Row};
use neox::prelude::*;

# #[derive(Debug, Default, NeoxStruct)]
# struct User {
#     #[neox(tag = "user_name")]
#     name: String,
#     #[neox(tag = "user_age")]
#     age: u32,
# }
let row = Row::new(
    BoltList::from(vec![BoltType::from("user_name"), BoltType::from("user_age")]),
    BoltList::from(vec![BoltType::from("Ada"), BoltType::from(30)]),
);

let mut mapper = RowMapper::new();
let mut user = User::default();
mapper.map_into(&mut user, &row)?;
assert_eq!(user.name, "Ada");
assert_eq!(user.age, 30);
# Ok::<(), NeoxError>(())
```

Mapping is best-effort: a column missing from the row, or holding a value of
a different kind than the field, leaves the field untouched and the call
still succeeds. Only a non-struct destination
([`NeoxError::InvalidDestination`]) or a failed result stream are errors.

## Iterate a result stream

```rust,no_run
use neox::prelude::*;
use neox::query::NeoxQuery;

# #[derive(Debug, Default, NeoxStruct)]
# struct User { #[neox(tag = "user_name")] name: String }
# async fn example(graph: &neo4rs::Graph) -> Result<(), NeoxError> {
let mut records = NeoxQuery::new("MATCH (u:User) RETURN u.name AS user_name")
    .execute(graph)
    .await?;

while records.next().await {
    let mut user = User::default();
    records.to_struct(&mut user)?;

    let raw = records.record().and_then(|r| r.get_string("user_name"));
    assert_eq!(raw.as_deref(), Some(user.name.as_str()));
}
# Ok(())
# }
```

One [`Records`](records::Records) owns one mapper, so its cache is built
from the first destination and must only ever see that type.

# Supported field types

| Neo4j type | Rust type |
|------------|-----------|
| Integer | `i64`, `i32`, `u64`, `u32`, `i16`, `u16`, `i8`, `u8` (range-checked) |
| Float | `f64`, `f32` |
| String | `String` |
| Boolean | `bool` |
| List | `Vec<T>` |
| Map | `HashMap<String, V>` |
| Null | `Option<T>` |
| Node / Relationship | `neo4rs::BoltNode`, `neo4rs::BoltRelation` |
| Point2D / Point3D | [`Point2D`], [`Point3D`] |
| Bytes | [`NeoxBytes`] |
| Date | `chrono::NaiveDate` |
| LocalTime | `chrono::NaiveTime` |
| Time | `(chrono::NaiveTime, chrono::FixedOffset)` |
| LocalDateTime | `chrono::NaiveDateTime` |
| DateTime / DateTimeZoneId | `chrono::DateTime<chrono::FixedOffset>` |
| Duration | `std::time::Duration` |
| anything | `neo4rs::BoltType` |

# Logging

Mapping decisions are reported through [`tracing`]: the cache build and
skipped fields at `debug`, absent columns at `trace`, stream failures at
`warn`. Install a subscriber to see them.

[`neo4rs`]: https://docs.rs/neo4rs
[`tracing`]: https://docs.rs/tracing
[`Point2D`]: neox_core::Point2D
[`Point3D`]: neox_core::Point3D
[`NeoxBytes`]: neox_core::NeoxBytes
"#]

pub mod prelude;
pub mod query;
pub mod records;
pub mod stream;

pub use neox_core as core;
pub use neox_macros::NeoxStruct;

pub use neox_core::traits::NeoxStruct as NeoxStructTrait;
pub use neox_core::{NeoxError, RecordExt, RowMapper};
