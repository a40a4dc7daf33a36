//! Result streams that map rows onto structs.

use std::pin::Pin;
use std::sync::Arc;

use futures::stream::{Stream, StreamExt};
use neox_core::error::NeoxError;
use neox_core::mapper::RowMapper;
use neox_core::source::RowSource;
use neox_core::traits::NeoxStruct;
use tracing::warn;

type RowStream = Pin<Box<dyn Stream<Item = Result<neo4rs::Row, neo4rs::Error>> + Send>>;

/// Stream position: the current row and the error the stream stopped on.
struct Cursor {
    inner: RowStream,
    current: Option<neo4rs::Row>,
    err: Option<Arc<neo4rs::Error>>,
}

impl RowSource for Cursor {
    type Row = neo4rs::Row;

    fn err(&self) -> Option<NeoxError> {
        self.err.clone().map(NeoxError::Stream)
    }

    fn current(&self) -> Option<&neo4rs::Row> {
        self.current.as_ref()
    }
}

/// The rows of one query execution, with a struct mapper bound to them.
///
/// Advance with [`next`](Self::next), then read the current row through
/// [`record`](Self::record) or copy it onto a struct with
/// [`to_struct`](Self::to_struct). Every `to_struct` call on the same
/// `Records` shares one mapping cache, so pass the same destination type
/// each time.
///
/// ```rust,no_run
/// # use neox::prelude::*;
/// # use neox::query::NeoxQuery;
/// # #[derive(Default, NeoxStruct)]
/// # struct User { #[neox(tag = "user_name")] name: String }
/// # async fn example(graph: &neo4rs::Graph) -> Result<(), NeoxError> {
/// let mut records = NeoxQuery::new("MATCH (u:User) RETURN u.name AS user_name")
///     .execute(graph)
///     .await?;
///
/// while records.next().await {
///     let mut user = User::default();
///     records.to_struct(&mut user)?;
/// }
/// if let Some(err) = records.err() {
///     eprintln!("stream failed: {err}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct Records {
    cursor: Cursor,
    mapper: RowMapper,
}

impl Records {
    /// Wrap any stream of driver rows.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<neo4rs::Row, neo4rs::Error>> + Send + 'static,
    {
        Self {
            cursor: Cursor {
                inner: Box::pin(stream),
                current: None,
                err: None,
            },
            mapper: RowMapper::new(),
        }
    }

    /// Advance to the next row. Returns `false` once the stream is exhausted
    /// or has failed; check [`err`](Self::err) to tell the two apart.
    pub async fn next(&mut self) -> bool {
        if self.cursor.err.is_some() {
            return false;
        }
        match self.cursor.inner.next().await {
            Some(Ok(row)) => {
                self.cursor.current = Some(row);
                true
            }
            Some(Err(e)) => {
                warn!(error = %e, "result stream failed");
                self.cursor.current = None;
                self.cursor.err = Some(Arc::new(e));
                false
            }
            None => {
                self.cursor.current = None;
                false
            }
        }
    }

    /// The current row.
    pub fn record(&self) -> Option<&neo4rs::Row> {
        self.cursor.current.as_ref()
    }

    /// The error the stream failed with, if any.
    pub fn err(&self) -> Option<&neo4rs::Error> {
        self.cursor.err.as_deref()
    }

    /// Copy the current row onto `dest`.
    ///
    /// A stream error is returned before any mapping happens. See
    /// [`RowMapper::map_into`] for the field-level rules.
    pub fn to_struct<D: NeoxStruct + ?Sized>(&mut self, dest: &mut D) -> Result<(), NeoxError> {
        self.mapper.map_current(&self.cursor, dest)
    }

    /// The mapper shared by every [`to_struct`](Self::to_struct) call.
    pub fn mapper(&self) -> &RowMapper {
        &self.mapper
    }
}
