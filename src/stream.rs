//! Streaming query results with automatic struct mapping.

use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use futures::stream::Stream;
use neox_core::error::NeoxError;
use neox_core::mapper::RowMapper;
use neox_core::traits::NeoxStruct;
use tracing::warn;

/// A typed stream of rows, each mapped onto a fresh `T::default()`.
///
/// Created by [`NeoxQuery::fetch_stream`](crate::query::NeoxQuery::fetch_stream).
/// All rows go through one [`RowMapper`], so the field table of `T` is
/// built once for the whole stream.
///
/// ```rust,no_run
/// # use neox::query::NeoxQuery;
/// # use neox::NeoxError;
/// # #[derive(Default, neox::NeoxStruct)]
/// # struct UserRow { #[neox(tag = "name")] name: String }
/// # async fn example(graph: &neo4rs::Graph) -> Result<(), NeoxError> {
/// let mut stream = NeoxQuery::new("MATCH (u:User) RETURN u.name AS name")
///     .fetch_stream::<UserRow>(graph)
///     .await?;
///
/// while let Some(result) = stream.next().await {
///     let user = result?;
///     println!("{}", user.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct NeoxStream<T> {
    inner: Pin<Box<dyn Stream<Item = Result<neo4rs::Row, neo4rs::Error>> + Send>>,
    mapper: RowMapper,
    failed: bool,
    _marker: PhantomData<T>,
}

impl<T: NeoxStruct + Default> NeoxStream<T> {
    pub fn new(inner: Pin<Box<dyn Stream<Item = Result<neo4rs::Row, neo4rs::Error>> + Send>>) -> Self {
        Self {
            inner,
            mapper: RowMapper::new(),
            failed: false,
            _marker: PhantomData,
        }
    }

    /// Pull the next row from the stream and map it onto a new `T`.
    ///
    /// Returns `None` when the stream is exhausted. A driver error is
    /// yielded once as [`NeoxError::Stream`]; the stream ends after it.
    pub async fn next(&mut self) -> Option<Result<T, NeoxError>> {
        use futures::StreamExt;
        if self.failed {
            return None;
        }
        match self.inner.next().await {
            None => None,
            Some(Err(e)) => {
                warn!(error = %e, "result stream failed");
                self.failed = true;
                Some(Err(NeoxError::Stream(Arc::new(e))))
            }
            Some(Ok(row)) => {
                let mut out = T::default();
                Some(self.mapper.map_into(&mut out, &row).map(|()| out))
            }
        }
    }

    pub fn mapper(&self) -> &RowMapper {
        &self.mapper
    }
}
