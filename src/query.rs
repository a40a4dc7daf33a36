use neo4rs::{BoltType as Value, Graph, Query};
use neox_core::error::NeoxError;
use neox_core::mapper::RowMapper;
use neox_core::traits::NeoxStruct;

use crate::records::Records;
use crate::stream::NeoxStream;

/// A thin query wrapper around [`neo4rs::Query`].
///
/// Execution is `neo4rs`'s; this type only hands the resulting rows to a
/// [`RowMapper`].
///
/// ```rust,no_run
/// # use neox::query::NeoxQuery;
/// let query = NeoxQuery::new("MATCH (u:User {name: $name}) RETURN u.name AS user_name")
///     .param("name", "Alice");
/// ```
pub struct NeoxQuery {
    inner: Query,
}

impl NeoxQuery {
    /// Create a new query from a Cypher string.
    pub fn new(query: impl Into<String>) -> Self {
        let q: String = query.into();
        Self { inner: neo4rs::query(&q) }
    }

    /// Bind a named parameter. Accepts any type that converts to `BoltType`.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let k: String = key.into();
        self.inner = self.inner.param(&k, value.into());
        self
    }

    /// Execute against a [`Graph`] and return the rows as [`Records`].
    pub async fn execute(self, graph: &Graph) -> Result<Records, NeoxError> {
        use futures::TryStreamExt;
        let detached = graph.execute(self.inner).await?;
        Ok(Records::from_stream(detached.into_stream().into_stream()))
    }

    /// Execute against a [`Graph`] and map every row onto a `T::default()`.
    pub async fn fetch_all<T: NeoxStruct + Default>(self, graph: &Graph) -> Result<Vec<T>, NeoxError> {
        let mut stream = graph.execute(self.inner).await?;
        let mut mapper = RowMapper::new();
        let mut out = Vec::new();
        while let Some(row) = stream.next().await? {
            let mut item = T::default();
            mapper.map_into(&mut item, &row)?;
            out.push(item);
        }
        Ok(out)
    }

    /// Execute against a [`Graph`] and map the first row, if any.
    ///
    /// ```rust,no_run
    /// # use neox::query::NeoxQuery;
    /// # #[derive(Default, neox::NeoxStruct)]
    /// # struct UserRow { #[neox(tag = "name")] name: String }
    /// # async fn example(graph: &neo4rs::Graph) -> Result<(), neox::NeoxError> {
    /// let user: Option<UserRow> = NeoxQuery::new("MATCH (u:User {id: $id}) RETURN u.name AS name")
    ///     .param("id", 7)
    ///     .fetch_optional(graph)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_optional<T: NeoxStruct + Default>(self, graph: &Graph) -> Result<Option<T>, NeoxError> {
        let mut stream = graph.execute(self.inner).await?;
        match stream.next().await? {
            Some(row) => {
                let mut item = T::default();
                RowMapper::new().map_into(&mut item, &row)?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    /// Execute against a [`Graph`] and return a typed streaming iterator.
    ///
    /// Rows are mapped one at a time as they arrive from the server.
    pub async fn fetch_stream<T: NeoxStruct + Default>(self, graph: &Graph) -> Result<NeoxStream<T>, NeoxError> {
        use futures::TryStreamExt;
        let detached = graph.execute(self.inner).await?;
        let stream = detached.into_stream().into_stream();
        Ok(NeoxStream::new(Box::pin(stream)))
    }
}
