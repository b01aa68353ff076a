//! Executor trait for the database collaborator
//!
//! The engine builds statements; running them is the caller's concern
//! (connection management, pooling, timeouts and cancellation included).
//! Implementations wrap their driver errors with
//! [`QueryError::execution`](crate::data::error::QueryError::execution) so
//! failures surface verbatim.

use async_trait::async_trait;

use crate::data::error::QueryError;
use crate::data::query::Statement;
use crate::data::types::ResultRow;

/// Runs one parameterized statement and returns its rows in order
///
/// Rows must carry the statement's projected columns in declared order.
/// An empty result set is a normal outcome, not an error.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn fetch(&self, statement: &Statement) -> Result<Vec<ResultRow>, QueryError>;
}
