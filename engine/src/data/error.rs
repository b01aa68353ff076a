//! Unified error type for the query engine
//!
//! User input is sanitized by construction (trim, drop sentinels, drop
//! empties) before it can reach fragment emission, so compilation errors
//! indicate a defect rather than bad input. Execution errors are surfaced
//! verbatim from the database collaborator, never retried or interpreted.

use thiserror::Error;

/// Errors produced while compiling, executing or rendering a query
#[derive(Error, Debug)]
pub enum QueryError {
    /// Filter value that cannot be compiled into a bound parameter
    #[error("Invalid value for filter {filter}: {reason}")]
    InvalidFilterInput { filter: String, reason: String },

    /// Statement execution failed in the database collaborator
    #[error("Query execution failed: {0}")]
    Execution(Box<dyn std::error::Error + Send + Sync>),

    /// Export workbook could not be built or serialized
    #[error("Export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

impl QueryError {
    /// Create an invalid filter input error
    pub fn invalid_filter(filter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilterInput {
            filter: filter.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an executor failure, preserving it verbatim
    pub fn execution(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Execution(source.into())
    }
}
