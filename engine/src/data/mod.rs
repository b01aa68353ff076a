//! Data layer: filter compilation, statement assembly and the executor seam
//!
//! - `filters` - declarative filter specs and the filter compiler
//! - `query` - statement assembly per operation
//! - `datasets` - static dataset declarations (views, projections, filters)
//! - `traits` - executor trait implemented by the database collaborator
//! - `types` - shared value, row and request types
//! - `error` - unified error type
//!
//! Compilation and assembly are pure functions of their inputs: identical
//! requests produce byte-identical statements, and nothing here performs
//! I/O or holds state between requests.

pub mod datasets;
pub mod error;
pub mod filters;
pub mod query;
pub mod traits;
pub mod types;

pub use error::QueryError;
