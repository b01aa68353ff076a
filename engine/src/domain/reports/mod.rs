//! Report pipeline
//!
//! One linear pass per request: compile filters, assemble the statement,
//! run it through the executor, and shape the result for the caller.
//! Every invocation builds fresh fragments and statements; nothing is
//! shared or reused across requests.

mod pipeline;

pub use pipeline::{count, export, latest_date, list, statement_for};
