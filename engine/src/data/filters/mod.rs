//! Declarative request filters
//!
//! Each dataset declares a table of [`FilterSpec`]s; the compiler turns the
//! raw request values into parameterized SQL fragments. Absent, blank and
//! sentinel-only values contribute nothing, so a request with no usable
//! filters compiles to an empty fragment list.

mod compiler;
mod types;

pub use compiler::compile;
pub use types::{CompiledFragment, FilterKind, FilterSpec, ParamValue, SqlParam};
