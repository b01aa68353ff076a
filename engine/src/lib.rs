//! Read-only reporting engine for equipment movement and materials data.
//!
//! Turns raw request filters (date ranges, single values, comma-separated
//! lists, "empty means no filter") into parameterized T-SQL statements over
//! fixed database views, and renders export results into styled XLSX
//! workbooks. Statement execution is delegated to a caller-provided
//! [`QueryExecutor`](data::traits::QueryExecutor); the engine itself never
//! opens connections and performs no I/O besides workbook serialization.

pub mod core;
pub mod data;
pub mod domain;
pub mod export;
pub mod utils;
