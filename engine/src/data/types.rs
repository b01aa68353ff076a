//! Shared value, row and request types

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single typed cell in a result row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Number(v) => serializer.serialize_f64(*v),
            Self::Date(v) => serializer.serialize_str(&v.format("%Y-%m-%d").to_string()),
        }
    }
}

/// One row returned by the executor
///
/// Cells keep the projection's declared column order; serialization
/// yields a JSON object with the same ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    cells: Vec<(String, CellValue)>,
}

impl ResultRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs in projection order
    pub fn from_pairs(pairs: Vec<(String, CellValue)>) -> Self {
        Self { cells: pairs }
    }

    /// Append a cell, keeping insertion order
    pub fn push(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.push((column.into(), value));
    }

    /// Value of the first cell with the given column name
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Cells in declared order
    pub fn cells(&self) -> &[(String, CellValue)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for ResultRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Logical operation a request maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Capped preview query
    List,
    /// `COUNT(*)` aggregate over the same filters
    Count,
    /// Uncapped query feeding the XLSX export
    Export,
}

/// A fully-parsed request for one dataset operation
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub operation: Operation,
    /// Raw string filter values keyed by request parameter name
    pub filters: HashMap<String, String>,
    /// Preview cap; only honored by [`Operation::List`]
    pub row_limit: Option<u32>,
}
