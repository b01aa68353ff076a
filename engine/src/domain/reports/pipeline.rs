use std::collections::HashMap;

use chrono::NaiveDate;

use crate::data::datasets::DatasetSpec;
use crate::data::error::QueryError;
use crate::data::filters::compile;
use crate::data::query::{Statement, assemble, latest_date_statement};
use crate::data::traits::QueryExecutor;
use crate::data::types::{CellValue, Operation, QueryRequest, ResultRow};
use crate::export::render;
use crate::utils::time::parse_request_date;

/// Compile and assemble the statement for one request
pub fn statement_for(
    dataset: &DatasetSpec,
    request: &QueryRequest,
) -> Result<Statement, QueryError> {
    let fragments = compile(&request.filters, dataset.filters)?;
    tracing::debug!(
        dataset = dataset.name,
        operation = ?request.operation,
        fragments = fragments.len(),
        "Compiled request filters"
    );
    Ok(assemble(
        request.operation,
        dataset,
        fragments,
        request.row_limit,
    ))
}

/// Capped preview over the dataset
pub async fn list(
    executor: &dyn QueryExecutor,
    dataset: &DatasetSpec,
    filters: HashMap<String, String>,
    row_limit: Option<u32>,
) -> Result<Vec<ResultRow>, QueryError> {
    let statement = statement_for(
        dataset,
        &QueryRequest {
            operation: Operation::List,
            filters,
            row_limit,
        },
    )?;
    let rows = executor.fetch(&statement).await?;
    tracing::debug!(dataset = dataset.name, rows = rows.len(), "Preview query returned");
    Ok(rows)
}

/// Row count over the same filters as the preview
pub async fn count(
    executor: &dyn QueryExecutor,
    dataset: &DatasetSpec,
    filters: HashMap<String, String>,
) -> Result<u64, QueryError> {
    let statement = statement_for(
        dataset,
        &QueryRequest {
            operation: Operation::Count,
            filters,
            row_limit: None,
        },
    )?;
    let rows = executor.fetch(&statement).await?;
    count_cell(rows.first())
}

/// Unbounded export rendered as an XLSX workbook
pub async fn export(
    executor: &dyn QueryExecutor,
    dataset: &DatasetSpec,
    filters: HashMap<String, String>,
) -> Result<Vec<u8>, QueryError> {
    let statement = statement_for(
        dataset,
        &QueryRequest {
            operation: Operation::Export,
            filters,
            row_limit: None,
        },
    )?;
    let rows = executor.fetch(&statement).await?;
    tracing::debug!(dataset = dataset.name, rows = rows.len(), "Export query returned");
    render(&rows, dataset.columns)
}

/// Newest completion date in the dataset, `None` when it has no rows
pub async fn latest_date(
    executor: &dyn QueryExecutor,
    dataset: &DatasetSpec,
) -> Result<Option<NaiveDate>, QueryError> {
    let statement = latest_date_statement(dataset);
    let rows = executor.fetch(&statement).await?;
    let Some(row) = rows.first() else {
        return Ok(None);
    };
    match row.get("ultimaData") {
        None | Some(CellValue::Null) => Ok(None),
        Some(CellValue::Date(d)) => Ok(Some(*d)),
        Some(CellValue::Text(t)) => parse_request_date(t).map(Some).ok_or_else(|| {
            QueryError::execution(format!("malformed ultimaData cell: {t:?}"))
        }),
        Some(other) => Err(QueryError::execution(format!(
            "malformed ultimaData cell: {other:?}"
        ))),
    }
}

/// Read the `count` cell of the aggregate row
///
/// The statement shape is engine-controlled, so anything other than a
/// non-negative integer is an executor defect. Zero rows means an empty
/// view, not an error.
fn count_cell(row: Option<&ResultRow>) -> Result<u64, QueryError> {
    let Some(row) = row else {
        return Ok(0);
    };
    match row.get("count") {
        Some(CellValue::Number(n)) if *n >= 0.0 => Ok(*n as u64),
        Some(CellValue::Text(t)) => t
            .trim()
            .parse::<u64>()
            .map_err(|_| QueryError::execution(format!("malformed count cell: {t:?}"))),
        other => Err(QueryError::execution(format!(
            "malformed count cell: {other:?}"
        ))),
    }
}
