//! Filter compiler
//!
//! Walks a dataset's filter specs in declaration order and emits one
//! parameterized fragment per applicable filter. Parameter names are
//! suffixed by item index, so they stay unique across the whole compiled
//! set even when several list filters apply at once.

use std::collections::HashMap;

use crate::core::constants::{FILTER_SENTINELS, LIST_DELIMITER};
use crate::data::error::QueryError;
use crate::utils::sql::quote_ident;
use crate::utils::time::parse_request_date;

use super::types::{CompiledFragment, FilterKind, FilterSpec, SqlParam};

/// Compile raw request filters against a dataset's spec table
///
/// Fragments come out in spec declaration order. Output is deterministic
/// for identical input.
pub fn compile(
    filters: &HashMap<String, String>,
    specs: &[FilterSpec],
) -> Result<Vec<CompiledFragment>, QueryError> {
    let mut fragments = Vec::new();

    for spec in specs {
        let fragment = match spec.kind {
            FilterKind::DateRange { start_key, end_key } => {
                compile_date_range(filters, spec, start_key, end_key)?
            }
            FilterKind::ExactOrList => compile_exact_or_list(filters, spec)?,
        };
        if let Some(fragment) = fragment {
            fragments.push(fragment);
        }
    }

    Ok(fragments)
}

fn non_blank<'a>(filters: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    filters.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn is_sentinel(item: &str) -> bool {
    FILTER_SENTINELS.iter().any(|s| item.eq_ignore_ascii_case(s))
}

/// Both bounds present yields one `BETWEEN` fragment with two date params.
/// Bound order is not validated; an inverted range simply matches nothing.
fn compile_date_range(
    filters: &HashMap<String, String>,
    spec: &FilterSpec,
    start_key: &'static str,
    end_key: &'static str,
) -> Result<Option<CompiledFragment>, QueryError> {
    let (Some(start_raw), Some(end_raw)) = (non_blank(filters, start_key), non_blank(filters, end_key))
    else {
        return Ok(None);
    };

    let start = parse_request_date(start_raw).ok_or_else(|| {
        QueryError::invalid_filter(start_key, format!("not a yyyy-mm-dd date: {start_raw:?}"))
    })?;
    let end = parse_request_date(end_raw).ok_or_else(|| {
        QueryError::invalid_filter(end_key, format!("not a yyyy-mm-dd date: {end_raw:?}"))
    })?;

    Ok(Some(CompiledFragment {
        sql: format!(
            "AND {} BETWEEN @{} AND @{}",
            quote_ident(spec.column),
            start_key,
            end_key
        ),
        params: vec![SqlParam::date(start_key, start), SqlParam::date(end_key, end)],
    }))
}

fn compile_exact_or_list(
    filters: &HashMap<String, String>,
    spec: &FilterSpec,
) -> Result<Option<CompiledFragment>, QueryError> {
    let Some(raw) = non_blank(filters, spec.name) else {
        return Ok(None);
    };

    let items: Vec<&str> = raw
        .split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty() && !is_sentinel(item))
        .collect();

    for item in &items {
        // Every value is bound, never spliced into SQL text; NUL is the one
        // byte the TDS layer cannot carry inside a bound string.
        if item.contains('\0') {
            return Err(QueryError::invalid_filter(
                spec.name,
                "value contains an unbindable NUL byte",
            ));
        }
    }

    let column = quote_ident(spec.column);
    let fragment = match items.as_slice() {
        // Sentinel-only or blank-only input: a vacuous `IN ()` must never execute
        [] => return Ok(None),
        [only] => CompiledFragment {
            sql: format!("AND {} = @{}", column, spec.name),
            params: vec![SqlParam::text(spec.name, *only)],
        },
        many => {
            let placeholders: Vec<String> = (0..many.len())
                .map(|i| format!("@{}{}", spec.name, i))
                .collect();
            CompiledFragment {
                sql: format!("AND {} IN ({})", column, placeholders.join(",")),
                params: many
                    .iter()
                    .enumerate()
                    .map(|(i, item)| SqlParam::text(format!("{}{}", spec.name, i), *item))
                    .collect(),
            }
        }
    };

    Ok(Some(fragment))
}
