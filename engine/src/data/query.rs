//! Statement assembly
//!
//! Combines a dataset's fixed projection with compiled filter fragments and
//! the operation's row-cap rules into one executable statement. The `1=1`
//! anchor lets every fragment start with `AND` unconditionally; it is inert,
//! not a filter.

use crate::core::constants::DEFAULT_PREVIEW_LIMIT;
use crate::data::datasets::{ColumnKind, DatasetSpec};
use crate::data::filters::{CompiledFragment, SqlParam};
use crate::data::types::Operation;
use crate::utils::sql::quote_ident;

/// An executable parameterized statement
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    /// Parameters in placeholder order, names unique within the statement
    pub params: Vec<SqlParam>,
}

/// Assemble the statement for one operation over a dataset
///
/// `List` caps rows with `TOP` (default 20) and orders by the dataset's
/// sort column. `Export` is the same filtered, ordered set with no cap.
/// `Count` drops projection, ordering and cap.
pub fn assemble(
    operation: Operation,
    dataset: &DatasetSpec,
    fragments: Vec<CompiledFragment>,
    row_limit: Option<u32>,
) -> Statement {
    let mut where_clause = String::from("WHERE 1=1");
    let mut params = Vec::new();
    for fragment in fragments {
        where_clause.push(' ');
        where_clause.push_str(&fragment.sql);
        params.extend(fragment.params);
    }

    let sql = match operation {
        Operation::Count => format!(
            "SELECT COUNT(*) AS count FROM {} {}",
            dataset.view, where_clause
        ),
        Operation::List => format!(
            "SELECT TOP {} {} FROM {} {} ORDER BY {} DESC",
            row_limit.filter(|n| *n > 0).unwrap_or(DEFAULT_PREVIEW_LIMIT),
            projection(dataset),
            dataset.view,
            where_clause,
            quote_ident(dataset.sort_column),
        ),
        Operation::Export => format!(
            "SELECT {} FROM {} {} ORDER BY {} DESC",
            projection(dataset),
            dataset.view,
            where_clause,
            quote_ident(dataset.sort_column),
        ),
    };

    Statement { sql, params }
}

/// Freshness probe: newest value of the dataset's sort column
pub fn latest_date_statement(dataset: &DatasetSpec) -> Statement {
    Statement {
        sql: format!(
            "SELECT MAX({}) AS ultimaData FROM {}",
            quote_ident(dataset.sort_column),
            dataset.view
        ),
        params: Vec::new(),
    }
}

/// Fixed select list; date columns come back as ISO text via `CONVERT`
fn projection(dataset: &DatasetSpec) -> String {
    dataset
        .columns
        .iter()
        .map(|col| {
            let ident = quote_ident(col.name);
            match col.kind {
                ColumnKind::Date => format!("CONVERT(VARCHAR, {ident}, 120) AS {ident}"),
                ColumnKind::Text | ColumnKind::Number => ident,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::datasets::{EQUIPAMENTOS, MATERIAIS};
    use crate::data::filters::SqlParam;

    fn sample_fragments() -> Vec<CompiledFragment> {
        vec![
            CompiledFragment {
                sql: "AND [Equipamento Removido] = @equipamento".to_string(),
                params: vec![SqlParam::text("equipamento", "A1")],
            },
            CompiledFragment {
                sql: "AND [Nota] IN (@nota0,@nota1)".to_string(),
                params: vec![SqlParam::text("nota0", "1"), SqlParam::text("nota1", "2")],
            },
        ]
    }

    #[test]
    fn list_has_exactly_one_top_clause() {
        let stmt = assemble(Operation::List, &EQUIPAMENTOS, Vec::new(), None);
        assert_eq!(stmt.sql.matches("TOP ").count(), 1);
        assert!(stmt.sql.starts_with("SELECT TOP 20 "));
        assert!(stmt.sql.ends_with("ORDER BY [Data Conclusão] DESC"));
    }

    #[test]
    fn list_honors_caller_row_limit() {
        let stmt = assemble(Operation::List, &EQUIPAMENTOS, Vec::new(), Some(100));
        assert!(stmt.sql.starts_with("SELECT TOP 100 "));
    }

    #[test]
    fn list_falls_back_to_default_for_zero_limit() {
        let stmt = assemble(Operation::List, &EQUIPAMENTOS, Vec::new(), Some(0));
        assert!(stmt.sql.starts_with("SELECT TOP 20 "));
    }

    #[test]
    fn count_has_no_top_no_projection_no_ordering() {
        let stmt = assemble(Operation::Count, &EQUIPAMENTOS, sample_fragments(), Some(5));
        assert_eq!(
            stmt.sql,
            "SELECT COUNT(*) AS count FROM dbo.vw_equipe_removido WHERE 1=1 \
             AND [Equipamento Removido] = @equipamento AND [Nota] IN (@nota0,@nota1)"
        );
        assert_eq!(stmt.params.len(), 3);
    }

    #[test]
    fn export_has_no_cap_but_same_shape_as_list() {
        let list = assemble(Operation::List, &EQUIPAMENTOS, sample_fragments(), None);
        let export = assemble(Operation::Export, &EQUIPAMENTOS, sample_fragments(), None);

        assert!(!export.sql.contains("TOP "));
        assert_eq!(list.sql.replace("TOP 20 ", ""), export.sql);
        assert_eq!(list.params, export.params);
    }

    #[test]
    fn fragments_concatenate_in_order_after_anchor() {
        let stmt = assemble(Operation::Count, &EQUIPAMENTOS, sample_fragments(), None);
        let anchor = stmt.sql.find("WHERE 1=1").unwrap();
        let first = stmt.sql.find("[Equipamento Removido]").unwrap();
        let second = stmt.sql.find("[Nota]").unwrap();
        assert!(anchor < first && first < second);
    }

    #[test]
    fn projection_converts_date_columns_to_iso_text() {
        let stmt = assemble(Operation::Export, &EQUIPAMENTOS, Vec::new(), None);
        assert!(
            stmt.sql
                .contains("CONVERT(VARCHAR, [Data Conclusão], 120) AS [Data Conclusão]")
        );
        assert!(stmt.sql.contains("[Instalação], [Nota], [Cliente]"));
    }

    #[test]
    fn assembly_is_pure() {
        let a = assemble(Operation::List, &MATERIAIS, sample_fragments(), Some(50));
        let b = assemble(Operation::List, &MATERIAIS, sample_fragments(), Some(50));
        assert_eq!(a, b);
    }

    #[test]
    fn latest_date_statement_shape() {
        let stmt = latest_date_statement(&EQUIPAMENTOS);
        assert_eq!(
            stmt.sql,
            "SELECT MAX([Data Conclusão]) AS ultimaData FROM dbo.vw_equipe_removido"
        );
        assert!(stmt.params.is_empty());
    }
}
