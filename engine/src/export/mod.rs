//! Tabular export transform
//!
//! Renders ordered result rows into a styled single-sheet XLSX buffer.
//! The whole workbook is built in memory before serialization; the OOXML
//! container needs its sheet index and style tables complete before the
//! file can be finalized.

use chrono::NaiveDate;
use rust_xlsxwriter::{
    Color, DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};

use crate::core::constants::{
    EXPORT_DATE_FORMAT, EXPORT_EMPTY_MESSAGE, EXPORT_HEADER_FILL, EXPORT_SHEET_NAME,
};
use crate::data::datasets::{ColumnKind, ColumnSpec};
use crate::data::error::QueryError;
use crate::data::types::{CellValue, ResultRow};

/// Render rows into a single-sheet XLSX buffer
///
/// The header row follows `columns` in declared order. Empty input yields
/// exactly one placeholder data row, so a zero-match export is
/// distinguishable from a sheet whose query never ran. Identical inputs
/// serialize to identical bytes.
pub fn render(rows: &[ResultRow], columns: &[ColumnSpec]) -> Result<Vec<u8>, QueryError> {
    let mut workbook = Workbook::new();
    // Fixed creation stamp keeps the output byte-deterministic.
    workbook.set_properties(
        &DocProperties::new().set_creation_datetime(&ExcelDateTime::from_ymd(2024, 1, 1)?),
    );

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;
    write_header(worksheet, columns)?;

    if rows.is_empty() {
        worksheet.write_string(1, 0, EXPORT_EMPTY_MESSAGE)?;
    } else {
        let date_format = Format::new().set_num_format(EXPORT_DATE_FORMAT);
        for (r, row) in rows.iter().enumerate() {
            let r = (r + 1) as u32;
            for (c, cell) in data_cells(row, columns).into_iter().enumerate() {
                let c = c as u16;
                match cell {
                    None => {}
                    Some(Rendered::Text(v)) => {
                        worksheet.write_string(r, c, v)?;
                    }
                    Some(Rendered::Number(v)) => {
                        worksheet.write_number(r, c, v)?;
                    }
                    Some(Rendered::Date(v)) => {
                        worksheet.write_datetime_with_format(r, c, &v, &date_format)?;
                    }
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_header(worksheet: &mut Worksheet, columns: &[ColumnSpec]) -> Result<(), QueryError> {
    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(EXPORT_HEADER_FILL))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (c, column) in columns.iter().enumerate() {
        let c = c as u16;
        worksheet.write_string_with_format(0, c, column.name, &header)?;
        worksheet.set_column_width(c, column.width)?;
    }
    Ok(())
}

/// What one cell renders as, after type coercion
#[derive(Debug, Clone, PartialEq)]
enum Rendered {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

/// One output row in declared column order, independent of the row's own
/// cell order
fn data_cells(row: &ResultRow, columns: &[ColumnSpec]) -> Vec<Option<Rendered>> {
    columns
        .iter()
        .map(|column| rendered_cell(column, row.get(column.name)))
        .collect()
}

/// Coerce a cell to its column's declared class
///
/// Date columns round-trip through the projection as ISO text; parseable
/// text becomes a real date cell so the display format applies, anything
/// else passes through as written.
fn rendered_cell(column: &ColumnSpec, value: Option<&CellValue>) -> Option<Rendered> {
    match value {
        None | Some(CellValue::Null) => None,
        Some(CellValue::Date(d)) => Some(Rendered::Date(*d)),
        Some(CellValue::Number(n)) => Some(Rendered::Number(*n)),
        Some(CellValue::Text(t)) => match column.kind {
            ColumnKind::Date => match crate::utils::time::parse_request_date(t) {
                Some(d) => Some(Rendered::Date(d)),
                None => Some(Rendered::Text(t.clone())),
            },
            ColumnKind::Text | ColumnKind::Number => Some(Rendered::Text(t.clone())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::datasets::EQUIPAMENTOS;

    const XLSX_MAGIC: &[u8] = b"PK\x03\x04";

    fn sample_row() -> ResultRow {
        let mut row = ResultRow::new();
        for column in EQUIPAMENTOS.columns {
            let value = match column.name {
                "Data Conclusão" => CellValue::Text("2024-01-31T00:00:00".to_string()),
                "Cliente" => CellValue::Null,
                name => CellValue::Text(name.to_lowercase()),
            };
            row.push(column.name, value);
        }
        row
    }

    #[test]
    fn renders_zip_container() {
        let buffer = render(&[sample_row()], EQUIPAMENTOS.columns).unwrap();
        assert!(buffer.starts_with(XLSX_MAGIC));
    }

    #[test]
    fn empty_input_still_renders() {
        let buffer = render(&[], EQUIPAMENTOS.columns).unwrap();
        assert!(buffer.starts_with(XLSX_MAGIC));
    }

    #[test]
    fn empty_and_nonempty_outputs_differ() {
        let empty = render(&[], EQUIPAMENTOS.columns).unwrap();
        let full = render(&[sample_row()], EQUIPAMENTOS.columns).unwrap();
        assert_ne!(empty, full);
    }

    #[test]
    fn rendering_is_byte_deterministic() {
        let rows = vec![sample_row(), sample_row()];
        let first = render(&rows, EQUIPAMENTOS.columns).unwrap();
        let second = render(&rows, EQUIPAMENTOS.columns).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn date_column_coerces_iso_text_to_date() {
        let column = EQUIPAMENTOS
            .columns
            .iter()
            .find(|c| c.name == "Data Conclusão")
            .unwrap();
        assert_eq!(
            rendered_cell(column, Some(&CellValue::Text("2024-01-31T00:00:00".into()))),
            Some(Rendered::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()))
        );
        // Unparseable text in a date column passes through as written
        assert_eq!(
            rendered_cell(column, Some(&CellValue::Text("pendente".into()))),
            Some(Rendered::Text("pendente".to_string()))
        );
    }

    #[test]
    fn data_cells_follow_declared_column_order() {
        // Build the row with cells deliberately reversed
        let mut row = ResultRow::new();
        for column in EQUIPAMENTOS.columns.iter().rev() {
            row.push(column.name, CellValue::Text(column.name.to_string()));
        }

        let cells = data_cells(&row, EQUIPAMENTOS.columns);
        assert_eq!(cells.len(), EQUIPAMENTOS.columns.len());
        for (cell, column) in cells.iter().zip(EQUIPAMENTOS.columns) {
            assert_eq!(cell, &Some(Rendered::Text(column.name.to_string())));
        }
    }

    #[test]
    fn null_cells_render_as_empty() {
        let column = &EQUIPAMENTOS.columns[0];
        assert_eq!(rendered_cell(column, Some(&CellValue::Null)), None);
        assert_eq!(rendered_cell(column, None), None);
    }

    #[test]
    fn text_columns_never_coerce() {
        let column = &EQUIPAMENTOS.columns[0];
        assert_eq!(
            rendered_cell(column, Some(&CellValue::Text("2024-01-31".into()))),
            Some(Rendered::Text("2024-01-31".to_string()))
        );
    }
}
