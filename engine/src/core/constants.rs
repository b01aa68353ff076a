// =============================================================================
// Preview Queries
// =============================================================================

/// Default row cap for preview queries when the caller supplies none
pub const DEFAULT_PREVIEW_LIMIT: u32 = 20;

// =============================================================================
// Filter Input
// =============================================================================

/// Delimiter between items in multi-value filter input
pub const LIST_DELIMITER: char = ',';

/// Sentinel values meaning "no constraint", matched case-insensitively
///
/// The Portuguese UI sends `Todos`; one revision of the English UI sends
/// `All`. Either is dropped even when mixed with real values.
pub const FILTER_SENTINELS: &[&str] = &["todos", "all"];

// =============================================================================
// Export Workbook
// =============================================================================

/// Worksheet name for exported data
pub const EXPORT_SHEET_NAME: &str = "Dados";

/// Header fill color (accent blue used across the reporting UI)
pub const EXPORT_HEADER_FILL: u32 = 0x1976D2;

/// Display format for date columns
pub const EXPORT_DATE_FORMAT: &str = "dd/mm/yyyy";

/// Placeholder row text when a filtered export matches no rows
pub const EXPORT_EMPTY_MESSAGE: &str = "Nenhum dado encontrado para os filtros informados";
