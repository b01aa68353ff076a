//! SQL utility functions

/// Bracket-quote a T-SQL identifier
///
/// Closing brackets inside the identifier are doubled, which is the only
/// escaping `[...]` quoting requires.
///
/// # Example
///
/// ```
/// use consulta_engine::utils::sql::quote_ident;
///
/// assert_eq!(quote_ident("Data Conclusão"), "[Data Conclusão]");
/// ```
pub fn quote_ident(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}
