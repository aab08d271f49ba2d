//! Row-reading helpers shared by the repositories.

use crate::error::DatabaseError;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and the
/// empty string, so a blank first name falls through to the display default
/// exactly like a missing one.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable REAL column (budgets).
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_f64(row: &libsql::Row, idx: i32) -> Result<Option<f64>, DatabaseError> {
    Ok(row.get::<Option<f64>>(idx)?)
}

/// Build a numbered placeholder list `?{start}, ?{start+1}, ...` for an SQL
/// `IN (...)` clause with `len` values.
#[must_use]
pub fn in_placeholders(start: usize, len: usize) -> String {
    (start..start + len)
        .map(|n| format!("?{n}"))
        .collect::<Vec<_>>()
        .join(", ")
}
