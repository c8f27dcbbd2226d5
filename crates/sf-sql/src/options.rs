//! Dynamic-table option scan
//!
//! Recovers `TARGET_LAG` and `WAREHOUSE` from dynamic-table DDL text with
//! the same brittle keyword scan the rest of the reverse-parser uses — the
//! catalog does not expose these settings in any structured form this tool
//! consumes.

use crate::split::find_ci;
use serde::{Deserialize, Serialize};

/// Refresh settings of a dynamic table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicTableOptions {
    pub warehouse: String,
    pub target_lag: String,
}

/// Scan DDL text for `TARGET_LAG = '<value>'` and `WAREHOUSE = <value>`.
/// Returns `None` unless both are present.
pub fn parse_dynamic_table_options(ddl: &str) -> Option<DynamicTableOptions> {
    let target_lag = scan_quoted_value(ddl, "TARGET_LAG")?;
    let warehouse = scan_bare_value(ddl, "WAREHOUSE")?;
    Some(DynamicTableOptions {
        warehouse,
        target_lag,
    })
}

/// Value of `<key> = '<value>'`, single quotes required
fn scan_quoted_value(ddl: &str, key: &str) -> Option<String> {
    let rest = &ddl[find_ci(ddl, key)? + key.len()..];
    let rest = rest.trim_start().strip_prefix('=')?;
    let open = rest.find('\'')?;
    let close = rest[open + 1..].find('\'')?;
    Some(rest[open + 1..open + 1 + close].to_string())
}

/// Value of `<key> = <token>`, running to the next whitespace, `(` or `;`
fn scan_bare_value(ddl: &str, key: &str) -> Option<String> {
    let rest = &ddl[find_ci(ddl, key)? + key.len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '(' || c == ';')
        .unwrap_or(rest.len());
    let value = &rest[..end];
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
