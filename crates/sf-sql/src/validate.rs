//! Optional syntax gate over sqlparser
//!
//! Purely syntactic: the statement either tokenizes under the Snowflake
//! dialect or it does not. No semantic checks, no name resolution.

use crate::error::{SqlError, SqlResult};
use crate::split::find_ci;
use sf_core::object::ObjectKind;
use sqlparser::dialect::SnowflakeDialect;
use sqlparser::parser::Parser;

/// Check that rendered DDL is syntactically valid Snowflake SQL.
///
/// Tables and views are parsed as whole statements. For dynamic tables
/// only the `SELECT ... FROM ...` body is parsed — sqlparser's coverage of
/// the dynamic-table header is not relied on.
pub fn check_syntax(kind: ObjectKind, ddl: &str) -> SqlResult<()> {
    let sql = match kind {
        ObjectKind::DynamicTable => select_body(ddl).ok_or(SqlError::MissingSelectBody)?,
        _ => ddl.trim(),
    };
    if sql.is_empty() {
        return Err(SqlError::EmptySql);
    }
    Parser::parse_sql(&SnowflakeDialect {}, sql).map_err(|e| SqlError::ParseError {
        message: e.to_string(),
    })?;
    Ok(())
}

/// The statement text from the first `SELECT` onward
fn select_body(ddl: &str) -> Option<&str> {
    find_ci(ddl, "SELECT").map(|pos| ddl[pos..].trim())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
