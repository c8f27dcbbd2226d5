//! Reverse-parser: projection extraction
//!
//! Recovers the ordered `(transformation, data_type, alias)` records from
//! the projection list of DDL text this tool generated. Anything that does
//! not match the self-generated shape degrades to a skipped element or an
//! empty result — never an error — so callers can fall back to manual
//! entry.

use crate::source::parse_source_clause;
use crate::split::{find_ci, find_ci_from, rfind_ci, split_top_level};
use serde::{Deserialize, Serialize};
use sf_core::object::{Join, SourceTable};

/// One recovered projection element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionColumn {
    /// Output column name
    pub alias: String,

    /// Declared cast type
    pub data_type: String,

    /// Source expression before the cast; empty for the passthrough shape
    /// `name::TYPE`, where the expression is the output name itself
    pub transformation: String,
}

/// Everything the reverse-parser can recover from one DDL text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedDdl {
    pub columns: Vec<ProjectionColumn>,
    pub tables: Vec<SourceTable>,
    pub joins: Vec<Join>,
}

impl ParsedDdl {
    /// True when nothing structured could be recovered
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.tables.is_empty() && self.joins.is_empty()
    }
}

/// Reverse-parse a complete DDL text: projection list plus source clause.
///
/// `default_schema` fills in for source paths with no schema component.
pub fn parse(ddl: &str, default_schema: &str) -> ParsedDdl {
    let (tables, joins) = parse_source_clause(ddl, default_schema);
    ParsedDdl {
        columns: parse_projection(ddl),
        tables,
        joins,
    }
}

/// Extract the ordered projection records from DDL text.
///
/// The projection body is the substring strictly between the first
/// `SELECT` and the first `FROM` after it (both case-insensitive); either
/// keyword missing yields an empty result. The body is split on top-level
/// commas, and each element is resolved against the `expr::TYPE [AS name]`
/// shape.
pub fn parse_projection(ddl: &str) -> Vec<ProjectionColumn> {
    let Some(select_pos) = find_ci(ddl, "SELECT") else {
        return Vec::new();
    };
    let body_start = select_pos + "SELECT".len();
    let Some(from_pos) = find_ci_from(ddl, "FROM", body_start) else {
        return Vec::new();
    };
    let body = &ddl[body_start..from_pos];

    let mut columns = Vec::new();
    for element in split_top_level(body) {
        if element.is_empty() {
            continue;
        }
        match parse_element(element) {
            Some(column) => columns.push(column),
            None => log::debug!("Skipping unrecognized projection element: {element}"),
        }
    }
    columns
}

/// Resolve one projection element.
///
/// The alias boundary is the *last* case-insensitive ` AS ` so that a
/// `CAST(x AS type)` inside the expression is not mistaken for it; an
/// expression containing a literal ` AS ` with no cast after it still
/// mis-splits, as does a chain of `::` casts — known limitations, kept for
/// parity with the DDL this tool emits. Elements without `::` are not ours
/// and are skipped. An element with `::` but no ` AS ` is the passthrough
/// shape: the expression is the output name and no transformation is
/// recorded.
fn parse_element(element: &str) -> Option<ProjectionColumn> {
    let (expression, alias) = match rfind_ci(element, " AS ") {
        Some(pos) => (element[..pos].trim_end(), Some(element[pos + 4..].trim())),
        None => (element, None),
    };

    let cast_pos = expression.rfind("::")?;
    let left = expression[..cast_pos].trim();
    let data_type = expression[cast_pos + 2..].trim();
    if data_type.is_empty() {
        return None;
    }

    Some(match alias {
        Some(alias) => ProjectionColumn {
            alias: alias.to_string(),
            data_type: data_type.to_string(),
            transformation: left.to_string(),
        },
        None => ProjectionColumn {
            alias: left.to_string(),
            data_type: data_type.to_string(),
            transformation: String::new(),
        },
    })
}

/// Derived lookup: the recovered record for a single output column
pub fn transformation_for_alias<'a>(
    columns: &'a [ProjectionColumn],
    alias: &str,
) -> Option<&'a ProjectionColumn> {
    columns.iter().find(|c| c.alias == alias)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
