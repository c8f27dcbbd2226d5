//! Reverse-parser: source-clause extraction
//!
//! Recovers the base table and join list from the `FROM ...` portion of
//! DDL text. Join structure is found heuristically by scanning for join
//! keywords in the whitespace-normalized clause; a clause that cannot be
//! fully understood yields empty lists so the caller falls back to manual
//! entry.

use crate::split::{collapse_ws, find_ci};
use sf_core::object::{Join, JoinKind, SourceTable};

/// Extract `(source_tables, joins)` from DDL text.
///
/// The clause runs from the first case-insensitive `FROM` to the first
/// `;` or end of text. The first table in the result is the join base.
/// Returns two empty lists when `FROM` is absent or any join segment has
/// no `ON` boundary.
pub fn parse_source_clause(ddl: &str, default_schema: &str) -> (Vec<SourceTable>, Vec<Join>) {
    let Some(from_pos) = find_ci(ddl, "FROM") else {
        return (Vec::new(), Vec::new());
    };
    let after = &ddl[from_pos + "FROM".len()..];
    let clause = collapse_ws(&after[..after.find(';').unwrap_or(after.len())]);
    if clause.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let (base_text, join_segments) = split_on_join_keywords(&clause);

    let mut tables = Vec::new();
    let mut joins = Vec::new();

    let mut base_tokens = base_text.split(' ');
    let Some(base_path) = base_tokens.next().filter(|t| !t.is_empty()) else {
        return (Vec::new(), Vec::new());
    };
    let (schema, table) = split_object_path(base_path, default_schema);
    let base_alias = base_tokens.next().unwrap_or("T1").to_string();
    tables.push(SourceTable {
        schema,
        table,
        alias: base_alias,
    });

    for segment in join_segments {
        // Everything before the first ` ON ` is `<path> [alias]`, the rest
        // is the raw condition, left opaque
        let Some(on_pos) = find_ci(&segment.body, " ON ") else {
            log::debug!("Join segment without ON boundary: {}", segment.body);
            return (Vec::new(), Vec::new());
        };
        let header = &segment.body[..on_pos];
        let condition = segment.body[on_pos + " ON ".len()..].trim().to_string();

        let mut header_tokens = header.split(' ').filter(|t| !t.is_empty());
        let Some(path) = header_tokens.next() else {
            return (Vec::new(), Vec::new());
        };
        let (schema, table) = split_object_path(path, default_schema);
        let alias = header_tokens
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| format!("T{}", tables.len() + 1));

        tables.push(SourceTable {
            schema,
            table,
            alias: alias.clone(),
        });
        joins.push(Join {
            kind: segment.kind,
            right_alias: alias,
            condition,
        });
    }

    (tables, joins)
}

struct JoinSegment {
    kind: JoinKind,
    /// Text after the join keyword, up to the next join keyword
    body: String,
}

/// Split a whitespace-normalized clause at every join-keyword occurrence
/// (`LEFT JOIN`, `INNER JOIN`, `RIGHT JOIN`, `FULL OUTER JOIN`, bare
/// `JOIN`). Returns the base-table text and one segment per join.
fn split_on_join_keywords(clause: &str) -> (String, Vec<JoinSegment>) {
    let tokens: Vec<&str> = clause.split(' ').collect();

    // (phrase start, body start, kind) per join keyword
    let mut marks: Vec<(usize, usize, JoinKind)> = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if !token.eq_ignore_ascii_case("JOIN") {
            continue;
        }
        let mut start = i;
        while start > 0 && is_join_modifier(tokens[start - 1]) {
            start -= 1;
        }
        let modifier = tokens[start..i]
            .iter()
            .map(|t| t.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(" ");
        let kind = JoinKind::from_modifier(&modifier).unwrap_or_default();
        marks.push((start, i + 1, kind));
    }

    let base_end = marks.first().map(|m| m.0).unwrap_or(tokens.len());
    let base = tokens[..base_end].join(" ");

    let segments = marks
        .iter()
        .enumerate()
        .map(|(n, &(_, body_start, kind))| {
            let body_end = marks.get(n + 1).map(|m| m.0).unwrap_or(tokens.len());
            JoinSegment {
                kind,
                body: tokens[body_start..body_end].join(" "),
            }
        })
        .collect();

    (base, segments)
}

fn is_join_modifier(token: &str) -> bool {
    ["LEFT", "RIGHT", "INNER", "FULL", "OUTER"]
        .iter()
        .any(|m| token.eq_ignore_ascii_case(m))
}

/// Split a qualified object path into `(schema, table)`.
///
/// Takes the last two dot-separated components, so `db.schema.table`
/// drops the database. A bare single-component path falls back to the
/// currently-selected schema.
fn split_object_path(path: &str, default_schema: &str) -> (String, String) {
    let mut parts = path.rsplit('.');
    let table = parts.next().unwrap_or(path);
    match parts.next() {
        Some(schema) => (schema.to_string(), table.to_string()),
        None => (default_schema.to_string(), table.to_string()),
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
