//! Edit-session state for building an object interactively
//!
//! `EditSession` holds the in-progress column/source/join lists and
//! enforces the invariants the renderer relies on: non-empty unique column
//! names, unique source aliases, and join targets that resolve to a
//! non-base source table. Rejected edits never reach the rendered DDL.

use crate::error::{CoreError, CoreResult};
use crate::object::{ColumnDef, Join, ObjectKind, ObjectSpec, SourceClause, SourceTable};

/// Standard Snowflake type names offered before any source is inspected
pub const BASE_TYPES: [&str; 7] = [
    "NUMBER",
    "VARCHAR",
    "BOOLEAN",
    "TIMESTAMP",
    "DATE",
    "VARIANT",
    "FLOAT",
];

/// Data-type choices for a column editor: the base types merged with the
/// precise types observed on source columns (e.g. `NUMBER(38,0)`),
/// deduplicated and sorted.
pub fn type_options<I, S>(observed: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options: Vec<String> = BASE_TYPES.iter().map(|s| s.to_string()).collect();
    for t in observed {
        let t = t.into();
        if !options.contains(&t) {
            options.push(t);
        }
    }
    options.sort();
    options
}

/// Mutable builder for one edit session
///
/// A session is single-threaded and short-lived: constructed empty for
/// "create new" or pre-populated from a reverse-parsed definition for
/// "modify existing", then consumed by [`EditSession::finish`].
#[derive(Debug, Clone)]
pub struct EditSession {
    kind: ObjectKind,
    schema: String,
    name: String,
    columns: Vec<ColumnDef>,
    tables: Vec<SourceTable>,
    joins: Vec<Join>,
    warehouse: Option<String>,
    target_lag: Option<String>,
}

impl EditSession {
    pub fn new(kind: ObjectKind, schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            schema: schema.into(),
            name: name.into(),
            columns: Vec::new(),
            tables: Vec::new(),
            joins: Vec::new(),
            warehouse: None,
            target_lag: None,
        }
    }

    /// Add an output column. Rejects empty and duplicate output names.
    pub fn add_column(&mut self, column: ColumnDef) -> CoreResult<()> {
        if column.name.trim().is_empty() {
            return Err(CoreError::EmptyColumnName);
        }
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(CoreError::DuplicateColumn { name: column.name });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Add a source table. The first added table becomes the join base.
    /// An empty alias is replaced with a synthesized `T<n>`; duplicate
    /// aliases are rejected.
    pub fn add_source(&mut self, mut table: SourceTable) -> CoreResult<()> {
        if table.alias.trim().is_empty() {
            table.alias = format!("T{}", self.tables.len() + 1);
        }
        if self.tables.iter().any(|t| t.alias == table.alias) {
            return Err(CoreError::DuplicateAlias { alias: table.alias });
        }
        self.tables.push(table);
        Ok(())
    }

    /// Add a join edge. The target alias must resolve to an already-added
    /// source table other than the base.
    pub fn add_join(&mut self, join: Join) -> CoreResult<()> {
        let Some(position) = self.tables.iter().position(|t| t.alias == join.right_alias) else {
            return Err(CoreError::UnknownJoinAlias {
                alias: join.right_alias,
            });
        };
        if position == 0 {
            return Err(CoreError::JoinTargetIsBase {
                alias: join.right_alias,
            });
        }
        self.joins.push(join);
        Ok(())
    }

    pub fn set_warehouse(&mut self, warehouse: impl Into<String>) {
        self.warehouse = Some(warehouse.into());
    }

    pub fn set_target_lag(&mut self, target_lag: impl Into<String>) {
        self.target_lag = Some(target_lag.into());
    }

    /// Aliases currently in use, in insertion order
    pub fn aliases(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.alias.as_str()).collect()
    }

    /// Validate kind-specific requirements and produce the final spec
    pub fn finish(self) -> CoreResult<ObjectSpec> {
        let kind_name = self.kind.sql_keyword();
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField {
                kind: kind_name,
                field: "a name",
            });
        }
        if self.columns.is_empty() {
            return Err(CoreError::MissingField {
                kind: kind_name,
                field: "at least one column",
            });
        }

        let source = if self.kind.has_source() {
            if self.tables.is_empty() {
                return Err(CoreError::MissingField {
                    kind: kind_name,
                    field: "a base source table",
                });
            }
            Some(SourceClause {
                tables: self.tables,
                joins: self.joins,
            })
        } else {
            None
        };

        let (warehouse, target_lag) = match self.kind {
            ObjectKind::DynamicTable => {
                let warehouse = self.warehouse.ok_or(CoreError::MissingField {
                    kind: kind_name,
                    field: "a warehouse",
                })?;
                let target_lag = self.target_lag.ok_or(CoreError::MissingField {
                    kind: kind_name,
                    field: "a target lag",
                })?;
                (Some(warehouse), Some(target_lag))
            }
            _ => (None, None),
        };

        Ok(ObjectSpec {
            kind: self.kind,
            schema: self.schema,
            name: self.name,
            columns: self.columns,
            source,
            warehouse,
            target_lag,
        })
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
