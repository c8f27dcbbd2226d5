//! Schema-object model
//!
//! Value types describing a Snowflake table, view, or dynamic table under
//! construction. The graph is short-lived and tree-shaped: an `ObjectSpec`
//! owns its columns and source clause, is built fresh per edit session,
//! and is never persisted — the database is the durable store.

use crate::serde_helpers::default_true;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of schema object being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Plain table with typed columns
    Table,
    /// View over one or more source tables
    View,
    /// Continuously-refreshed dynamic table
    DynamicTable,
}

impl ObjectKind {
    /// SQL keyword used in `CREATE OR REPLACE <keyword>` statements
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            ObjectKind::Table => "TABLE",
            ObjectKind::View => "VIEW",
            ObjectKind::DynamicTable => "DYNAMIC TABLE",
        }
    }

    /// Object type string accepted by `GET_DDL`
    ///
    /// Snowflake's `GET_DDL` treats dynamic tables as tables.
    pub fn get_ddl_type(&self) -> &'static str {
        match self {
            ObjectKind::Table | ObjectKind::DynamicTable => "TABLE",
            ObjectKind::View => "VIEW",
        }
    }

    /// Lower-cased identifier used in file paths
    pub fn path_segment(&self) -> &'static str {
        match self {
            ObjectKind::Table => "table",
            ObjectKind::View => "view",
            ObjectKind::DynamicTable => "dynamic_table",
        }
    }

    /// Whether this kind selects its columns from a source clause
    pub fn has_source(&self) -> bool {
        matches!(self, ObjectKind::View | ObjectKind::DynamicTable)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_keyword())
    }
}

/// Join kind for a source-clause join edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    FullOuter,
}

impl JoinKind {
    /// SQL join keyword, e.g. `LEFT JOIN`
    pub fn as_sql(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::FullOuter => "FULL OUTER JOIN",
        }
    }

    /// Map the tokens preceding `JOIN` (already upper-cased, whitespace
    /// normalized) to a join kind. A bare `JOIN` has an empty modifier and
    /// counts as inner.
    pub fn from_modifier(modifier: &str) -> Option<JoinKind> {
        match modifier {
            "" | "INNER" => Some(JoinKind::Inner),
            "LEFT" | "LEFT OUTER" => Some(JoinKind::Left),
            "RIGHT" | "RIGHT OUTER" => Some(JoinKind::Right),
            "FULL" | "FULL OUTER" => Some(JoinKind::FullOuter),
            _ => None,
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// One output column of a table, view, or dynamic table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Output column identifier
    pub name: String,

    /// Raw source expression before casting — a bare `alias.column`
    /// reference or an arbitrary SQL expression
    pub expression: String,

    /// Snowflake type name, possibly parameterized (e.g. `NUMBER(38,0)`)
    pub data_type: String,

    /// Whether NULLs are allowed (tables only; views and dynamic tables
    /// do not surface nullability in DDL)
    #[serde(default = "default_true")]
    pub nullable: bool,
}

impl ColumnDef {
    /// Column whose expression is the output name itself (no alias emitted)
    pub fn passthrough(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            expression: name.clone(),
            name,
            data_type: data_type.into(),
            nullable: true,
        }
    }

    /// Column computed from an expression and aliased to `name`
    pub fn expressed(
        expression: impl Into<String>,
        name: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
        }
    }

    /// True when the rendered projection omits the `AS` alias
    pub fn is_passthrough(&self) -> bool {
        self.expression == self.name
    }
}

/// One table or view participating in a FROM/JOIN clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    pub schema: String,
    pub table: String,
    /// Alias the projection refers to this table by; unique per clause
    pub alias: String,
}

impl SourceTable {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            alias: alias.into(),
        }
    }

    /// `schema.table`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }
}

/// One join edge in a source clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,

    /// Alias of the joined table; must resolve to a non-base source table
    pub right_alias: String,

    /// Raw boolean SQL expression after `ON`, opaque to Snowforge
    pub condition: String,
}

/// The `FROM <base> [JOIN ...]*` portion of a view or dynamic table
///
/// The first table is always the join base and is never a join target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourceClause {
    pub tables: Vec<SourceTable>,
    pub joins: Vec<Join>,
}

impl SourceClause {
    /// Clause with a single base table and no joins
    pub fn single(base: SourceTable) -> Self {
        Self {
            tables: vec![base],
            joins: Vec::new(),
        }
    }

    /// The join base, when any table is present
    pub fn base(&self) -> Option<&SourceTable> {
        self.tables.first()
    }

    /// Look up a source table by alias
    pub fn resolve_alias(&self, alias: &str) -> Option<&SourceTable> {
        self.tables.iter().find(|t| t.alias == alias)
    }
}

/// The object being created or modified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub kind: ObjectKind,
    pub schema: String,
    pub name: String,

    /// Ordered output columns
    pub columns: Vec<ColumnDef>,

    /// Source clause; present for views and dynamic tables
    #[serde(default)]
    pub source: Option<SourceClause>,

    /// Refresh warehouse (dynamic tables only)
    #[serde(default)]
    pub warehouse: Option<String>,

    /// Staleness bound, e.g. `1 minute` (dynamic tables only)
    #[serde(default)]
    pub target_lag: Option<String>,
}

impl ObjectSpec {
    /// `schema.name`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

#[cfg(test)]
#[path = "object_test.rs"]
mod tests;
