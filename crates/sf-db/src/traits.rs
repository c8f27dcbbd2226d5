//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use serde::Serialize;
use sf_core::object::ObjectKind;
use sf_sql::{parse_dynamic_table_options, DynamicTableOptions};

/// Filter for table listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFilter {
    /// Plain and dynamic tables
    #[default]
    All,
    /// Plain tables only
    Normal,
    /// Dynamic tables only
    Dynamic,
}

/// One column as reported by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

/// Database abstraction for Snowforge
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a statement, returning result rows as strings
    async fn execute(&self, sql: &str) -> DbResult<Vec<Vec<String>>>;

    /// List schemas in a database
    async fn list_schemas(&self, database: &str) -> DbResult<Vec<String>>;

    /// List tables in a schema, optionally restricted to plain or dynamic
    async fn list_tables(&self, schema: &str, filter: TableFilter) -> DbResult<Vec<String>>;

    /// List views in a schema
    async fn list_views(&self, schema: &str) -> DbResult<Vec<String>>;

    /// Columns of a table, view, or dynamic table
    async fn describe_columns(
        &self,
        schema: &str,
        object: &str,
        kind: ObjectKind,
    ) -> DbResult<Vec<ColumnInfo>>;

    /// Generated DDL text for an existing object
    async fn fetch_ddl(&self, schema: &str, object: &str, kind: ObjectKind) -> DbResult<String>;

    /// Refresh settings of a dynamic table, scanned from its DDL text
    async fn dynamic_table_options(
        &self,
        schema: &str,
        object: &str,
    ) -> DbResult<Option<DynamicTableOptions>> {
        let ddl = self
            .fetch_ddl(schema, object, ObjectKind::DynamicTable)
            .await?;
        Ok(parse_dynamic_table_options(&ddl))
    }

    /// Backend identifier for logging
    fn db_type(&self) -> &'static str;
}
