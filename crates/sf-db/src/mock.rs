//! In-memory mock backend
//!
//! Fixture catalog for tests and offline use: three schemas with a handful
//! of landing/dim/fact tables, typed columns matched by object name, a DDL
//! registry seeded with one view and one dynamic table, and a log of every
//! executed statement.

use crate::error::DbResult;
use crate::traits::{ColumnInfo, Database, TableFilter};
use async_trait::async_trait;
use sf_core::object::{ColumnDef, ObjectKind, ObjectSpec, SourceClause, SourceTable};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock database backend
pub struct MockBackend {
    ddl: Mutex<HashMap<String, String>>,
    statements: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        let backend = Self {
            ddl: Mutex::new(HashMap::new()),
            statements: Mutex::new(Vec::new()),
        };
        backend.seed_ddl();
        backend
    }

    /// Register DDL text returned by [`Database::fetch_ddl`]
    pub fn register_ddl(&self, schema: &str, object: &str, ddl: impl Into<String>) {
        self.ddl
            .lock()
            .unwrap()
            .insert(format!("{}.{}", schema, object), ddl.into());
    }

    /// Statements run through [`Database::execute`], in order
    pub fn executed(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    fn seed_ddl(&self) {
        let view = ObjectSpec {
            kind: ObjectKind::View,
            schema: "SILVER".to_string(),
            name: "CLEAN_USERS_V".to_string(),
            columns: vec![
                ColumnDef::expressed("T1.ID", "USER_ID", "NUMBER"),
                ColumnDef::expressed("LEFT(T1.NAME, 2)", "SHORT_NAME", "VARCHAR"),
            ],
            source: Some(SourceClause::single(SourceTable::new(
                "BRONZE",
                "LANDING_USERS",
                "T1",
            ))),
            warehouse: None,
            target_lag: None,
        };
        self.register_ddl("SILVER", "CLEAN_USERS_V", sf_sql::render(&view));

        let mut dynamic = view;
        dynamic.kind = ObjectKind::DynamicTable;
        dynamic.name = "CLEAN_USERS_DT".to_string();
        dynamic.warehouse = Some("COMPUTE_WH".to_string());
        dynamic.target_lag = Some("10 min".to_string());
        self.register_ddl("SILVER", "CLEAN_USERS_DT", sf_sql::render(&dynamic));
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Database for MockBackend {
    async fn execute(&self, sql: &str) -> DbResult<Vec<Vec<String>>> {
        self.statements.lock().unwrap().push(sql.to_string());
        Ok(vec![vec!["Statement executed successfully.".to_string()]])
    }

    async fn list_schemas(&self, _database: &str) -> DbResult<Vec<String>> {
        Ok(vec![
            "BRONZE".to_string(),
            "SILVER".to_string(),
            "GOLD".to_string(),
        ])
    }

    async fn list_tables(&self, schema: &str, filter: TableFilter) -> DbResult<Vec<String>> {
        let normal: &[&str] = match schema {
            "BRONZE" => &["LANDING_USERS", "LANDING_ORDERS", "RAW_LOGS"],
            "SILVER" => &["DIM_CUSTOMERS", "FACT_ORDERS"],
            _ => &[],
        };
        let dynamic: &[&str] = match schema {
            "SILVER" => &["CLEAN_USERS_DT"],
            _ => &[],
        };
        let names: Vec<&str> = match filter {
            TableFilter::Normal => normal.to_vec(),
            TableFilter::Dynamic => dynamic.to_vec(),
            TableFilter::All => normal.iter().chain(dynamic).copied().collect(),
        };
        Ok(names.into_iter().map(String::from).collect())
    }

    async fn list_views(&self, schema: &str) -> DbResult<Vec<String>> {
        Ok(match schema {
            "SILVER" => vec!["CLEAN_USERS_V".to_string()],
            _ => Vec::new(),
        })
    }

    async fn describe_columns(
        &self,
        _schema: &str,
        object: &str,
        _kind: ObjectKind,
    ) -> DbResult<Vec<ColumnInfo>> {
        // Name-based fixtures, like the catalog they stand in for
        let columns: &[(&str, &str, bool)] = if object.contains("USERS") {
            &[
                ("ID", "NUMBER", false),
                ("NAME", "VARCHAR", true),
                ("CREATED_AT", "TIMESTAMP", true),
            ]
        } else if object.contains("ORDERS") {
            &[
                ("ORDER_ID", "NUMBER", false),
                ("USER_ID", "NUMBER", true),
                ("AMOUNT", "FLOAT", true),
            ]
        } else {
            &[("COL_1", "VARCHAR", true), ("COL_2", "NUMBER", true)]
        };
        Ok(columns
            .iter()
            .map(|(name, data_type, nullable)| ColumnInfo {
                name: name.to_string(),
                data_type: data_type.to_string(),
                nullable: *nullable,
            })
            .collect())
    }

    async fn fetch_ddl(&self, schema: &str, object: &str, _kind: ObjectKind) -> DbResult<String> {
        let key = format!("{}.{}", schema, object);
        self.ddl
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or(crate::error::DbError::ObjectNotFound(key))
    }

    fn db_type(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
