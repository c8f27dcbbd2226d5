//! Snowflake database backend over the SQL REST API
//!
//! Statements go through `POST /api/v2/statements` with bearer-token
//! authentication. Catalog access is SQL-driven (`SHOW ...`, `DESCRIBE
//! ...`, `GET_DDL`), so the backend needs no driver beyond an HTTP client.

use crate::error::{DbError, DbResult};
use crate::traits::{ColumnInfo, Database, TableFilter};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use sf_core::config::ConnectionConfig;
use sf_core::object::ObjectKind;

/// Name column position in `SHOW ...` output
const SHOW_NAME_COL: usize = 1;

/// Snowflake database backend
pub struct SnowflakeBackend {
    client: reqwest::Client,
    account_url: String,
    token: String,
    database: String,
    warehouse: Option<String>,
    role: Option<String>,
}

impl SnowflakeBackend {
    /// Build a backend from connection settings.
    ///
    /// The bearer token is read from the environment variable named by
    /// `token_env`; it never lives in the config file.
    pub fn from_config(connection: &ConnectionConfig, database: &str) -> DbResult<Self> {
        let token = std::env::var(&connection.token_env).map_err(|_| DbError::MissingToken {
            env: connection.token_env.clone(),
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            account_url: connection.account_url.trim_end_matches('/').to_string(),
            token,
            database: database.to_string(),
            warehouse: connection.warehouse.clone(),
            role: connection.role.clone(),
        })
    }

    async fn submit(&self, sql: &str) -> DbResult<StatementResponse> {
        let url = format!("{}/api/v2/statements", self.account_url);
        let mut payload = json!({
            "statement": sql,
            "database": self.database,
            "timeout": 60,
        });
        if let Some(warehouse) = &self.warehouse {
            payload["warehouse"] = json!(warehouse);
        }
        if let Some(role) = &self.role {
            payload["role"] = json!(role);
        }

        log::debug!("Submitting statement: {}", sql);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header(
                "X-Snowflake-Authorization-Token-Type",
                "PROGRAMMATIC_ACCESS_TOKEN",
            )
            .header("User-Agent", "snowforge")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(DbError::ExecutionError(format!("{}: {}", status, message)));
        }
        serde_json::from_str(&body).map_err(|e| DbError::ResponseFormat(e.to_string()))
    }

    async fn query_rows(&self, sql: &str) -> DbResult<Vec<Vec<String>>> {
        let response = self.submit(sql).await?;
        // TODO: follow resultSetMetaData.partitionInfo to fetch additional
        // result partitions for very large catalogs
        Ok(response
            .data
            .into_iter()
            .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
            .collect())
    }

    /// Run a SHOW command and keep one column of the output
    async fn show_names(&self, sql: &str) -> DbResult<Vec<String>> {
        let rows = self.query_rows(sql).await?;
        Ok(rows
            .into_iter()
            .filter_map(|mut row| {
                if row.len() > SHOW_NAME_COL {
                    Some(row.swap_remove(SHOW_NAME_COL))
                } else {
                    None
                }
            })
            .collect())
    }

    fn qualified(&self, schema: &str, object: &str) -> String {
        format!("{}.{}.{}", self.database, schema, object)
    }
}

#[async_trait]
impl Database for SnowflakeBackend {
    async fn execute(&self, sql: &str) -> DbResult<Vec<Vec<String>>> {
        self.query_rows(sql).await
    }

    async fn list_schemas(&self, database: &str) -> DbResult<Vec<String>> {
        self.show_names(&format!("SHOW SCHEMAS IN DATABASE {}", database))
            .await
    }

    async fn list_tables(&self, schema: &str, filter: TableFilter) -> DbResult<Vec<String>> {
        let in_schema = format!("IN SCHEMA {}.{}", self.database, schema);
        match filter {
            TableFilter::Dynamic => {
                self.show_names(&format!("SHOW DYNAMIC TABLES {}", in_schema))
                    .await
            }
            TableFilter::All => self.show_names(&format!("SHOW TABLES {}", in_schema)).await,
            TableFilter::Normal => {
                // SHOW TABLES includes dynamic tables; subtract them
                let all = self.show_names(&format!("SHOW TABLES {}", in_schema)).await?;
                let dynamic = self
                    .show_names(&format!("SHOW DYNAMIC TABLES {}", in_schema))
                    .await?;
                Ok(all.into_iter().filter(|t| !dynamic.contains(t)).collect())
            }
        }
    }

    async fn list_views(&self, schema: &str) -> DbResult<Vec<String>> {
        self.show_names(&format!("SHOW VIEWS IN SCHEMA {}.{}", self.database, schema))
            .await
    }

    async fn describe_columns(
        &self,
        schema: &str,
        object: &str,
        kind: ObjectKind,
    ) -> DbResult<Vec<ColumnInfo>> {
        let sql = format!(
            "DESCRIBE {} {}",
            kind.get_ddl_type(),
            self.qualified(schema, object)
        );
        let rows = self.query_rows(&sql).await?;
        Ok(rows
            .into_iter()
            .filter(|row| row.len() >= 4)
            .map(|row| ColumnInfo {
                name: row[0].clone(),
                data_type: row[1].clone(),
                nullable: row[3] == "Y",
            })
            .collect())
    }

    async fn fetch_ddl(&self, schema: &str, object: &str, kind: ObjectKind) -> DbResult<String> {
        let sql = format!(
            "SELECT GET_DDL('{}', '{}')",
            kind.get_ddl_type(),
            self.qualified(schema, object)
        );
        let rows = self.query_rows(&sql).await?;
        rows.into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .ok_or_else(|| DbError::ObjectNotFound(format!("{}.{}", schema, object)))
    }

    fn db_type(&self) -> &'static str {
        "snowflake"
    }
}

#[derive(Debug, Deserialize)]
struct StatementResponse {
    /// Result rows; cells arrive as strings or null
    #[serde(default)]
    data: Vec<Vec<Option<String>>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
