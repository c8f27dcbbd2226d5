//! sf-db - Database abstraction layer for Snowforge
//!
//! This crate provides the async `Database` trait covering catalog access
//! (schema/table/view/column listings, DDL fetch) and statement execution,
//! with a Snowflake implementation over the SQL REST API and an in-memory
//! mock backend for tests and offline use.

pub mod error;
pub mod mock;
pub mod snowflake;
pub mod traits;

pub use error::{DbError, DbResult};
pub use mock::MockBackend;
pub use snowflake::SnowflakeBackend;
pub use traits::{ColumnInfo, Database, TableFilter};
