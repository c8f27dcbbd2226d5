//! sf-core - Core library for Snowforge
//!
//! This crate provides the schema-object model, YAML definition files,
//! edit-session state, and project configuration shared across all
//! Snowforge components.

pub mod config;
pub mod definition;
pub mod error;
pub mod object;
pub(crate) mod serde_helpers;
pub mod session;

pub use config::{Config, ConnectionConfig, GitConfig};
pub use definition::{ColumnEntry, JoinEntry, ObjectDefinition, SourceEntry};
pub use error::{CoreError, CoreResult};
pub use object::{ColumnDef, Join, JoinKind, ObjectKind, ObjectSpec, SourceClause, SourceTable};
pub use session::{type_options, EditSession, BASE_TYPES};
