//! Error types for sf-core

use thiserror::Error;

/// Core error type for Snowforge
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Definition file not found
    #[error("[E003] Definition file not found: {path}")]
    DefinitionNotFound { path: String },

    /// E004: Failed to parse a definition file
    #[error("[E004] Failed to parse definition {path}: {message}")]
    DefinitionParseError { path: String, message: String },

    /// E005: Column with an empty output name
    #[error("[E005] Column name must not be empty")]
    EmptyColumnName,

    /// E006: Duplicate output column name
    #[error("[E006] Duplicate column name: {name}")]
    DuplicateColumn { name: String },

    /// E007: Duplicate source-table alias
    #[error("[E007] Alias '{alias}' is already used by another source table")]
    DuplicateAlias { alias: String },

    /// E008: Join references an alias that is not a known source table
    #[error("[E008] Join target '{alias}' does not match any source table alias")]
    UnknownJoinAlias { alias: String },

    /// E009: Join references the base table
    #[error("[E009] Join target '{alias}' is the base table; joins must target a non-base source")]
    JoinTargetIsBase { alias: String },

    /// E010: A field required for the object kind is missing
    #[error("[E010] {kind} requires {field}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    /// E011: IO error
    #[error("[E011] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E012: YAML parse error
    #[error("[E012] YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
