//! Object definition files
//!
//! The on-disk YAML shape consumed and emitted by the CLI. A definition
//! mirrors [`ObjectSpec`](crate::object::ObjectSpec) with editor-friendly
//! defaults; conversion goes through [`EditSession`] so every invariant is
//! enforced on load rather than at render time.

use crate::error::{CoreError, CoreResult};
use crate::object::{ColumnDef, Join, JoinKind, ObjectKind, ObjectSpec, SourceTable};
use crate::serde_helpers::default_true;
use crate::session::EditSession;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One column entry in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnEntry {
    /// Output column name
    pub name: String,

    /// Source expression; defaults to the output name (passthrough)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    pub data_type: String,

    #[serde(default = "default_true")]
    pub nullable: bool,
}

/// One source-table entry in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    pub schema: String,
    pub table: String,

    /// Defaults to a synthesized `T<n>` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// One join entry in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JoinEntry {
    #[serde(default)]
    pub kind: JoinKind,

    pub right_alias: String,

    /// Raw ON condition
    pub on: String,
}

/// A complete object definition as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectDefinition {
    pub kind: ObjectKind,
    pub schema: String,
    pub name: String,

    #[serde(default)]
    pub columns: Vec<ColumnEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<JoinEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lag: Option<String>,
}

impl ObjectDefinition {
    /// Load a definition from a YAML file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::DefinitionNotFound {
                    path: path.display().to_string(),
                }
            } else {
                CoreError::Io(e)
            }
        })?;
        serde_yaml::from_str(&content).map_err(|e| CoreError::DefinitionParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a definition from YAML text
    pub fn from_yaml(yaml: &str) -> CoreResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML text
    pub fn to_yaml(&self) -> CoreResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the definition and build the object spec.
    ///
    /// Runs every entry through an [`EditSession`] so duplicate columns,
    /// duplicate aliases, and unresolvable joins are rejected here.
    pub fn into_spec(self) -> CoreResult<ObjectSpec> {
        let mut session = EditSession::new(self.kind, self.schema, self.name);

        for entry in self.columns {
            let expression = entry.expression.unwrap_or_else(|| entry.name.clone());
            session.add_column(ColumnDef {
                name: entry.name,
                expression,
                data_type: entry.data_type,
                nullable: entry.nullable,
            })?;
        }
        for entry in self.sources {
            session.add_source(SourceTable::new(
                entry.schema,
                entry.table,
                entry.alias.unwrap_or_default(),
            ))?;
        }
        for entry in self.joins {
            session.add_join(Join {
                kind: entry.kind,
                right_alias: entry.right_alias,
                condition: entry.on,
            })?;
        }
        if let Some(warehouse) = self.warehouse {
            session.set_warehouse(warehouse);
        }
        if let Some(target_lag) = self.target_lag {
            session.set_target_lag(target_lag);
        }

        session.finish()
    }

    /// Build a definition from an existing spec (the "pull" direction)
    pub fn from_spec(spec: &ObjectSpec) -> Self {
        let columns = spec
            .columns
            .iter()
            .map(|c| ColumnEntry {
                name: c.name.clone(),
                expression: if c.is_passthrough() {
                    None
                } else {
                    Some(c.expression.clone())
                },
                data_type: c.data_type.clone(),
                nullable: c.nullable,
            })
            .collect();

        let (sources, joins) = match &spec.source {
            Some(clause) => (
                clause
                    .tables
                    .iter()
                    .map(|t| SourceEntry {
                        schema: t.schema.clone(),
                        table: t.table.clone(),
                        alias: Some(t.alias.clone()),
                    })
                    .collect(),
                clause
                    .joins
                    .iter()
                    .map(|j| JoinEntry {
                        kind: j.kind,
                        right_alias: j.right_alias.clone(),
                        on: j.condition.clone(),
                    })
                    .collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Self {
            kind: spec.kind,
            schema: spec.schema.clone(),
            name: spec.name.clone(),
            columns,
            sources,
            joins,
            warehouse: spec.warehouse.clone(),
            target_lag: spec.target_lag.clone(),
        }
    }
}

#[cfg(test)]
#[path = "definition_test.rs"]
mod tests;
