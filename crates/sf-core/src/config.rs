//! Configuration types and parsing for snowforge.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "snowforge.yml";

/// Main project configuration from snowforge.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database used for catalog listings
    pub database: String,

    /// Schema assumed for unqualified table paths
    #[serde(default = "default_schema")]
    pub default_schema: String,

    /// Snowflake connection settings
    pub connection: ConnectionConfig,

    /// Version-control publishing; publish is skipped when absent
    #[serde(default)]
    pub git: Option<GitConfig>,
}

/// Snowflake connection settings
///
/// Secrets never live in the file: `token_env` names the environment
/// variable holding the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Account URL, e.g. `https://acme-x1.snowflakecomputing.com`
    pub account_url: String,

    /// Warehouse used for statement execution
    #[serde(default)]
    pub warehouse: Option<String>,

    /// Role assumed for statement execution
    #[serde(default)]
    pub role: Option<String>,

    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

/// GitHub publishing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    /// Repository in `owner/name` form
    pub repo: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    /// Environment variable holding the GitHub token
    #[serde(default = "default_git_token_env")]
    pub token_env: String,
}

fn default_schema() -> String {
    "PUBLIC".to_string()
}

fn default_token_env() -> String {
    "SNOWFLAKE_TOKEN".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_git_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigInvalid {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `<dir>/snowforge.yml`
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        Self::load(&dir.join(CONFIG_FILE))
    }

    fn validate(&self) -> CoreResult<()> {
        if self.database.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database must not be empty".to_string(),
            });
        }
        if self.connection.account_url.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "connection.account_url must not be empty".to_string(),
            });
        }
        if let Some(git) = &self.git {
            if !git.repo.contains('/') {
                return Err(CoreError::ConfigInvalid {
                    message: format!("git.repo must be 'owner/name', got '{}'", git.repo),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
