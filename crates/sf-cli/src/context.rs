//! Runtime context for CLI commands

use anyhow::{Context, Result};
use sf_core::Config;
use sf_db::{Database, MockBackend, SnowflakeBackend};
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing loaded config and database connection
pub struct RuntimeContext {
    /// The loaded project configuration
    pub config: Config,

    /// Database connection
    pub db: Arc<dyn Database>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let project_path = Path::new(&args.project_dir);

        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(project_path).context("Failed to load project configuration")?
        };

        let db: Arc<dyn Database> = match args.target.as_deref().unwrap_or("snowflake") {
            "mock" => Arc::new(MockBackend::new()),
            "snowflake" => Arc::new(
                SnowflakeBackend::from_config(&config.connection, &config.database)
                    .context("Failed to set up the Snowflake connection")?,
            ),
            other => anyhow::bail!("Unknown target '{}': expected 'snowflake' or 'mock'", other),
        };

        Ok(Self {
            config,
            db,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
