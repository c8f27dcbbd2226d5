//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use sf_core::ObjectKind;
use sf_db::TableFilter;

/// Snowforge - build, round-trip, and deploy Snowflake schema objects
#[derive(Parser, Debug)]
#[command(name = "sforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Backend override: "snowflake" or "mock"
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List schemas, or objects in a schema
    Ls(LsArgs),

    /// Show the columns of an existing object
    Describe(DescribeArgs),

    /// Render DDL from a definition file
    Render(RenderArgs),

    /// Reconstruct a definition file from an existing object
    Pull(PullArgs),

    /// Render a definition, execute it, and publish the DDL
    Deploy(DeployArgs),
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Schema to list objects from (omit to list schemas)
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Object kinds to list
    #[arg(short, long, value_enum, default_value = "all")]
    pub kind: ListKind,
}

/// Object kinds for the ls command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Tables, dynamic tables, and views
    All,
    /// Plain tables only
    Tables,
    /// Dynamic tables only
    Dynamic,
    /// Views only
    Views,
}

/// Arguments for the describe command
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Object as `SCHEMA.NAME`
    pub object: String,

    /// Kind of the object
    #[arg(short, long, value_enum, default_value = "table")]
    pub kind: KindArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Object kind selector shared by describe and pull
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Table,
    View,
    DynamicTable,
}

impl KindArg {
    pub fn to_kind(self) -> ObjectKind {
        match self {
            KindArg::Table => ObjectKind::Table,
            KindArg::View => ObjectKind::View,
            KindArg::DynamicTable => ObjectKind::DynamicTable,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable rows
    Plain,
    /// JSON array
    Json,
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Definition file to render
    pub definition: String,

    /// Write the DDL to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Syntax-check the rendered DDL
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the pull command
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Object as `SCHEMA.NAME`
    pub object: String,

    /// Kind of the object
    #[arg(short, long, value_enum)]
    pub kind: KindArg,

    /// Write the definition to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the deploy command
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Definition file to deploy
    pub definition: String,

    /// Commit message used when publishing
    #[arg(short, long)]
    pub message: Option<String>,

    /// Skip the version-control publish step
    #[arg(long)]
    pub no_publish: bool,

    /// Syntax-check the rendered DDL before executing
    #[arg(long)]
    pub check: bool,
}

impl ListKind {
    /// Table filter for kinds backed by SHOW TABLES
    pub fn table_filter(self) -> Option<TableFilter> {
        match self {
            ListKind::Tables => Some(TableFilter::Normal),
            ListKind::Dynamic => Some(TableFilter::Dynamic),
            ListKind::All | ListKind::Views => None,
        }
    }
}
