//! Describe command implementation

use anyhow::{Context, Result};

use crate::cli::{DescribeArgs, GlobalArgs, OutputFormat};
use crate::commands::common::split_object_arg;
use crate::context::RuntimeContext;

/// Execute the describe command
pub async fn execute(args: &DescribeArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let (schema, name) = split_object_arg(&args.object)?;
    let kind = args.kind.to_kind();

    ctx.verbose(&format!("Describing {} {}.{}", kind, schema, name));
    let columns = ctx
        .db
        .describe_columns(&schema, &name, kind)
        .await
        .context("Failed to describe object")?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&columns)?),
        OutputFormat::Plain => {
            for column in &columns {
                println!(
                    "{:<30} {:<20} {}",
                    column.name,
                    column.data_type,
                    if column.nullable { "NULL" } else { "NOT NULL" }
                );
            }
        }
    }

    Ok(())
}
