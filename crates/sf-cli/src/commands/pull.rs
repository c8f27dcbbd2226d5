//! Pull command implementation
//!
//! The "modify existing" entry point: fetch the object's generated DDL
//! from the catalog, reverse-parse it, and emit a definition file to edit
//! and redeploy. When nothing structured can be recovered the definition
//! comes back empty for manual entry — that is not an error.

use anyhow::{Context, Result};
use sf_core::{ColumnEntry, JoinEntry, ObjectDefinition, ObjectKind, SourceEntry};
use sf_sql::ParsedDdl;

use crate::cli::{GlobalArgs, PullArgs};
use crate::commands::common::{split_object_arg, write_or_print};
use crate::context::RuntimeContext;

/// Execute the pull command
pub async fn execute(args: &PullArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let (schema, name) = split_object_arg(&args.object)?;
    let kind = args.kind.to_kind();

    // Table DDL has no SELECT body to reverse-parse; the column listing
    // from the catalog is the definition
    if kind == ObjectKind::Table {
        let columns = ctx
            .db
            .describe_columns(&schema, &name, kind)
            .await
            .context("Failed to describe table")?;
        let definition = ObjectDefinition {
            kind,
            schema,
            name,
            columns: columns
                .into_iter()
                .map(|c| ColumnEntry {
                    name: c.name,
                    expression: None,
                    data_type: c.data_type,
                    nullable: c.nullable,
                })
                .collect(),
            sources: Vec::new(),
            joins: Vec::new(),
            warehouse: None,
            target_lag: None,
        };
        return write_or_print(args.output.as_deref(), &definition.to_yaml()?);
    }

    ctx.verbose(&format!("Fetching DDL for {} {}.{}", kind, schema, name));
    let ddl = ctx
        .db
        .fetch_ddl(&schema, &name, kind)
        .await
        .context("Failed to fetch DDL")?;

    let parsed = sf_sql::parse(&ddl, &ctx.config.default_schema);
    if parsed.is_empty() {
        eprintln!(
            "No structure recovered from the existing DDL; emitting an empty definition for manual entry."
        );
    }

    let mut definition = definition_from_parsed(kind, &schema, &name, parsed);

    if kind == ObjectKind::DynamicTable {
        if let Some(options) = ctx.db.dynamic_table_options(&schema, &name).await? {
            definition.warehouse = Some(options.warehouse);
            definition.target_lag = Some(options.target_lag);
        }
    }

    write_or_print(args.output.as_deref(), &definition.to_yaml()?)
}

fn definition_from_parsed(
    kind: ObjectKind,
    schema: &str,
    name: &str,
    parsed: ParsedDdl,
) -> ObjectDefinition {
    ObjectDefinition {
        kind,
        schema: schema.to_string(),
        name: name.to_string(),
        columns: parsed
            .columns
            .into_iter()
            .map(|c| ColumnEntry {
                name: c.alias,
                expression: if c.transformation.is_empty() {
                    None
                } else {
                    Some(c.transformation)
                },
                data_type: c.data_type,
                nullable: true,
            })
            .collect(),
        sources: parsed
            .tables
            .into_iter()
            .map(|t| SourceEntry {
                schema: t.schema,
                table: t.table,
                alias: Some(t.alias),
            })
            .collect(),
        joins: parsed
            .joins
            .into_iter()
            .map(|j| JoinEntry {
                kind: j.kind,
                right_alias: j.right_alias,
                on: j.condition,
            })
            .collect(),
        warehouse: None,
        target_lag: None,
    }
}
