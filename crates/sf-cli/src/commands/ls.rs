//! List command implementation

use anyhow::Result;
use sf_db::TableFilter;

use crate::cli::{GlobalArgs, ListKind, LsArgs};
use crate::context::RuntimeContext;

/// Execute the ls command
pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let Some(schema) = &args.schema else {
        for schema in ctx.db.list_schemas(&ctx.config.database).await? {
            println!("{}", schema);
        }
        return Ok(());
    };

    match args.kind {
        ListKind::Views => {
            for view in ctx.db.list_views(schema).await? {
                println!("{}", view);
            }
        }
        ListKind::All => {
            for table in ctx.db.list_tables(schema, TableFilter::Normal).await? {
                println!("{:<14} {}", "TABLE", table);
            }
            for table in ctx.db.list_tables(schema, TableFilter::Dynamic).await? {
                println!("{:<14} {}", "DYNAMIC TABLE", table);
            }
            for view in ctx.db.list_views(schema).await? {
                println!("{:<14} {}", "VIEW", view);
            }
        }
        kind => {
            let filter = kind.table_filter().unwrap_or_default();
            for table in ctx.db.list_tables(schema, filter).await? {
                println!("{}", table);
            }
        }
    }

    Ok(())
}
