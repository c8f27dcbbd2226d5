//! Render command implementation

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::{GlobalArgs, RenderArgs};
use crate::commands::common::{load_spec, write_or_print};

/// Execute the render command.
///
/// Rendering is pure text work: no configuration or database connection
/// is needed, so none is loaded.
pub async fn execute(args: &RenderArgs, _global: &GlobalArgs) -> Result<()> {
    let spec = load_spec(Path::new(&args.definition))?;
    let ddl = sf_sql::render(&spec);

    if args.check {
        sf_sql::check_syntax(spec.kind, &ddl).context("Rendered DDL failed the syntax check")?;
    }

    write_or_print(args.output.as_deref(), &ddl)
}
