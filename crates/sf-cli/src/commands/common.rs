//! Shared helpers for CLI commands

use anyhow::{bail, Context, Result};
use sf_core::{ObjectDefinition, ObjectSpec};
use std::path::Path;

/// Parse a `SCHEMA.NAME` argument
pub(crate) fn split_object_arg(object: &str) -> Result<(String, String)> {
    match object.split_once('.') {
        Some((schema, name)) if !schema.is_empty() && !name.is_empty() => {
            Ok((schema.to_string(), name.to_string()))
        }
        _ => bail!("Expected SCHEMA.NAME, got '{}'", object),
    }
}

/// Load a definition file and validate it into a spec
pub(crate) fn load_spec(path: &Path) -> Result<ObjectSpec> {
    let definition = ObjectDefinition::load(path).context("Failed to load definition")?;
    definition.into_spec().context("Invalid definition")
}

/// Write to the given path, or print to stdout
pub(crate) fn write_or_print(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("Wrote {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
