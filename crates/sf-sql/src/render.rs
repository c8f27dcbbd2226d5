//! DDL renderer
//!
//! Produces canonical `CREATE OR REPLACE` text from an [`ObjectSpec`].
//! Inputs are pre-validated by the edit session, so nothing is re-checked
//! here; the only degradation is a join whose target alias no longer
//! resolves, which is skipped with a warning rather than raised.

use sf_core::object::{ColumnDef, ObjectKind, ObjectSpec, SourceClause};

/// Render the full CREATE OR REPLACE statement for an object
pub fn render(spec: &ObjectSpec) -> String {
    match spec.kind {
        ObjectKind::Table => render_table(spec),
        ObjectKind::View => render_view(spec),
        ObjectKind::DynamicTable => render_dynamic_table(spec),
    }
}

fn render_table(spec: &ObjectSpec) -> String {
    let columns = spec
        .columns
        .iter()
        .map(|c| {
            let mut def = format!("{} {}", c.name, c.data_type);
            if !c.nullable {
                def.push_str(" NOT NULL");
            }
            def
        })
        .collect::<Vec<_>>()
        .join(",\n\t");

    format!(
        "CREATE OR REPLACE TABLE {} (\n\t{}\n);",
        spec.qualified_name(),
        columns
    )
}

fn render_view(spec: &ObjectSpec) -> String {
    format!(
        "CREATE OR REPLACE VIEW {}(\n\t{}\n)\nAS SELECT\n\t{}\nFROM {};",
        spec.qualified_name(),
        column_names(spec),
        projection_body(spec),
        source_text(spec)
    )
}

fn render_dynamic_table(spec: &ObjectSpec) -> String {
    format!(
        "CREATE OR REPLACE DYNAMIC TABLE {}\nTARGET_LAG = '{}'\nWAREHOUSE = {}\n(\n\t{}\n)\nAS SELECT\n\t{}\nFROM {};",
        spec.qualified_name(),
        spec.target_lag.as_deref().unwrap_or_default(),
        spec.warehouse.as_deref().unwrap_or_default(),
        column_names(spec),
        projection_body(spec),
        source_text(spec)
    )
}

/// Explicit output-column name list preceding the body
fn column_names(spec: &ObjectSpec) -> String {
    spec.columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(",\n\t")
}

/// Projection list: `expr::TYPE AS name`, or bare `expr::TYPE` when the
/// expression already is the output name
fn projection_body(spec: &ObjectSpec) -> String {
    spec.columns
        .iter()
        .map(projection_element)
        .collect::<Vec<_>>()
        .join(",\n\t")
}

fn projection_element(column: &ColumnDef) -> String {
    if column.is_passthrough() {
        format!("{}::{}", column.expression, column.data_type)
    } else {
        format!(
            "{}::{} AS {}",
            column.expression, column.data_type, column.name
        )
    }
}

fn source_text(spec: &ObjectSpec) -> String {
    spec.source
        .as_ref()
        .map(render_source_clause)
        .unwrap_or_default()
}

/// Render `<base> [<JOIN KIND> <table> <alias> ON <condition>]*`.
///
/// Joins are emitted in input order. A join whose `right_alias` does not
/// resolve against the table list is skipped.
pub fn render_source_clause(clause: &SourceClause) -> String {
    let Some(base) = clause.base() else {
        return String::new();
    };
    let mut out = format!("{}.{} {}", base.schema, base.table, base.alias);

    for join in &clause.joins {
        match clause.resolve_alias(&join.right_alias) {
            Some(right) => {
                out.push_str(&format!(
                    "\n{} {}.{} {} ON {}",
                    join.kind.as_sql(),
                    right.schema,
                    right.table,
                    right.alias,
                    join.condition
                ));
            }
            None => {
                log::warn!(
                    "Join target '{}' does not match any source table; skipping join",
                    join.right_alias
                );
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
