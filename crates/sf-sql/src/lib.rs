//! sf-sql - DDL round-trip engine for Snowforge
//!
//! Two pure functions over the same text contract, in opposite directions:
//! [`render`] turns a structured object description into canonical
//! `CREATE OR REPLACE` DDL text, and [`parse`] recovers the structured
//! description from DDL text fetched from the catalog. The two are
//! inverses for the DDL shapes this tool itself produces.
//!
//! The reverse direction is deliberately not a SQL parser: it handles only
//! the narrow self-generated `SELECT list FROM base [JOIN ... ON ...]*`
//! shape with `expr::TYPE AS alias` column syntax, using a hand-rolled
//! depth-aware tokenizer. [`check_syntax`] offers a separate, optional
//! syntax gate via sqlparser's Snowflake dialect.

pub mod error;
pub mod options;
pub mod parse;
pub mod render;
pub mod source;
pub mod split;
pub mod validate;

pub use error::{SqlError, SqlResult};
pub use options::{parse_dynamic_table_options, DynamicTableOptions};
pub use parse::{parse, parse_projection, transformation_for_alias, ParsedDdl, ProjectionColumn};
pub use render::{render, render_source_clause};
pub use source::parse_source_clause;
pub use split::split_top_level;
pub use validate::check_syntax;
