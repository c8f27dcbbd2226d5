use super::*;
use crate::render::render;
use sf_core::object::{ColumnDef, JoinKind, ObjectKind, ObjectSpec, SourceClause, SourceTable};

const VIEW_DDL: &str = "CREATE OR REPLACE VIEW SILVER.CLEAN_USERS_V(\n\tUSER_ID,\n\tSHORT_NAME\n)\nAS SELECT\n\tT1.ID::NUMBER AS USER_ID,\n\tLEFT(T1.NAME, 2)::VARCHAR AS SHORT_NAME\nFROM BRONZE.LANDING_USERS T1;";

#[test]
fn test_parse_projection_recovers_triples() {
    let columns = parse_projection(VIEW_DDL);
    assert_eq!(
        columns,
        vec![
            ProjectionColumn {
                alias: "USER_ID".to_string(),
                data_type: "NUMBER".to_string(),
                transformation: "T1.ID".to_string(),
            },
            ProjectionColumn {
                alias: "SHORT_NAME".to_string(),
                data_type: "VARCHAR".to_string(),
                transformation: "LEFT(T1.NAME, 2)".to_string(),
            },
        ]
    );
}

#[test]
fn test_parse_projection_passthrough_shape() {
    let ddl = "SELECT\n\tID::NUMBER,\n\tNAME::VARCHAR\nFROM BRONZE.LANDING_USERS T1;";
    let columns = parse_projection(ddl);
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].alias, "ID");
    assert_eq!(columns[0].data_type, "NUMBER");
    assert!(columns[0].transformation.is_empty());
}

#[test]
fn test_parse_projection_missing_select() {
    assert!(parse_projection("CREATE TABLE T (ID NUMBER);").is_empty());
}

#[test]
fn test_parse_projection_missing_from() {
    assert!(parse_projection("SELECT ID::NUMBER AS ID").is_empty());
}

#[test]
fn test_element_without_cast_is_skipped() {
    let ddl = "SELECT\n\tCURRENT_TIMESTAMP AS LOADED_AT,\n\tID::NUMBER AS ID\nFROM T;";
    let columns = parse_projection(ddl);
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].alias, "ID");
}

#[test]
fn test_last_as_wins_over_cast_as() {
    let ddl = "SELECT\n\tCAST(X AS VARCHAR)::VARCHAR AS LABEL\nFROM T;";
    let columns = parse_projection(ddl);
    assert_eq!(columns[0].alias, "LABEL");
    assert_eq!(columns[0].transformation, "CAST(X AS VARCHAR)");
    assert_eq!(columns[0].data_type, "VARCHAR");
}

#[test]
fn test_last_double_colon_wins() {
    let ddl = "SELECT\n\tX::NUMBER::VARCHAR AS LABEL\nFROM T;";
    let columns = parse_projection(ddl);
    assert_eq!(columns[0].transformation, "X::NUMBER");
    assert_eq!(columns[0].data_type, "VARCHAR");
}

#[test]
fn test_keyword_matching_is_case_insensitive() {
    let ddl = "create or replace view v as select\n\tid::number as id\nfrom t;";
    let columns = parse_projection(ddl);
    assert_eq!(columns.len(), 1);
    // Original case is preserved in the recovered fields
    assert_eq!(columns[0].alias, "id");
    assert_eq!(columns[0].data_type, "number");
}

#[test]
fn test_transformation_for_alias() {
    let columns = parse_projection(VIEW_DDL);
    let hit = transformation_for_alias(&columns, "SHORT_NAME").unwrap();
    assert_eq!(hit.transformation, "LEFT(T1.NAME, 2)");
    assert!(transformation_for_alias(&columns, "MISSING").is_none());
}

#[test]
fn test_parse_bundles_projection_and_source() {
    let parsed = parse(VIEW_DDL, "PUBLIC");
    assert_eq!(parsed.columns.len(), 2);
    assert_eq!(parsed.tables.len(), 1);
    assert!(parsed.joins.is_empty());
    assert!(!parsed.is_empty());
}

#[test]
fn test_parse_unstructured_text_is_empty() {
    let parsed = parse("GRANT SELECT ON ALL TABLES TO ROLE R;", "PUBLIC");
    // No SELECT body; the GRANT ON clause has no join shape either
    assert!(parsed.columns.is_empty());
}

// Round-trip properties: parse(render(spec)) recovers the structure for
// DDL this tool generates.

fn transform_view() -> ObjectSpec {
    ObjectSpec {
        kind: ObjectKind::View,
        schema: "SILVER".to_string(),
        name: "CLEAN_USERS_V".to_string(),
        columns: vec![
            ColumnDef::expressed("T1.ID", "USER_ID", "NUMBER"),
            ColumnDef::expressed("LEFT(T1.NAME, 2)", "SHORT_NAME", "VARCHAR"),
            ColumnDef::expressed("T1.CREATED_AT", "CREATED_AT_TS", "TIMESTAMP"),
        ],
        source: Some(SourceClause::single(SourceTable::new(
            "BRONZE",
            "LANDING_USERS",
            "T1",
        ))),
        warehouse: None,
        target_lag: None,
    }
}

#[test]
fn test_round_trip_with_transformations() {
    let spec = transform_view();
    let parsed = parse(&render(&spec), "PUBLIC");

    assert_eq!(parsed.columns.len(), spec.columns.len());
    for (recovered, original) in parsed.columns.iter().zip(&spec.columns) {
        assert_eq!(recovered.alias, original.name);
        assert_eq!(recovered.data_type, original.data_type);
        assert_eq!(recovered.transformation, original.expression);
    }
}

#[test]
fn test_round_trip_passthrough_columns() {
    let spec = ObjectSpec {
        kind: ObjectKind::View,
        schema: "SILVER".to_string(),
        name: "USERS_V".to_string(),
        columns: vec![
            ColumnDef::passthrough("ID", "NUMBER"),
            ColumnDef::passthrough("NAME", "VARCHAR(16)"),
        ],
        source: Some(SourceClause::single(SourceTable::new(
            "BRONZE",
            "LANDING_USERS",
            "T1",
        ))),
        warehouse: None,
        target_lag: None,
    };
    let parsed = parse(&render(&spec), "PUBLIC");

    // (alias, type) pairs survive; the transformation side is empty for
    // the passthrough shape
    let pairs: Vec<(&str, &str)> = parsed
        .columns
        .iter()
        .map(|c| (c.alias.as_str(), c.data_type.as_str()))
        .collect();
    assert_eq!(pairs, vec![("ID", "NUMBER"), ("NAME", "VARCHAR(16)")]);
    assert!(parsed.columns.iter().all(|c| c.transformation.is_empty()));
}

#[test]
fn test_round_trip_dynamic_table() {
    let mut spec = transform_view();
    spec.kind = ObjectKind::DynamicTable;
    spec.warehouse = Some("COMPUTE_WH".to_string());
    spec.target_lag = Some("10 min".to_string());

    let parsed = parse(&render(&spec), "PUBLIC");
    assert_eq!(parsed.columns.len(), 3);
    assert_eq!(parsed.tables[0].table, "LANDING_USERS");
}

#[test]
fn test_round_trip_parenthesized_types() {
    let spec = ObjectSpec {
        kind: ObjectKind::View,
        schema: "SILVER".to_string(),
        name: "V".to_string(),
        columns: vec![
            ColumnDef::expressed("T1.AMOUNT", "AMOUNT", "NUMBER(38,2)"),
            ColumnDef::expressed("T1.NOTE", "NOTE", "VARCHAR(255)"),
        ],
        source: Some(SourceClause::single(SourceTable::new("S", "T", "T1"))),
        warehouse: None,
        target_lag: None,
    };
    let parsed = parse(&render(&spec), "PUBLIC");
    assert_eq!(parsed.columns[0].data_type, "NUMBER(38,2)");
    assert_eq!(parsed.columns[1].data_type, "VARCHAR(255)");
}
