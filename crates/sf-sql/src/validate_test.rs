use super::*;
use crate::render::render;
use sf_core::object::{ColumnDef, ObjectSpec, SourceClause, SourceTable};

fn rendered_view() -> String {
    render(&ObjectSpec {
        kind: ObjectKind::View,
        schema: "SILVER".to_string(),
        name: "CLEAN_USERS_V".to_string(),
        columns: vec![
            ColumnDef::expressed("T1.ID", "USER_ID", "NUMBER"),
            ColumnDef::passthrough("NAME", "VARCHAR"),
        ],
        source: Some(SourceClause::single(SourceTable::new(
            "BRONZE",
            "LANDING_USERS",
            "T1",
        ))),
        warehouse: None,
        target_lag: None,
    })
}

#[test]
fn test_rendered_view_passes() {
    check_syntax(ObjectKind::View, &rendered_view()).unwrap();
}

#[test]
fn test_rendered_table_passes() {
    let ddl = "CREATE OR REPLACE TABLE BRONZE.LANDING_USERS (\n\tID NUMBER NOT NULL,\n\tNAME VARCHAR\n);";
    check_syntax(ObjectKind::Table, ddl).unwrap();
}

#[test]
fn test_dynamic_table_checks_select_body_only() {
    let ddl = "CREATE OR REPLACE DYNAMIC TABLE S.DT\nTARGET_LAG = '1 minute'\nWAREHOUSE = COMPUTE_WH\n(\n\tID\n)\nAS SELECT\n\tID::NUMBER\nFROM BRONZE.LANDING_USERS T1;";
    check_syntax(ObjectKind::DynamicTable, ddl).unwrap();
}

#[test]
fn test_dynamic_table_without_select_body() {
    let err = check_syntax(ObjectKind::DynamicTable, "CREATE DYNAMIC TABLE T").unwrap_err();
    assert!(matches!(err, SqlError::MissingSelectBody));
}

#[test]
fn test_broken_sql_is_rejected() {
    let err = check_syntax(ObjectKind::View, "CREATE OR REPLACE VIEW (((").unwrap_err();
    assert!(matches!(err, SqlError::ParseError { .. }));
}

#[test]
fn test_empty_sql() {
    let err = check_syntax(ObjectKind::Table, "   ").unwrap_err();
    assert!(matches!(err, SqlError::EmptySql));
}
