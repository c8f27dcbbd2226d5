use super::*;
use sf_core::object::{Join, JoinKind, SourceTable};

fn users_base() -> SourceTable {
    SourceTable::new("BRONZE", "LANDING_USERS", "T1")
}

fn orders_join() -> (SourceTable, Join) {
    (
        SourceTable::new("BRONZE", "LANDING_ORDERS", "T2"),
        Join {
            kind: JoinKind::Left,
            right_alias: "T2".to_string(),
            condition: "T1.ID = T2.USER_ID".to_string(),
        },
    )
}

fn view_spec() -> ObjectSpec {
    ObjectSpec {
        kind: ObjectKind::View,
        schema: "SILVER".to_string(),
        name: "CLEAN_USERS_V".to_string(),
        columns: vec![
            ColumnDef::expressed("T1.ID", "USER_ID", "NUMBER"),
            ColumnDef::passthrough("NAME", "VARCHAR"),
        ],
        source: Some(SourceClause::single(users_base())),
        warehouse: None,
        target_lag: None,
    }
}

#[test]
fn test_render_table() {
    let spec = ObjectSpec {
        kind: ObjectKind::Table,
        schema: "BRONZE".to_string(),
        name: "LANDING_USERS".to_string(),
        columns: vec![
            ColumnDef {
                name: "ID".to_string(),
                expression: "ID".to_string(),
                data_type: "NUMBER".to_string(),
                nullable: false,
            },
            ColumnDef::passthrough("NAME", "VARCHAR"),
        ],
        source: None,
        warehouse: None,
        target_lag: None,
    };
    assert_eq!(
        render(&spec),
        "CREATE OR REPLACE TABLE BRONZE.LANDING_USERS (\n\tID NUMBER NOT NULL,\n\tNAME VARCHAR\n);"
    );
}

#[test]
fn test_render_view() {
    assert_eq!(
        render(&view_spec()),
        "CREATE OR REPLACE VIEW SILVER.CLEAN_USERS_V(\n\tUSER_ID,\n\tNAME\n)\nAS SELECT\n\tT1.ID::NUMBER AS USER_ID,\n\tNAME::VARCHAR\nFROM BRONZE.LANDING_USERS T1;"
    );
}

#[test]
fn test_render_dynamic_table() {
    let mut spec = view_spec();
    spec.kind = ObjectKind::DynamicTable;
    spec.name = "CLEAN_USERS_DT".to_string();
    spec.warehouse = Some("COMPUTE_WH".to_string());
    spec.target_lag = Some("1 minute".to_string());

    let ddl = render(&spec);
    assert!(ddl.starts_with(
        "CREATE OR REPLACE DYNAMIC TABLE SILVER.CLEAN_USERS_DT\nTARGET_LAG = '1 minute'\nWAREHOUSE = COMPUTE_WH\n(\n\tUSER_ID,\n\tNAME\n)\nAS SELECT"
    ));
    assert!(ddl.ends_with("FROM BRONZE.LANDING_USERS T1;"));
}

#[test]
fn test_render_source_clause_with_join() {
    let (orders, join) = orders_join();
    let clause = SourceClause {
        tables: vec![users_base(), orders],
        joins: vec![join],
    };
    assert_eq!(
        render_source_clause(&clause),
        "BRONZE.LANDING_USERS T1\nLEFT JOIN BRONZE.LANDING_ORDERS T2 ON T1.ID = T2.USER_ID"
    );
}

#[test]
fn test_unresolvable_join_is_skipped() {
    let clause = SourceClause {
        tables: vec![users_base()],
        joins: vec![Join {
            kind: JoinKind::Inner,
            right_alias: "T9".to_string(),
            condition: "T1.ID = T9.ID".to_string(),
        }],
    };
    // No error, no join text
    assert_eq!(render_source_clause(&clause), "BRONZE.LANDING_USERS T1");
}

#[test]
fn test_joins_render_in_input_order() {
    let clause = SourceClause {
        tables: vec![
            users_base(),
            SourceTable::new("BRONZE", "LANDING_ORDERS", "T2"),
            SourceTable::new("SILVER", "DIM_CUSTOMERS", "T3"),
        ],
        joins: vec![
            Join {
                kind: JoinKind::Left,
                right_alias: "T2".to_string(),
                condition: "T1.ID = T2.USER_ID".to_string(),
            },
            Join {
                kind: JoinKind::FullOuter,
                right_alias: "T3".to_string(),
                condition: "T2.USER_ID = T3.CUSTOMER_ID".to_string(),
            },
        ],
    };
    let text = render_source_clause(&clause);
    let left = text.find("LEFT JOIN").unwrap();
    let full = text.find("FULL OUTER JOIN").unwrap();
    assert!(left < full);
}

#[test]
fn test_empty_source_clause_renders_empty() {
    assert_eq!(render_source_clause(&SourceClause::default()), "");
}
