//! End-to-end round trip through the public crate APIs: definition file →
//! spec → DDL → mock deploy → catalog fetch → reverse parse.

use sf_core::{ObjectDefinition, ObjectKind};
use sf_db::{Database, MockBackend};

const VIEW_DEFINITION: &str = r#"
kind: view
schema: SILVER
name: ORDER_FACTS_V
columns:
  - name: ORDER_ID
    expression: T1.ORDER_ID
    data_type: NUMBER
  - name: CUSTOMER_NAME
    expression: T2.NAME
    data_type: VARCHAR
  - name: AMOUNT_ROUNDED
    expression: ROUND(T1.AMOUNT, 2)
    data_type: NUMBER(38,2)
sources:
  - schema: BRONZE
    table: LANDING_ORDERS
    alias: T1
  - schema: SILVER
    table: DIM_CUSTOMERS
    alias: T2
joins:
  - kind: left
    right_alias: T2
    on: T1.USER_ID = T2.CUSTOMER_ID
"#;

#[tokio::test]
async fn test_definition_deploys_and_round_trips() {
    let definition = ObjectDefinition::from_yaml(VIEW_DEFINITION).unwrap();
    let spec = definition.into_spec().unwrap();
    let ddl = sf_sql::render(&spec);

    // Deploy against the mock backend
    let db = MockBackend::new();
    db.execute(&ddl).await.unwrap();
    assert_eq!(db.executed(), vec![ddl.clone()]);

    // The object now "exists" in the catalog; fetch and reverse-parse it
    db.register_ddl(&spec.schema, &spec.name, ddl);
    let fetched = db
        .fetch_ddl(&spec.schema, &spec.name, ObjectKind::View)
        .await
        .unwrap();
    let parsed = sf_sql::parse(&fetched, "PUBLIC");

    assert_eq!(parsed.columns.len(), spec.columns.len());
    for (recovered, original) in parsed.columns.iter().zip(&spec.columns) {
        assert_eq!(recovered.alias, original.name);
        assert_eq!(recovered.data_type, original.data_type);
        assert_eq!(recovered.transformation, original.expression);
    }

    let clause = spec.source.unwrap();
    assert_eq!(parsed.tables.len(), clause.tables.len());
    assert_eq!(parsed.joins.len(), clause.joins.len());
    assert_eq!(parsed.joins[0].right_alias, "T2");
    assert_eq!(parsed.joins[0].condition, "T1.USER_ID = T2.CUSTOMER_ID");
}

#[tokio::test]
async fn test_pulled_definition_renders_identical_ddl() {
    let db = MockBackend::new();
    let original = db
        .fetch_ddl("SILVER", "CLEAN_USERS_V", ObjectKind::View)
        .await
        .unwrap();

    let parsed = sf_sql::parse(&original, "PUBLIC");
    let definition = ObjectDefinition {
        kind: ObjectKind::View,
        schema: "SILVER".to_string(),
        name: "CLEAN_USERS_V".to_string(),
        columns: parsed
            .columns
            .into_iter()
            .map(|c| sf_core::ColumnEntry {
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
            .map(|t| sf_core::SourceEntry {
                schema: t.schema,
                table: t.table,
                alias: Some(t.alias),
            })
            .collect(),
        joins: Vec::new(),
        warehouse: None,
        target_lag: None,
    };

    let rendered = sf_sql::render(&definition.into_spec().unwrap());
    assert_eq!(rendered, original);
}
