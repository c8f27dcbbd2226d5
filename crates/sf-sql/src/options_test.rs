use super::*;

const DT_DDL: &str = "CREATE OR REPLACE DYNAMIC TABLE SILVER.CLEAN_USERS_DT\nTARGET_LAG = '10 min'\nWAREHOUSE = COMPUTE_WH\n(\n\tID\n)\nAS SELECT\n\tID::NUMBER\nFROM BRONZE.LANDING_USERS T1;";

#[test]
fn test_parse_options_from_rendered_ddl() {
    let options = parse_dynamic_table_options(DT_DDL).unwrap();
    assert_eq!(options.target_lag, "10 min");
    assert_eq!(options.warehouse, "COMPUTE_WH");
}

#[test]
fn test_target_lag_value_may_contain_spaces() {
    let ddl = "TARGET_LAG = '1 hour'\nWAREHOUSE = ETL_WH\n";
    let options = parse_dynamic_table_options(ddl).unwrap();
    assert_eq!(options.target_lag, "1 hour");
    assert_eq!(options.warehouse, "ETL_WH");
}

#[test]
fn test_missing_target_lag() {
    assert!(parse_dynamic_table_options("WAREHOUSE = COMPUTE_WH").is_none());
}

#[test]
fn test_missing_warehouse() {
    assert!(parse_dynamic_table_options("TARGET_LAG = '1 minute'").is_none());
}

#[test]
fn test_keywords_are_case_insensitive() {
    let ddl = "target_lag = '5 min'\nwarehouse = wh_small(";
    let options = parse_dynamic_table_options(ddl).unwrap();
    assert_eq!(options.warehouse, "wh_small");
}

#[test]
fn test_plain_view_ddl_has_no_options() {
    let ddl = "CREATE OR REPLACE VIEW S.V(\n\tID\n)\nAS SELECT\n\tID::NUMBER\nFROM S.T T1;";
    assert!(parse_dynamic_table_options(ddl).is_none());
}
