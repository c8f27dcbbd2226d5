use super::*;

#[test]
fn test_view_path() {
    assert_eq!(
        object_sql_path("SILVER", ObjectKind::View, "CLEAN_USERS_V"),
        "objects/silver/view/clean_users_v.sql"
    );
}

#[test]
fn test_dynamic_table_path() {
    assert_eq!(
        object_sql_path("SILVER", ObjectKind::DynamicTable, "CLEAN_USERS_DT"),
        "objects/silver/dynamic_table/clean_users_dt.sql"
    );
}

#[test]
fn test_table_path_is_lowercased() {
    assert_eq!(
        object_sql_path("BRONZE", ObjectKind::Table, "Landing_Users"),
        "objects/bronze/table/landing_users.sql"
    );
}
