//! Repository path convention for published DDL files

use sf_core::object::ObjectKind;

/// Path of a published DDL file: `objects/<schema>/<kind>/<name>.sql`,
/// lower-cased.
///
/// # Examples
/// ```
/// use sf_core::object::ObjectKind;
/// use sf_git::object_sql_path;
/// assert_eq!(
///     object_sql_path("SILVER", ObjectKind::View, "CLEAN_USERS_V"),
///     "objects/silver/view/clean_users_v.sql"
/// );
/// ```
pub fn object_sql_path(schema: &str, kind: ObjectKind, name: &str) -> String {
    format!("objects/{}/{}/{}.sql", schema, kind.path_segment(), name).to_lowercase()
}

#[cfg(test)]
#[path = "path_test.rs"]
mod tests;
