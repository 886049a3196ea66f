//! Query and instance-path rendering

/// Render a `SELECT *` query over `object_class`.
///
/// An empty filter selects every instance of the class; anything else lands
/// verbatim in the `WHERE` clause.
pub fn select_all(object_class: &str, filter: &str) -> String {
    if filter.is_empty() {
        format!("SELECT * FROM {object_class}")
    } else {
        format!("SELECT * FROM {object_class} WHERE {filter}")
    }
}

/// Render a direct instance path for single-object lookups, e.g.
/// `SMS_Collection.CollectionID='XYZ00012'`.
pub fn instance_path(object_class: &str, key_property: &str, value: &str) -> String {
    format!("{object_class}.{key_property}='{value}'")
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
