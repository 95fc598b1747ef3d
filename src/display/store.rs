//! Store catalog display formatting

use crate::models::Catalog;

/// Format the store catalog, one "name - cost" line per item
pub fn format_catalog(catalog: &Catalog) -> String {
    if catalog.list().is_empty() {
        return "The store is empty.\n".to_string();
    }

    let mut output = String::new();
    for item in catalog.list() {
        output.push_str(&format!("{}\n", item));
    }
    output
}
