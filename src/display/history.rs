//! History display formatting

use crate::models::HistoryEntry;

/// Format an account's history as "date - action" lines, oldest first
pub fn format_history_list(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history yet.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{}\n", entry));
    }
    output
}
