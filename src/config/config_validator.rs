use std::fmt::Write as _;

use crate::config::{EnabledLayout, RawConfig};

/// A layout id listed twice would make detection order ambiguous, so
/// duplicates are rejected at load time.
pub fn find_duplicate_layout_ids(layouts: &[EnabledLayout]) -> Option<String> {
    let duplicates: Vec<&str> = layouts
        .iter()
        .enumerate()
        .filter(|(i, layout)| layouts[..*i].iter().any(|earlier| earlier.id == layout.id))
        .map(|(_, layout)| layout.id.as_str())
        .collect();

    if duplicates.is_empty() {
        None
    } else {
        let mut error = String::from("Duplicate enabled layouts found:\n\n");
        for id in &duplicates {
            let _ = writeln!(error, "- '{id}'");
        }
        error.push_str("\nEach enabled layout must appear once.");
        Some(error)
    }
}

impl RawConfig {
    pub fn validate_enabled_layouts(&self) -> Result<(), String> {
        if let Some(error) = find_duplicate_layout_ids(&self.enabled_layouts) {
            Err(error)
        } else {
            Ok(())
        }
    }
}
