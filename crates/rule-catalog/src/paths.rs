use std::path::Path;

use tracing::debug;

use crate::model::Catalog;

/// Checks that every rule and file path in `catalog` exists under `base_dir`.
///
/// File paths are resolved against the rule's own directory when it exists,
/// otherwise against `base_dir`. All problems are collected; nothing is modified.
pub fn check_file_paths(catalog: &Catalog, base_dir: &Path) -> Vec<String> {
    let mut issues = Vec::new();

    for rule in &catalog.rules {
        let rule_path = rule.path();
        let rule_dir = (!rule_path.is_empty()).then(|| base_dir.join(rule_path));
        if let Some(dir) = &rule_dir {
            if !dir.exists() {
                issues.push(format!("Rule '{}': Path '{rule_path}' does not exist", rule.id));
            }
        }

        let file_base = rule_dir
            .as_deref()
            .filter(|dir| dir.is_dir())
            .unwrap_or(base_dir);
        for file in rule.files().iter().filter(|file| !file.path().is_empty()) {
            if !file_base.join(file.path()).exists() {
                issues.push(format!("Rule '{}': File '{}' does not exist", rule.id, file.path()));
            }
        }
    }

    debug!(issues = issues.len(), base_dir = %base_dir.display(), "checked catalog paths");
    issues
}
