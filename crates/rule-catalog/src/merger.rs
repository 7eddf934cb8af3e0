/// Additive merge of scanned rule directories into an existing catalog.
///
/// Entries are keyed by id. An id already in the catalog is never touched, new
/// ids are appended in directory order, and existing entries keep their position.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::builder;
use crate::error::CatalogError;
use crate::model::{Catalog, RuleEntry};
use crate::scanner;

/// Result of a merge pass.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub catalog: Catalog,
    /// Entries appended in this pass.
    pub added: usize,
    /// Candidates dropped because their id was already present.
    pub skipped: usize,
}

/// Immediate subdirectories of `rules_root`, sorted by name.
pub fn list_rule_dirs(rules_root: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let entries = std::fs::read_dir(rules_root).map_err(|source| CatalogError::ListDir {
        path: rules_root.to_path_buf(),
        source,
    })?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| {
            entry
                .inspect_err(|e| warn!(error = %e, path = %rules_root.display(), "unreadable directory entry"))
                .ok()
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Scans and builds one candidate entry per rule directory under `rules_root`.
pub fn build_candidates(rules_root: &Path) -> Result<Vec<RuleEntry>, CatalogError> {
    let candidates: Vec<RuleEntry> = list_rule_dirs(rules_root)?
        .iter()
        .map(|dir| {
            let files = scanner::scan_rule_directory(dir, rules_root);
            builder::build_rule_entry(dir, rules_root, &files)
        })
        .collect();
    info!(
        rules_dir = %rules_root.display(),
        candidates = candidates.len(),
        "scanned rules directory"
    );
    Ok(candidates)
}

/// Appends every candidate whose id is not yet in `catalog` and stamps `lastUpdated`.
pub fn merge_entries(
    mut catalog: Catalog,
    candidates: impl IntoIterator<Item = RuleEntry>,
    today: NaiveDate,
) -> MergeOutcome {
    let mut known: HashSet<String> = catalog.rules.iter().map(|rule| rule.id.clone()).collect();
    let mut added = 0;
    let mut skipped = 0;

    for candidate in candidates {
        if !known.insert(candidate.id.clone()) {
            debug!(id = %candidate.id, "rule already in catalog, skipping");
            skipped += 1;
            continue;
        }
        catalog.rules.push(candidate);
        added += 1;
    }

    catalog.last_updated = Some(today.format("%Y-%m-%d").to_string().into());
    MergeOutcome {
        catalog,
        added,
        skipped,
    }
}

/// Scans `rules_root` and merges the result into `catalog`.
pub fn merge_rules_root(
    catalog: Catalog,
    rules_root: &Path,
    today: NaiveDate,
) -> Result<MergeOutcome, CatalogError> {
    let candidates = build_candidates(rules_root)?;
    Ok(merge_entries(catalog, candidates, today))
}
