/// One sync pass: load the catalog, merge newly found rule sets, save it back.
use chrono::NaiveDate;
use tracing::info;

use rule_catalog::{merger, store};

use crate::config::Config;
use crate::error::AppError;

/// Counts reported to the operator after a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResult {
    /// Rule sets appended to the catalog.
    pub added: usize,
    /// Rule sets already present and left untouched.
    pub skipped: usize,
    /// Catalog size after the pass.
    pub total: usize,
}

pub struct SyncService {
    config: Config,
}

impl SyncService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the pass, stamping the catalog with `today`.
    ///
    /// A missing catalog starts an empty one. Nothing is written when an existing
    /// catalog cannot be loaded or the rules directory cannot be listed.
    pub fn run(&self, today: NaiveDate) -> Result<SyncResult, AppError> {
        let catalog = store::load_or_default(&self.config.meta_path)?;
        let existing = catalog.rules.len();

        let outcome = merger::merge_rules_root(catalog, &self.config.rules_dir, today)?;
        info!(
            existing,
            added = outcome.added,
            skipped = outcome.skipped,
            "merge complete"
        );

        store::save_catalog(&outcome.catalog, &self.config.meta_path)?;

        Ok(SyncResult {
            added: outcome.added,
            skipped: outcome.skipped,
            total: outcome.catalog.rules.len(),
        })
    }
}
