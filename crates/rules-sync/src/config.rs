use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_RULES_DIR: &str = "awesome-cursorrules/rules";
const DEFAULT_META_PATH: &str = "resources/rules/meta.json";

/// Where to scan for rule sets and which catalog to update.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one subdirectory per rule set.
    pub rules_dir: PathBuf,
    /// Catalog document that receives the new entries.
    pub meta_path: PathBuf,
}

impl Config {
    /// Optional:
    /// - `RULES_SYNC_RULES_DIR` (default: "awesome-cursorrules/rules")
    /// - `RULES_SYNC_META_PATH` (default: "resources/rules/meta.json")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let path_var = |key: &str, default: &str| -> Result<PathBuf, AppError> {
            match lookup(key) {
                None => Ok(PathBuf::from(default)),
                Some(value) if value.trim().is_empty() => Err(AppError::Config(format!(
                    "{key} is set but empty"
                ))),
                Some(value) => Ok(PathBuf::from(value)),
            }
        };

        Ok(Self {
            rules_dir: path_var("RULES_SYNC_RULES_DIR", DEFAULT_RULES_DIR)?,
            meta_path: path_var("RULES_SYNC_META_PATH", DEFAULT_META_PATH)?,
        })
    }
}
