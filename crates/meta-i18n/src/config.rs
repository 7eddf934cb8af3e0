use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_RULES_DIR: &str = "resources/rules";
const META_FILE: &str = "meta.json";
const DEFAULT_OUTPUT: &str = "meta_i18n.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `meta.json`; catalog paths are checked against it.
    pub rules_dir: PathBuf,
    /// Output file name (joined onto `rules_dir`) or path.
    pub output: PathBuf,
}

impl Config {
    /// Optional:
    /// - `META_I18N_RULES_DIR` (default: "resources/rules")
    /// - `META_I18N_OUTPUT` (default: "meta_i18n.json")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let value = |key: &str, default: &str| -> Result<PathBuf, AppError> {
            match lookup(key) {
                None => Ok(PathBuf::from(default)),
                Some(v) if v.trim().is_empty() => {
                    Err(AppError::Config(format!("{key} is set but empty")))
                }
                Some(v) => Ok(PathBuf::from(v)),
            }
        };

        Ok(Self {
            rules_dir: value("META_I18N_RULES_DIR", DEFAULT_RULES_DIR)?,
            output: value("META_I18N_OUTPUT", DEFAULT_OUTPUT)?,
        })
    }

    pub fn meta_path(&self) -> PathBuf {
        self.rules_dir.join(META_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.rules_dir.join(&self.output)
    }
}
