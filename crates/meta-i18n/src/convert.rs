/// One conversion pass: load, check paths, confirm, convert, save.
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{error, info, warn};

use rule_catalog::{i18n, paths, store};

use crate::config::Config;
use crate::error::AppError;
use crate::prompt;

const CONTINUE_PROMPT: &str = "Continue with conversion? (y/n): ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Converted { rules: usize, issues: usize },
    /// The operator declined after path issues were listed.
    Aborted { issues: usize },
}

pub struct ConversionService {
    config: Config,
}

impl ConversionService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the pass. Path issues are printed to `output` and the operator is
    /// asked on `input` whether to go on.
    pub fn run(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<ConversionResult, AppError> {
        let meta_path = self.config.meta_path();
        let output_path = self.config.output_path();

        let catalog = store::load_catalog(&meta_path)
            .inspect_err(|e| error!(error = %e, "cannot load catalog, nothing converted"))?;

        let issues = paths::check_file_paths(&catalog, &self.config.rules_dir);
        if !issues.is_empty() {
            warn!(issues = issues.len(), "catalog paths do not match the filesystem");
            report_issues(output, &issues).map_err(AppError::Console)?;
            let proceed = prompt::confirm(input, output, CONTINUE_PROMPT).map_err(AppError::Console)?;
            if !proceed {
                info!("conversion declined by operator");
                return Ok(ConversionResult::Aborted {
                    issues: issues.len(),
                });
            }
        }

        let converted = i18n::convert_to_multilingual(&catalog);
        store::save_catalog(&converted, &output_path)?;

        report_success(output, &meta_path, &output_path).map_err(AppError::Console)?;

        Ok(ConversionResult::Converted {
            rules: converted.rules.len(),
            issues: issues.len(),
        })
    }
}

fn report_issues(output: &mut impl Write, issues: &[String]) -> std::io::Result<()> {
    writeln!(output, "Path issues found:")?;
    for issue in issues {
        writeln!(output, "  - {issue}")?;
    }
    writeln!(output)?;
    writeln!(output, "Consider fixing these issues before converting.")
}

fn report_success(output: &mut impl Write, meta_path: &Path, output_path: &Path) -> std::io::Result<()> {
    writeln!(output, "Successfully saved to {}", output_path.display())?;
    writeln!(output)?;
    writeln!(output, "Conversion completed!")?;
    writeln!(output, "Original file: {}", meta_path.display())?;
    writeln!(output, "Converted file: {}", output_path.display())
}
