//! `validate` command: check outline files and report duplicated labels.

use std::path::PathBuf;

use clap::Args;

use ol_config::{CONFIG_FILENAME, CliSettings, Config};
use ol_files::files_from_patterns;
use ol_layout::find_duplicated_labels;
use ol_outline::validate_files;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `validate` command.
#[derive(Args)]
pub(crate) struct ValidateArgs {
    /// Glob patterns for outline files.
    pub(crate) patterns: Vec<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Fallback glob patterns for outline files.
    #[arg(long, num_args = 1..)]
    pub(crate) fallback_patterns: Option<Vec<String>>,

    /// Path to the configuration file.
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub(crate) config: PathBuf,
}

impl ValidateArgs {
    /// Validate the outline file set and print the findings.
    ///
    /// Nothing is written; problems are advisory. The build command
    /// applies the same exclusions automatically.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let mut config = Config::load_or_default(&self.config);
        config.apply_cli(CliSettings {
            docs_dir: None,
            sidebars_file: None,
            fallback_patterns: self.fallback_patterns,
        });

        let files = files_from_patterns(&self.patterns, &config.fallback_patterns);
        if files.is_empty() {
            output.warning("No outline files matched the given patterns");
            return Ok(());
        }
        output.info(&format!("Validating {} outline file(s)", files.len()));

        let validation = validate_files(&files);
        for (file, errors) in &validation.invalid_files {
            output.warning(&format!("Invalid outline file {}:", file.display()));
            for error in errors {
                output.warning(&format!("  - {error}"));
            }
        }

        let report = find_duplicated_labels(&validation.valid_files)?;
        for label in &report.duplicated {
            output.warning(&format!("Duplicated sidebar label {label:?}:"));
            if let Some(summary) = report.summary.get(label) {
                for (file, count) in &summary.per_file {
                    output.warning(&format!("  - {} ({count})", file.display()));
                }
            }
        }

        if validation.invalid_files.is_empty() && report.is_empty() {
            output.success(&format!(
                "All {} outline file(s) are valid",
                validation.valid_files.len()
            ));
        } else {
            output.warning(&format!(
                "{} invalid file(s), {} duplicated label(s); these are excluded from builds",
                validation.invalid_files.len(),
                report.duplicated.len()
            ));
        }
        Ok(())
    }
}
