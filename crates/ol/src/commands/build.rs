//! `build` command: generate topic documents and the sidebars file.

use std::path::PathBuf;

use clap::Args;

use ol_config::{CONFIG_FILENAME, CliSettings, Config};
use ol_layout::{LayoutOptions, build_layout};
use ol_render::{FsTopicPersister, generate_sidebars_file};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `build` command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Glob patterns for outline files.
    pub(crate) patterns: Vec<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Directory generated topic documents are written under.
    #[arg(short, long)]
    pub(crate) docs: Option<PathBuf>,

    /// Path of the generated sidebars module.
    #[arg(short, long)]
    pub(crate) sidebars_file: Option<PathBuf>,

    /// Fallback glob patterns for outline files.
    #[arg(long, num_args = 1..)]
    pub(crate) fallback_patterns: Option<Vec<String>>,

    /// Path to the configuration file.
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub(crate) config: PathBuf,
}

impl BuildArgs {
    /// Run the build: assemble the layout and write the outputs.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let mut config = Config::load_or_default(&self.config);
        config.apply_cli(CliSettings {
            docs_dir: self.docs,
            sidebars_file: self.sidebars_file,
            fallback_patterns: self.fallback_patterns,
        });

        let persister = FsTopicPersister::new(config.docs_dir.clone());
        let options = LayoutOptions {
            fallback_patterns: config.fallback_patterns.clone(),
            persister: &persister,
        };

        let layout = build_layout(&self.patterns, &options);
        generate_sidebars_file(&layout, &config.sidebars_file)?;

        output.success(&format!(
            "Generated {} with {} sidebar(s); topic documents written under {}",
            config.sidebars_file.display(),
            layout.len(),
            config.docs_dir.display()
        ));
        Ok(())
    }
}
