//! `init` command: write a default configuration file.

use std::path::PathBuf;

use clap::Args;

use ol_config::{CONFIG_FILENAME, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `init` command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Path of the configuration file to create.
    #[arg(default_value = CONFIG_FILENAME)]
    pub(crate) config: PathBuf,
}

impl InitArgs {
    /// Write the default configuration to the requested path.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        Config::default().write(&self.config)?;
        output.success(&format!(
            "Configuration file created at {}",
            self.config.display()
        ));
        Ok(())
    }
}
