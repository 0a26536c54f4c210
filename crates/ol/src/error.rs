//! CLI error types.

use ol_config::ConfigError;
use ol_outline::OutlineError;
use ol_render::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Outline(#[from] OutlineError),

    #[error("{0}")]
    Render(#[from] RenderError),
}
