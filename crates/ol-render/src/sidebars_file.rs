//! Sidebars file generation.
//!
//! Serializes a finished [`LayoutMapping`] into the `sidebars.js` module
//! consumed by the site generator.

use std::fs;
use std::path::{Path, PathBuf};

use ol_layout::LayoutMapping;

/// Error raised while generating the sidebars file.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Write failure at the target path.
    #[error("I/O error writing {}: {source}", .path.display())]
    Io {
        /// Target path of the failed write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Layout serialization failure.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the sidebars module source for a layout.
///
/// # Errors
///
/// Returns [`RenderError::Json`] when the layout cannot be serialized.
pub fn render_sidebars_module(layout: &LayoutMapping) -> Result<String, RenderError> {
    let json = serde_json::to_string_pretty(layout)?;
    Ok(format!(
        "// Generated file. Run the build again instead of editing by hand.\nmodule.exports = {json};\n"
    ))
}

/// Write the sidebars module for a layout to `out`.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`RenderError`] when serialization or the write fails.
pub fn generate_sidebars_file(layout: &LayoutMapping, out: &Path) -> Result<(), RenderError> {
    let content = render_sidebars_module(layout)?;

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| RenderError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    tracing::info!(out = %out.display(), sidebars = layout.len(), "Writing sidebars file");
    fs::write(out, content).map_err(|source| RenderError::Io {
        path: out.to_path_buf(),
        source,
    })
}
