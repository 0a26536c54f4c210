//! Topic persistence capability.
//!
//! The tree builder resolves a topic's href and hands the topic to a
//! [`TopicPersister`] injected through the build context. Keeping
//! persistence behind a trait object keeps tree building testable without
//! touching the filesystem; the filesystem implementation lives in the
//! rendering crate.

use std::path::PathBuf;

use ol_outline::NormalizedItem;

/// Error raised when persisting a topic document fails.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Write failure at the target path.
    #[error("I/O error writing {}: {source}", .path.display())]
    Io {
        /// Target path of the failed write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid target path manipulation.
    #[error("{0}")]
    Path(#[from] ol_files::PathError),
}

/// Persists topic documents as a side effect of tree building.
pub trait TopicPersister {
    /// Persist the document for `item` at the location derived from its
    /// resolved `href`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when the document cannot be written.
    fn save(&self, item: &NormalizedItem, href: &str) -> Result<(), PersistError>;
}

/// Persister that discards all writes.
///
/// Used by validation flows and tests that only need hrefs resolved.
pub struct NullTopicPersister;

impl TopicPersister for NullTopicPersister {
    fn save(&self, _item: &NormalizedItem, _href: &str) -> Result<(), PersistError> {
        Ok(())
    }
}
