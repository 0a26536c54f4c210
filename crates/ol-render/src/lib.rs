//! Topic document and sidebars file generation for OL.
//!
//! The write side of the pipeline: [`FsTopicPersister`] renders topic
//! markdown documents under the docs root while the tree is built, and
//! [`generate_sidebars_file`] serializes the finished layout into a
//! Docusaurus-style `sidebars.js` module.

mod sidebars_file;
mod topic;

pub use sidebars_file::{RenderError, generate_sidebars_file, render_sidebars_module};
pub use topic::{FsTopicPersister, render_topic};
