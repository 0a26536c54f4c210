//! Sidebar tree building and layout assembly for OL.
//!
//! Takes normalized outline items and produces the final navigation
//! layout: a mapping from sidebar label to a tree of category, link and
//! topic nodes.
//!
//! - [`build_items`] transforms normalized items into [`SidebarNode`]
//!   trees, resolving topic hrefs and persisting topic documents through
//!   an injected [`TopicPersister`]
//! - [`find_duplicated_labels`] reports top-level labels declared more
//!   than once across a file set
//! - [`build_layout`] orchestrates discovery, validation, duplicate
//!   filtering and tree building into one [`LayoutMapping`]
//!
//! Tree building is pure apart from the injected persister; path
//! computation ([`topic_href`]) is a separate pure function so the
//! builder is testable without filesystem access.

mod build;
mod duplicates;
mod layout;
mod persister;

pub use build::{
    BuildContext, BuildError, CategoryNode, LinkNode, NodeType, SidebarNode, build_items,
    topic_href,
};
pub use duplicates::{DuplicateReport, LabelSummary, find_duplicated_labels};
pub use layout::{LayoutMapping, LayoutOptions, build_layout};
pub use persister::{NullTopicPersister, PersistError, TopicPersister};
