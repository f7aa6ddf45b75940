//! Navigation model for the resources sidebar.
//!
//! - [`manifest`] - flat list of content file records
//! - [`tree`] - [`FileOrFolder`] tree built from the manifest
//! - [`order`] - display ordering (intro last, folders first, alphabetical sections)
//! - [`matcher`] - [`PathMatcher`] and the [`LocationBus`] subscription registry
//! - [`sidebar`] - shared [`SidebarState`] and per-folder [`CollapseState`]
//! - [`corrections`] - suggestions for the not-found page
//! - [`format`] - label humanizing and path helpers

pub mod corrections;
pub mod error;
pub mod format;
pub mod manifest;
pub mod matcher;
pub mod order;
pub mod sidebar;
pub mod tree;

pub use corrections::{PathCorrector, SegmentCorrector};
pub use error::ManifestError;
pub use format::humanize;
pub use manifest::{Frontmatter, Manifest, ResourceRecord};
pub use matcher::{LocationBus, PathMatcher, Subscription};
pub use order::{sidebar_sections, sort_children, sort_top_level, sorted_children};
pub use sidebar::{CollapseState, ScrollLock, SidebarState, follow_file_link, toggle_mobile};
pub use tree::{FileNode, FileOrFolder, FolderNode, TreeBuilder, build_tree, find_file, resource_paths};
