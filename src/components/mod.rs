//! UI components built with Leptos.
//!
//! - [`Shell`] - Page layout: header, sidebar and content pane
//! - [`sidebar`] - Resources navigation tree
//! - [`not_found`] - Not-found page with path suggestions
//! - [`page`] - Resource page summary
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod not_found;
pub mod page;
mod shell;
pub mod sidebar;

pub use shell::Shell;
