//! Data models for the application.
//!
//! Navigation types ([`docnav_core::FileOrFolder`], [`docnav_core::SidebarState`])
//! live in `docnav-core`; this module holds the app-only ones.
//!
//! - [`Route`] - Main pane view resolved from the current location

mod route;

pub use route::Route;
