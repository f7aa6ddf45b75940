//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_manifest`] - Manifest fetching with timeout and session caching
//! - [`BodyScrollLock`] - Page scroll lock for the mobile sidebar
//! - [`dom`] - Browser location, history and document helpers

pub mod cache;
pub mod dom;
mod fetch;

pub use dom::BodyScrollLock;
pub use fetch::fetch_manifest;
