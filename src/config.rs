//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name shown in the header.
pub const SITE_NAME: &str = "Resources";

/// Document title used on the not-found page.
pub const NOT_FOUND_TITLE: &str = "404: Resource Not found";

// =============================================================================
// Content Configuration
// =============================================================================

/// Path prefix every resource link lives under.
pub const RESOURCES_ROOT: &str = "/resources";

/// Resource manifest produced by `docnav manifest`.
pub const MANIFEST_URL: &str = "/resources.json";

/// Maximum number of suggestions on the not-found page.
pub const MAX_SUGGESTIONS: usize = 8;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the resource manifest.
    pub const MANIFEST_KEY: &str = "resources_manifest";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Viewports at or below this width get the slide-in sidebar.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
