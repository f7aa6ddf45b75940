//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuFileText as Page, LuMenu as Menu,
        LuTriangle as TriangleDown, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCaretDownFill as TriangleDown, BsChevronDown as ChevronDown, BsFileEarmarkText as Page,
        BsList as Menu, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(TRIANGLE_DOWN, TriangleDown);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(PAGE, Page);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
