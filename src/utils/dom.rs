//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper is a
//! no-op (or returns a default) when the API is unavailable.

use docnav_core::ScrollLock;
use web_sys::{HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current location path (e.g. `/resources/guides/setup`).
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a new path onto the browser history without reloading.
pub fn push_pathname(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

// =============================================================================
// Scroll Lock
// =============================================================================

/// Locks page scrolling by setting `overflow: hidden` on `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        if let Some(body) = body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn unlock(&self) {
        if let Some(body) = body() {
            let _ = body.style().remove_property("overflow");
        }
    }

    fn is_locked(&self) -> bool {
        body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .is_some_and(|v| v == "hidden")
    }
}
