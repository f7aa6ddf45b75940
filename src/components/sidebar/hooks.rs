//! Hooks shared by the sidebar tree components.

use leptos::prelude::*;

use crate::app::AppContext;

/// Access the sidebar's [`AppContext`].
pub fn use_sidebar() -> AppContext {
    use_context::<AppContext>().expect("AppContext must be provided")
}

/// Invoke `on_match` whenever the location moves under `path`.
///
/// Fires immediately if the current location already matches. The
/// subscription is owned by the calling component and released when it
/// unmounts.
pub fn use_matching_path(path: &str, on_match: impl FnMut() + 'static) {
    let ctx = use_sidebar();
    let subscription = ctx.bus.get_value().subscribe(path, on_match);
    let _owned = StoredValue::new_local(subscription);
}
