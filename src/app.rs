//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! application-level setup: location tracking and manifest loading.

use docnav_core::{
    LocationBus, Manifest, SidebarState, TreeBuilder, follow_file_link, toggle_mobile,
};
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::Shell;
use crate::config::{MANIFEST_URL, RESOURCES_ROOT};
use crate::utils::{BodyScrollLock, dom, fetch_manifest};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Location**: `location` is the reactive path for rendering; `bus`
///   delivers the same changes to explicit per-folder subscriptions
/// - **Sidebar**: the single [`SidebarState`] shared by every tree node
/// - **Manifest**: `None` until the first load finishes
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current `location.pathname`.
    pub location: RwSignal<String>,
    /// Subscription registry fed with every location change.
    pub bus: StoredValue<LocationBus, LocalStorage>,
    /// Expanded top-level section and mobile visibility.
    pub sidebar: RwSignal<SidebarState>,
    /// Resource manifest (empty on load failure).
    pub manifest: RwSignal<Option<Manifest>>,
}

impl AppContext {
    /// Creates a context positioned at the browser's current path.
    pub fn new() -> Self {
        let location = dom::pathname();
        let bus = LocationBus::new();
        bus.publish(&location);

        Self {
            location: RwSignal::new(location),
            bus: StoredValue::new_local(bus),
            sidebar: RwSignal::new(SidebarState::new()),
            manifest: RwSignal::new(None),
        }
    }

    /// Navigate in-app: push history, update the location and notify subscribers.
    pub fn navigate(&self, path: &str) {
        if self.location.with_untracked(|current| current != path) {
            dom::push_pathname(path);
        }
        self.set_location(path.to_string());
    }

    /// Re-read the browser path after back/forward navigation.
    pub fn sync_location(&self) {
        self.set_location(dom::pathname());
    }

    fn set_location(&self, path: String) {
        self.location.set(path.clone());
        // Published on a cloned handle so subscribers may reach the bus again.
        let bus = self.bus.get_value();
        bus.publish(&path);
    }

    /// Expand top-level section `index`, collapsing its siblings.
    pub fn set_current(&self, index: usize) {
        self.sidebar.update(|s| s.set_current(index));
    }

    /// Close the mobile sidebar and release the scroll lock before a page link is followed.
    pub fn follow_link(&self) {
        self.sidebar.update(|s| follow_file_link(s, &BodyScrollLock));
    }

    /// Menu button: show or hide the sidebar on mobile.
    pub fn toggle_mobile(&self) {
        self.sidebar.update(|s| toggle_mobile(s, &BodyScrollLock));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Setup
// ============================================================================

/// Follow browser back/forward buttons.
#[cfg(target_arch = "wasm32")]
fn setup_popstate_listener(ctx: AppContext) {
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move || {
        ctx.sync_location();
    }) as Box<dyn Fn()>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

/// Drop records the sidebar cannot place, with a console warning for each.
fn warn_skipped(manifest: &mut Manifest) {
    for index in manifest.drop_empty_paths() {
        dom::warn(&format!("resource record {} has an empty path, skipped", index));
    }

    let mut builder = TreeBuilder::new(RESOURCES_ROOT);
    for record in &manifest.resources {
        builder.insert(record);
    }
    for path in builder.skipped() {
        dom::warn(&format!("duplicate resource skipped: {}", path));
    }
}

/// Load the manifest once. Failures leave an empty sidebar and a console warning.
fn load_manifest(ctx: AppContext) {
    leptos::task::spawn_local(async move {
        let manifest = match fetch_manifest(MANIFEST_URL).await {
            Ok(mut manifest) => {
                warn_skipped(&mut manifest);
                manifest
            }
            Err(e) => {
                dom::warn(&format!("failed to load {}: {}", MANIFEST_URL, e));
                Manifest::default()
            }
        };
        ctx.manifest.set(Some(manifest));
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts location tracking and the manifest load
/// - Renders the Shell inside an ErrorBoundary
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    #[cfg(target_arch = "wasm32")]
    setup_popstate_listener(ctx);
    load_manifest(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="padding: 2rem; font-family: sans-serif;">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
