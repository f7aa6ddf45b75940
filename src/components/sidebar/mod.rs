//! Resources navigation sidebar.
//!
//! - [`ResourcesSidebar`] - Sidebar container rendering the sorted sections
//! - [`tree`] - Recursive file/folder components
//! - [`hooks`] - Sidebar context access and location matching

mod hooks;
mod tree;

use docnav_core::FileOrFolder;
use leptos::prelude::*;

use hooks::use_sidebar;
use tree::Tree;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Navigation sidebar for the resources section.
///
/// `sections` are the top-level nodes, already in display order. Each is
/// rendered as a first-level section whose expansion is exclusive.
#[component]
pub fn ResourcesSidebar(#[prop(into)] sections: Signal<Vec<FileOrFolder>>) -> impl IntoView {
    let ctx = use_sidebar();

    let sidebar_class = move || {
        if ctx.sidebar.with(|s| s.open_on_mobile()) {
            format!("{} {}", css::sidebar, css::openOnMobile)
        } else {
            css::sidebar.to_string()
        }
    };

    view! {
        <nav class=sidebar_class aria-label="Resources">
            {move || {
                sections
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, node)| view! { <Tree item=node index=index first_level=true /> })
                    .collect_view()
            }}
        </nav>
    }
}
