//! Recursive navigation tree.
//!
//! [`Tree`] dispatches on the node kind:
//! - files render as [`PageLink`]
//! - top-level folders render as [`FirstLevelFolder`], expanded through
//!   the shared sidebar state (one at a time)
//! - nested folders render as [`Folder`], each with its own collapse state
//!
//! Folder children are sorted with [`sorted_children`] before recursion.

use docnav_core::{CollapseState, FileNode, FileOrFolder, FolderNode, sorted_children};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use super::hooks::{use_matching_path, use_sidebar};
use crate::components::icons as ic;

/// Render one node of the tree.
///
/// Returns [`AnyView`] so folders can recurse into it.
#[component]
pub fn Tree(
    item: FileOrFolder,
    #[prop(optional)] index: Option<usize>,
    #[prop(optional)] first_level: bool,
) -> AnyView {
    match item {
        FileOrFolder::File(file) => view! { <PageLink file=file /> }.into_any(),
        FileOrFolder::Folder(folder) => match index {
            Some(index) if first_level => {
                view! { <FirstLevelFolder folder=folder index=index /> }.into_any()
            }
            _ => view! { <Folder folder=folder /> }.into_any(),
        },
    }
}

fn render_children(folder: &FolderNode) -> Vec<AnyView> {
    sorted_children(&folder.children)
        .into_iter()
        .map(|node| view! { <Tree item=node /> }.into_any())
        .collect()
}

fn wrapper_class(collapsed: bool, first_level: bool) -> String {
    let mut class = css::treeWrapper.to_string();
    if first_level {
        class = format!("{} {}", class, css::firstLevel);
    }
    if collapsed {
        class = format!("{} {}", class, css::collapsed);
    }
    class
}

/// Link to a resource page.
///
/// Clicking closes the mobile sidebar and releases the scroll lock before
/// anything else, so both happen even when the browser handles the click
/// itself (new tab, modifier keys).
#[component]
fn PageLink(file: FileNode) -> impl IntoView {
    let ctx = use_sidebar();

    let label = file.label();
    let href = file.path.clone();
    let target = file.path;

    let is_active = Signal::derive({
        let href = href.clone();
        move || ctx.location.with(|l| l.trim_end_matches('/') == href)
    });

    let handle_click = move |ev: MouseEvent| {
        ctx.follow_link();

        let modified = ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key();
        if ev.button() != 0 || modified {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&target);
    };

    let link_class = move || {
        if is_active.get() {
            format!("{} {}", css::pageLink, css::active)
        } else {
            css::pageLink.to_string()
        }
    };

    view! {
        <a
            class=link_class
            href=href
            on:click=handle_click
            aria-current=move || is_active.get().then_some("page")
        >
            {label}
        </a>
    }
}

/// Nested folder with its own collapse state.
///
/// Opens when the location moves under it and stays open when it moves
/// away; only the label toggles it closed.
#[component]
fn Folder(folder: FolderNode) -> impl IntoView {
    let collapse = RwSignal::new(CollapseState::new());

    use_matching_path(&folder.path, move || {
        collapse.update(|c| c.expand());
    });

    let collapsed = Signal::derive(move || collapse.with(|c| c.is_collapsed()));
    let toggle = move |_: MouseEvent| collapse.update(|c| c.toggle());

    let label = folder.label();
    let children = render_children(&folder);

    view! {
        <div class=move || wrapper_class(collapsed.get(), false)>
            <button
                class=css::label
                on:click=toggle
                aria-expanded=move || (!collapsed.get()).to_string()
            >
                <span class=css::triangle aria-hidden="true"><Icon icon=ic::TRIANGLE_DOWN /></span>
                {label}
            </button>
            <div class=css::children>{children}</div>
        </div>
    }
}

/// Top-level section. Expanded only while it is the sidebar's current index.
#[component]
fn FirstLevelFolder(folder: FolderNode, index: usize) -> impl IntoView {
    let ctx = use_sidebar();

    use_matching_path(&folder.path, move || ctx.set_current(index));

    let collapsed = Signal::derive(move || ctx.sidebar.with(|s| s.is_section_collapsed(index)));
    let select = move |_: MouseEvent| ctx.set_current(index);

    let label_class = move || {
        if collapsed.get() {
            css::firstLabel.to_string()
        } else {
            format!("{} {}", css::firstLabel, css::active)
        }
    };

    let label = folder.label();
    let children = render_children(&folder);

    view! {
        <div class=move || wrapper_class(collapsed.get(), true)>
            <button
                class=label_class
                on:click=select
                aria-expanded=move || (!collapsed.get()).to_string()
            >
                {label}
                <span class=css::collapseToggler aria-hidden="true"><Icon icon=ic::CHEVRON_DOWN /></span>
            </button>
            <div class=css::children>{children}</div>
        </div>
    }
}
