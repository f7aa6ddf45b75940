//! Page layout component.
//!
//! Header with the mobile menu button, the resources sidebar and the
//! content pane. The navigation tree is derived here once and shared by
//! the sidebar and the route resolution of the content pane.

use docnav_core::{FileOrFolder, resource_paths, sidebar_sections};
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::not_found::NotFound;
use crate::components::page::ResourcePage;
use crate::components::sidebar::ResourcesSidebar;
use crate::config::{MOBILE_QUERY, RESOURCES_ROOT, SITE_NAME};
use crate::models::Route;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sections = Memo::new(move |_| {
        ctx.manifest.with(|m| {
            m.as_ref()
                .map(|m| sidebar_sections(&m.resources, RESOURCES_ROOT))
                .unwrap_or_default()
        })
    });
    let known = Signal::derive(move || {
        ctx.manifest.with(|m| {
            m.as_ref()
                .map(|m| resource_paths(&m.resources, RESOURCES_ROOT))
                .unwrap_or_default()
        })
    });

    // Leaving the mobile layout drops the overlay and its scroll lock.
    let is_mobile = use_media_query(MOBILE_QUERY);
    Effect::new(move || {
        if !is_mobile.get() && ctx.sidebar.with_untracked(|s| s.open_on_mobile()) {
            ctx.follow_link();
        }
    });

    let menu_icon = move || {
        if ctx.sidebar.with(|s| s.open_on_mobile()) {
            ic::CLOSE
        } else {
            ic::MENU
        }
    };

    let go_home = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(RESOURCES_ROOT);
    };

    view! {
        <div class=css::layout>
            <header class=css::header>
                <Show when=move || is_mobile.get()>
                    <button
                        class=css::menuButton
                        on:click=move |_| ctx.toggle_mobile()
                        aria-label="Toggle navigation"
                    >
                        {move || view! { <Icon icon=menu_icon() /> }}
                    </button>
                </Show>
                <a class=css::brand href=RESOURCES_ROOT on:click=go_home>{SITE_NAME}</a>
            </header>
            <div class=css::body>
                <ResourcesSidebar sections=sections />
                <main class=css::content>
                    <Content sections=sections known=known />
                </main>
            </div>
        </div>
    }
}

/// Main pane for the current location.
#[component]
fn Content(sections: Memo<Vec<FileOrFolder>>, known: Signal<Vec<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let route = Memo::new(move |_| {
        let location = ctx.location.get();
        sections.with(|s| Route::resolve(&location, s, RESOURCES_ROOT))
    });

    move || {
        if ctx.manifest.with(|m| m.is_none()) {
            return view! { <p class=css::loading>"Loading..."</p> }.into_any();
        }

        match route.get() {
            Route::Page(file) => view! { <ResourcePage file=file /> }.into_any(),
            Route::Index => {
                dom::set_title(SITE_NAME);
                view! {
                    <section class=css::index>
                        <h1>{SITE_NAME}</h1>
                        <p>"Pick a topic from the sidebar."</p>
                    </section>
                }
                .into_any()
            }
            Route::NotFound => view! { <NotFound known=known /> }.into_any(),
        }
    }
}
