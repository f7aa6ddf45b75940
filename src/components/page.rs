//! Resource page summary.

use docnav_core::FileNode;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/page.module.css");

/// Title block for the resource at the current location.
#[component]
pub fn ResourcePage(file: FileNode) -> impl IntoView {
    let title = file.label();
    dom::set_title(&title);

    let byline = (!file.authors.is_empty()).then(|| format!("By {}", file.authors.join(", ")));

    view! {
        <article class=css::page>
            <h1 class=css::title>
                <span class=css::icon aria-hidden="true"><Icon icon=ic::PAGE /></span>
                {title}
            </h1>
            <p class=css::meta>
                {byline.map(|b| view! { <span>{b}</span> })}
                {file.date.map(|d| view! { <time>{d}</time> })}
            </p>
            <p class=css::source>{file.relative_path}</p>
        </article>
    }
}
