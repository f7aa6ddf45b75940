//! Not-found page for the resources section.

use docnav_core::{PathCorrector, SegmentCorrector};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{MAX_SUGGESTIONS, NOT_FOUND_TITLE, RESOURCES_ROOT, SITE_NAME};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/not_found.module.css");

/// Fixed not-found message plus up to [`MAX_SUGGESTIONS`] known paths
/// that resemble the current location.
#[component]
pub fn NotFound(
    /// Link paths of every known resource page.
    #[prop(into)]
    known: Signal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    dom::set_title(NOT_FOUND_TITLE);
    on_cleanup(|| dom::set_title(SITE_NAME));

    let corrector = SegmentCorrector::new(RESOURCES_ROOT);
    let suggestions = Signal::derive(move || {
        let location = ctx.location.get();
        known.with(|known| corrector.corrections(&location, known, MAX_SUGGESTIONS))
    });

    view! {
        <section class=css::notFound>
            <h1>"RESOURCE NOT FOUND"</h1>
            <p>"You just hit a route that doesn't exist... the sadness."</p>
            <Show when=move || suggestions.with(|s| !s.is_empty())>
                <p>"Did you mean:"</p>
                <ul class=css::suggestions>
                    <For
                        each=move || suggestions.get()
                        key=|path| path.clone()
                        children=move |path| {
                            let target = path.clone();
                            let go = move |ev: MouseEvent| {
                                ev.prevent_default();
                                ctx.navigate(&target);
                            };
                            view! { <li><a href=path.clone() on:click=go>{path.clone()}</a></li> }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
