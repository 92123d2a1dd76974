//! README panel shown under a directory listing.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::{fetch_content, markdown_to_html};

stylance::import_crate_style!(css, "src/components/explorer/readme.module.css");

/// Rendered `README.md` of the current directory, if it has one.
#[component]
pub fn Readme() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let readme_url = Signal::derive(move || {
        let route = ctx.route.get();
        if route.is_search() {
            return None;
        }
        ctx.drive
            .with(|d| d.listing.readme(&route.path).map(|n| n.resource_url()))
    });

    let timeout_ms = ctx.config.with_value(|c| c.fetch_timeout_ms);
    let content = LocalResource::new(move || {
        let url = readme_url.get();
        async move {
            let url = url?;
            Some(
                fetch_content(&url, timeout_ms)
                    .await
                    .map(|md| markdown_to_html(&md))
                    .map_err(|e| e.to_string()),
            )
        }
    });

    view! {
        <Show when=move || readme_url.with(Option::is_some)>
            <section class=css::readme aria-label="README">
                <header class=css::header>
                    <span class=css::icon><Icon icon=ic::FILE_TEXT /></span>
                    "README.md"
                </header>
                <Suspense fallback=move || view! { <div class=css::loading>"Loading..."</div> }>
                    {move || content.get().flatten().map(|result| match result {
                        Ok(html) => view! { <div class=css::markdown inner_html=html /> }.into_any(),
                        Err(err) => view! {
                            <div class=css::error>
                                <span class=css::icon><Icon icon=ic::WARNING /></span>
                                {format!("Failed to load README: {}", err)}
                            </div>
                        }.into_any(),
                    })}
                </Suspense>
            </section>
        </Show>
    }
}
