//! Path bar component.
//!
//! Displays the current directory as clickable breadcrumb segments, or a
//! summary line while showing search results.

use leptos::prelude::*;
use leptos_icons::Icon;

use panview_core::path::breadcrumbs;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Path bar displayed above the file list.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::pathbar aria-label="Location">
            {move || {
                let route = ctx.route.get();

                if let Some(key) = route.search.clone() {
                    let back = AppRoute::browse(route.drive, "/");
                    return view! {
                        <span class=css::icon><Icon icon=ic::SEARCH /></span>
                        <span class=css::summary>{format!("Search results for \"{}\"", key)}</span>
                        <button class=css::segment on:click=move |_| back.push()>
                            "Clear"
                        </button>
                    }
                    .into_any();
                }

                let crumbs = breadcrumbs(&route.path);
                let last = crumbs.len() - 1;

                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, (label, path))| {
                        let icon = if idx == 0 { ic::HOME } else { ic::FOLDER };
                        let target = AppRoute::browse(route.drive, &path);
                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                <button
                                    class=if idx == last {
                                        format!("{} {}", css::segment, css::segmentCurrent)
                                    } else {
                                        css::segment.to_string()
                                    }
                                    disabled=idx == last
                                    on:click=move |_| target.push()
                                >
                                    <span class=css::icon><Icon icon=icon /></span>
                                    <span class=css::label>{label}</span>
                                </button>
                            </>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </nav>
    }
}
