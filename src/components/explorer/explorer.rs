//! Main explorer component.
//!
//! The file index page: header, path bar, file list and README, with
//! loading and error states for the drive manifest.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::pathbar::PathBar;
use super::readme::Readme;
use super::{FileList, Header};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::LoadState;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let footer = ctx.config.with_value(|c| c.footer.clone());

    view! {
        <div class=css::explorer>
            <Header />
            <PathBar />

            <main class=css::body>
                {move || match ctx.load_state.get() {
                    LoadState::Loading => view! {
                        <div class=css::loading>"Loading..."</div>
                    }.into_any(),
                    LoadState::Failed(msg) => view! {
                        <div class=css::error role="alert">
                            <span class=css::errorIcon><Icon icon=ic::WARNING /></span>
                            <p>"Failed to load the file index"</p>
                            <p class=css::errorDetail>{msg}</p>
                            <button class=css::retry on:click=move |_| ctx.refresh()>
                                "Retry"
                            </button>
                        </div>
                    }.into_any(),
                    LoadState::Ready => view! {
                        <FileList />
                        <Readme />
                    }.into_any(),
                }}
            </main>

            {(!footer.is_empty()).then(|| view! {
                <footer class=css::footer>{footer.clone()}</footer>
            })}
        </div>
    }
}
