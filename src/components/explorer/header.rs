//! Explorer header component.
//!
//! Contains the site title, drive switcher, search box and refresh button.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/explorer/header.module.css");

/// Explorer header with title and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let drive_names: Vec<String> = ctx
        .config
        .with_value(|c| c.drives.iter().map(|d| d.name.clone()).collect());
    let has_many_drives = drive_names.len() > 1;

    let go_home = move |_: ev::MouseEvent| {
        AppRoute::browse(ctx.route.get_untracked().drive, "/").push();
    };

    view! {
        <header class=css::header>
            <button class=css::title on:click=go_home title="Back to root">
                <span class=css::titleIcon><Icon icon=ic::HOME /></span>
                <span class=css::titleLabel>{move || ctx.title()}</span>
            </button>

            <div class=css::actions>
                {has_many_drives.then(|| view! { <DriveSwitcher names=drive_names.clone() /> })}
                <SearchBox />
                <button
                    class=css::iconButton
                    on:click=move |_| ctx.refresh()
                    title="Refresh listing"
                    aria-label="Refresh listing"
                >
                    <Icon icon=ic::REFRESH />
                </button>
            </div>
        </header>
    }
}

/// Drive selector, shown when more than one drive is configured.
#[component]
fn DriveSwitcher(names: Vec<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_change = move |ev: ev::Event| {
        if let Ok(index) = event_target_value(&ev).parse::<usize>() {
            AppRoute::browse(index, "/").push();
        }
    };

    view! {
        <label class=css::driveSwitcher>
            <span class=css::driveIcon><Icon icon=ic::DRIVE /></span>
            <select on:change=on_change aria-label="Drive">
                {names
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| {
                        view! {
                            <option
                                value=i.to_string()
                                selected=move || ctx.route.get().drive == i
                            >
                                {name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Search form. Submitting routes to search results for the current drive.
#[component]
fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let query = RwSignal::new(ctx.route.get_untracked().search.unwrap_or_default());

    // Keep the box in sync when the route changes (back/forward)
    Effect::new(move |_| {
        query.set(ctx.route.get().search.unwrap_or_default());
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let drive = ctx.route.get_untracked().drive;
        let key = query.get_untracked();
        if key.trim().is_empty() {
            AppRoute::browse(drive, "/").push();
        } else {
            AppRoute::search(drive, &key).push();
        }
    };

    view! {
        <form class=css::search on:submit=on_submit role="search">
            <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
            <input
                class=css::searchInput
                type="search"
                placeholder="Search files"
                aria-label="Search files"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </form>
    }
}
