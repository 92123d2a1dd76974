//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: drive, path and search come from `#/...`
//! - **Manifest loads follow the drive**: switching drives refetches, browsing does not
//! - **File routes open the file**: a route pointing at a file dispatches it like
//!   a click and falls back to the parent directory
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::explorer::Explorer;
use crate::components::lightbox::Lightbox;
use crate::core::{load_drive, open_node};
use crate::models::{AppRoute, LoadSequence, LoadState};
use crate::utils::dom::set_title;

/// Main application router.
///
/// Route structure:
/// - `#/` → root of the default drive
/// - `#/path/` → directory listing
/// - `#/d_1/path` → directory listing on drive 1
/// - `#/?search=key` → search results
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Only the drive index (and explicit refreshes) trigger a manifest fetch
    let drive = Memo::new(move |_| route.get().drive);
    let loads = StoredValue::new(LoadSequence::default());

    Effect::new(move |_| {
        let drive = drive.get();
        ctx.reload.track();

        let mut ticket = 0;
        loads.update_value(|l| ticket = l.begin());
        ctx.load_state.set(LoadState::Loading);
        let config = ctx.config.get_value();
        spawn_local(async move {
            let result = load_drive(&config, drive).await;

            // A newer load or a drive switch makes this result stale
            let current = route.get_untracked();
            if !loads
                .try_with_value(|l| l.accepts(ticket, drive, &current))
                .unwrap_or(false)
            {
                return;
            }

            match result {
                Ok(view) => {
                    set_title(&view.title);
                    ctx.drive.set(view);
                    ctx.load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::error_1(&format!("Failed to load drive d_{}: {}", drive, e).into());
                    ctx.load_state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    // A route naming a file opens it, then shows the containing directory
    Effect::new(move |_| {
        if ctx.load_state.get() != LoadState::Ready {
            return;
        }
        let current = route.get();
        if current.is_search() {
            return;
        }
        let Some(node) = ctx.drive.with(|d| {
            if d.drive != current.drive {
                return None;
            }
            d.listing
                .find(&current.path)
                .filter(|n| !n.is_folder)
                .cloned()
        }) else {
            return;
        };

        let parent = current.parent();
        parent.replace();
        route.set(parent);

        let viewer = ctx.config.with_value(|c| c.viewer.clone());
        let gallery = ctx.gallery;
        if let Err(e) = open_node(&node, &viewer, &move |g| gallery.set(Some(g))) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&e.to_string().into());
            #[cfg(not(target_arch = "wasm32"))]
            let _ = e;
        }
    });

    view! {
        // Explorer is always rendered (stable across route changes)
        <Explorer />

        // Lightbox sits above the explorer while a gallery is open
        <Lightbox gallery=ctx.gallery />
    }
}
