//! Root application module.
//!
//! Contains the main App component and the AppContext shared by every
//! component, following Leptos conventions.

use leptos::prelude::*;

use panview_core::GalleryConfig;

use crate::components::AppRouter;
use crate::config::SiteConfig;
use crate::core::install_click_dispatcher;
use crate::models::{AppRoute, DriveView, LoadState};
use crate::utils::cache;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap handles to the underlying reactive state.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Site settings from `config.toml`
    pub config: StoredValue<SiteConfig>,
    /// Current route (kept in sync with the URL hash by the router)
    pub route: RwSignal<AppRoute>,
    /// Listing of the drive selected by the route
    pub drive: RwSignal<DriveView>,
    /// Manifest loading status for `drive`
    pub load_state: RwSignal<LoadState>,
    /// Open lightbox, if any
    pub gallery: RwSignal<Option<GalleryConfig>>,
    /// Bumped to force a manifest reload
    pub reload: RwSignal<u32>,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            route: RwSignal::new(AppRoute::current()),
            drive: RwSignal::new(DriveView::default()),
            load_state: RwSignal::new(LoadState::Loading),
            gallery: RwSignal::new(None),
            reload: RwSignal::new(0),
        }
    }

    /// Title shown in the header: manifest title, else the site title.
    pub fn title(&self) -> String {
        let title = self.drive.with(|d| d.title.clone());
        if title.is_empty() {
            self.config.with_value(|c| c.title.clone())
        } else {
            title
        }
    }

    /// Drop the cached manifest of the current drive and fetch it again.
    pub fn refresh(&self) {
        let drive = self.route.get_untracked().drive;
        if let Some(url) = self
            .config
            .with_value(|c| c.drive(drive).map(|d| d.manifest_url.clone()))
        {
            cache::remove(&cache::manifest_key(&url));
        }
        self.reload.update(|n| *n += 1);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the site configuration and provides the global AppContext
/// - Binds the file entry click listener (once per page load)
/// - Renders the router inside an ErrorBoundary
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let viewer = config.viewer.clone();
    let ctx = AppContext::new(config);
    provide_context(ctx);

    let gallery = ctx.gallery;
    if install_click_dispatcher(viewer, move |g| gallery.set(Some(g))) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::info_1(&"panview: file click handler ready".into());
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #d9534f; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #666;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.5rem 1.5rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
