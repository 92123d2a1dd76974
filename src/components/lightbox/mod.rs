//! Lightbox overlay for image and video entries.
//!
//! Renders whatever [`GalleryConfig`] is in the shared gallery signal.
//! Clearing the signal closes the overlay.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use panview_core::{GalleryConfig, GalleryEntry};

use crate::components::icons as ic;
use crate::utils::dom::LightboxKey;

stylance::import_crate_style!(css, "src/components/lightbox/lightbox.module.css");

/// Index after moving `delta` slides, wrapping at both ends.
fn step_index(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

/// Full-screen gallery overlay.
///
/// # Props
/// - `gallery`: the open gallery, `None` when closed
#[component]
pub fn Lightbox(gallery: RwSignal<Option<GalleryConfig>>) -> impl IntoView {
    view! {
        <Show when=move || gallery.with(Option::is_some)>
            <LightboxOverlay gallery=gallery />
        </Show>
    }
}

#[component]
fn LightboxOverlay(gallery: RwSignal<Option<GalleryConfig>>) -> impl IntoView {
    let index = RwSignal::new(0usize);

    let len = Memo::new(move |_| gallery.with(|g| g.as_ref().map_or(0, |g| g.dynamic_el.len())));
    let full_screen = Memo::new(move |_| gallery.with(|g| g.as_ref().is_some_and(|g| g.full_screen)));

    let current = Memo::new(move |_| {
        let i = index.get();
        gallery.with(|g| g.as_ref().and_then(|g| g.dynamic_el.get(i).cloned()))
    });

    let close = move || gallery.set(None);
    let step = move |delta: isize| index.update(|i| *i = step_index(*i, len.get_untracked(), delta));

    let handle_keydown = move |ev: ev::KeyboardEvent| match LightboxKey::from_key(&ev.key()) {
        Some(LightboxKey::Close) => {
            ev.prevent_default();
            close();
        }
        Some(LightboxKey::Previous) => step(-1),
        Some(LightboxKey::Next) => step(1),
        None => {}
    };

    // Focus the overlay on mount for keyboard events
    let container_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = container_ref.get() {
            let _ = el.focus();
        }
    });

    let overlay_class = move || {
        if full_screen.get() {
            format!("{} {}", css::overlay, css::fullScreen)
        } else {
            css::overlay.to_string()
        }
    };

    view! {
        <div
            node_ref=container_ref
            tabindex="-1"
            class=overlay_class
            role="dialog"
            aria-modal="true"
            on:keydown=handle_keydown
            on:click=move |_| close()
        >
            <button
                class=css::closeButton
                on:click=move |e| {
                    e.stop_propagation();
                    close();
                }
                title="Close (Esc)"
                aria-label="Close lightbox"
            >
                <Icon icon=ic::CLOSE />
            </button>

            <Show when=move || { len.get() > 1 }>
                <button
                    class=format!("{} {}", css::navButton, css::navPrev)
                    on:click=move |e| {
                        e.stop_propagation();
                        step(-1);
                    }
                    aria-label="Previous"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <button
                    class=format!("{} {}", css::navButton, css::navNext)
                    on:click=move |e| {
                        e.stop_propagation();
                        step(1);
                    }
                    aria-label="Next"
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
                <span class=css::counter>
                    {move || format!("{} / {}", index.get() + 1, len.get())}
                </span>
            </Show>

            {move || current.get().map(|entry| view! { <Slide entry=entry /> })}
        </div>
    }
}

/// One gallery slide with its caption.
#[component]
fn Slide(entry: GalleryEntry) -> impl IntoView {
    let media = match (entry.src, entry.html) {
        (Some(src), _) => view! { <img src=src class=css::image alt="" /> }.into_any(),
        (None, Some(html)) => view! { <div class=css::html inner_html=html /> }.into_any(),
        (None, None) => view! { <div class=css::empty>"Nothing to display"</div> }.into_any(),
    };

    view! {
        <figure class=css::slide on:click=|e: ev::MouseEvent| e.stop_propagation()>
            {media}
            <figcaption class=css::caption inner_html=entry.sub_html />
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(step_index(0, 3, 1), 1);
        assert_eq!(step_index(2, 3, 1), 0);
        assert_eq!(step_index(0, 3, -1), 2);
        assert_eq!(step_index(0, 1, 1), 0);
        assert_eq!(step_index(5, 0, 1), 0);
    }
}
