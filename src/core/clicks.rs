//! Document-level click handling for file entries.
//!
//! A single delegated `click` listener is bound on the document at startup.
//! It resolves the nearest `.icon-file` ancestor of the click target, reads the
//! entry's `data-*` attributes into a [`FileTrigger`], dispatches it, and
//! applies the resulting [`ClickAction`].

use std::cell::Cell;

use panview_core::{ClickAction, FileNode, FileTrigger, GalleryConfig, Navigation, ViewerConfig};

use super::error::{ListenerError, NavigationError};

/// One-shot setup guard.
pub struct SetupOnce(Cell<bool>);

impl SetupOnce {
    pub const fn new() -> Self {
        Self(Cell::new(false))
    }

    /// Run `setup` unless an earlier run succeeded.
    ///
    /// Returns `Ok(true)` if this call ran it and `Ok(false)` if it had
    /// already been done. A failed `setup` leaves the guard open for a retry.
    pub fn run<E>(&self, setup: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        if self.0.get() {
            return Ok(false);
        }
        setup()?;
        self.0.set(true);
        Ok(true)
    }
}

impl Default for SetupOnce {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static LISTENER: SetupOnce = const { SetupOnce::new() };
}

/// Bind the click listener for file entries.
///
/// Idempotent: returns `true` if this call bound the listener and `false` if
/// it was already bound for this page load or could not be bound.
pub fn install_click_dispatcher<F>(viewer: ViewerConfig, open_gallery: F) -> bool
where
    F: Fn(GalleryConfig) + 'static,
{
    match LISTENER.with(|guard| guard.run(|| bind_listener(viewer, open_gallery))) {
        Ok(bound) => bound,
        Err(e) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&e.to_string().into());
            #[cfg(not(target_arch = "wasm32"))]
            let _ = e;
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn bind_listener<F>(viewer: ViewerConfig, open_gallery: F) -> Result<(), ListenerError>
where
    F: Fn(GalleryConfig) + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ListenerError::NoDocument)?;

    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        handle_click(&event, &viewer, &open_gallery);
    }) as Box<dyn Fn(web_sys::MouseEvent)>);

    document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| ListenerError::BindFailed(format!("{:?}", e)))?;

    // Lives for the rest of the page
    closure.forget();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn bind_listener<F>(_viewer: ViewerConfig, _open_gallery: F) -> Result<(), ListenerError>
where
    F: Fn(GalleryConfig) + 'static,
{
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn handle_click<F>(event: &web_sys::MouseEvent, viewer: &ViewerConfig, open_gallery: &F)
where
    F: Fn(GalleryConfig),
{
    use panview_core::TriggerAttributes;
    use panview_core::trigger::TRIGGER_CLASS;
    use wasm_bindgen::JsCast;

    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };
    let Ok(Some(element)) = target.closest(&format!(".{}", TRIGGER_CLASS)) else {
        return;
    };

    match TriggerAttributes::new(|name| element.get_attribute(name)).extract() {
        Ok(trigger) => {
            event.prevent_default();
            let action = panview_core::dispatch(&trigger, viewer);
            if let Err(e) = apply_action(action, open_gallery) {
                web_sys::console::error_1(&e.to_string().into());
            }
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("Click ignored: {}", e).into());
        }
    }
}

/// Open a listing entry the same way a click on its rendered row would.
pub fn open_node<F>(node: &FileNode, viewer: &ViewerConfig, open_gallery: &F) -> Result<(), NavigationError>
where
    F: Fn(GalleryConfig),
{
    let action = panview_core::dispatch(&FileTrigger::from_node(node), viewer);
    apply_action(action, open_gallery)
}

/// Perform a dispatched action in the browser.
pub fn apply_action<F>(action: ClickAction, open_gallery: &F) -> Result<(), NavigationError>
where
    F: Fn(GalleryConfig),
{
    match action {
        ClickAction::OpenGallery(config) => {
            open_gallery(config);
            Ok(())
        }
        ClickAction::Navigate(nav) => navigate(&nav),
    }
}

fn navigate(nav: &Navigation) -> Result<(), NavigationError> {
    let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
    match nav {
        Navigation::OpenWindow(url) => match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            _ => Err(NavigationError::PopupBlocked(url.clone())),
        },
        Navigation::Assign(url) => window
            .location()
            .set_href(url)
            .map_err(|_| NavigationError::AssignFailed(url.clone())),
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use panview_core::trigger::{ATTR_FILE_TYPE, ATTR_MEDIA_TYPE, ATTR_TITLE, ATTR_URL, TRIGGER_CLASS};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen_test::*;
    use web_sys::{Element, MouseEvent, MouseEventInit};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(tag: &str, class: Option<&str>, attrs: &[(&str, &str)]) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element(tag).unwrap();
        if let Some(class) = class {
            el.set_class_name(class);
        }
        for (name, value) in attrs {
            el.set_attribute(name, value).unwrap();
        }
        el
    }

    /// Click `target` with the handler bound on `root`, returning the galleries
    /// opened and whether the default action was prevented.
    fn click(root: &Element, target: &Element) -> (Vec<GalleryConfig>, bool) {
        let opened: Rc<RefCell<Vec<GalleryConfig>>> = Rc::default();
        let sink = opened.clone();
        let viewer = ViewerConfig::default();
        let listener = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            let sink = sink.clone();
            handle_click(&event, &viewer, &move |g| sink.borrow_mut().push(g));
        });
        root.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .unwrap();

        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
        target.dispatch_event(&event).unwrap();

        root.remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .unwrap();
        let galleries = opened.borrow().clone();
        (galleries, event.default_prevented())
    }

    #[wasm_bindgen_test]
    fn test_click_on_nested_child_opens_gallery() {
        let row = element(
            "div",
            Some(TRIGGER_CLASS),
            &[
                (ATTR_URL, "/pics/cat.jpg"),
                (ATTR_TITLE, "cat.jpg"),
                (ATTR_MEDIA_TYPE, "1"),
                (ATTR_FILE_TYPE, "jpg"),
            ],
        );
        let label = element("span", None, &[]);
        row.append_child(&label).unwrap();

        let (opened, prevented) = click(&row, &label);

        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].dynamic_el.len(), 1);
        assert_eq!(opened[0].dynamic_el[0].src.as_deref(), Some("/pics/cat.jpg"));
        assert!(prevented);
    }

    #[wasm_bindgen_test]
    fn test_rejected_trigger_does_nothing() {
        let row = element(
            "div",
            Some(TRIGGER_CLASS),
            &[(ATTR_TITLE, "cat.jpg"), (ATTR_MEDIA_TYPE, "1")],
        );
        let label = element("span", None, &[]);
        row.append_child(&label).unwrap();

        let (opened, prevented) = click(&row, &label);

        assert!(opened.is_empty());
        assert!(!prevented);
    }

    #[wasm_bindgen_test]
    fn test_click_outside_trigger_is_ignored() {
        let container = element("div", Some("listing"), &[]);
        let plain = element(
            "span",
            None,
            &[(ATTR_URL, "/pics/cat.jpg"), (ATTR_TITLE, "cat.jpg"), (ATTR_MEDIA_TYPE, "1")],
        );
        container.append_child(&plain).unwrap();

        let (opened, prevented) = click(&container, &plain);

        assert!(opened.is_empty());
        assert!(!prevented);
    }
}
