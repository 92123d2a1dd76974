//! Browser tests for reading trigger attributes off real DOM elements.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use panview_core::trigger::{ATTR_FILE_TYPE, ATTR_MEDIA_TYPE, ATTR_TITLE, ATTR_URL, TRIGGER_CLASS};
use panview_core::{
    ClickAction, MediaType, TriggerAttributes, TriggerError, ViewerConfig, dispatch,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn trigger_element(attrs: &[(&str, &str)]) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_class_name(TRIGGER_CLASS);
    for (name, value) in attrs {
        el.set_attribute(name, value).unwrap();
    }
    el
}

#[wasm_bindgen_test]
fn extracts_image_trigger_from_element() {
    let el = trigger_element(&[
        (ATTR_URL, "/pics/cat.jpg"),
        (ATTR_TITLE, "cat.jpg"),
        (ATTR_MEDIA_TYPE, "1"),
        (ATTR_FILE_TYPE, "JPG"),
    ]);

    let trigger = TriggerAttributes::new(|name| el.get_attribute(name))
        .extract()
        .unwrap();

    assert_eq!(trigger.url, "/pics/cat.jpg");
    assert_eq!(trigger.media_type, MediaType::Image);
    assert_eq!(trigger.file_type, "jpg");
    assert!(matches!(
        dispatch(&trigger, &ViewerConfig::default()),
        ClickAction::OpenGallery(_)
    ));
}

#[wasm_bindgen_test]
fn element_without_url_is_rejected() {
    let el = trigger_element(&[(ATTR_TITLE, "orphan.bin")]);

    let result = TriggerAttributes::new(|name| el.get_attribute(name)).extract();

    assert_eq!(result, Err(TriggerError::MissingAttribute(ATTR_URL)));
}
