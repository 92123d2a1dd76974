//! Click dispatch behavior, from raw trigger attributes to the resulting action.

use std::collections::HashMap;

use panview_core::trigger::{ATTR_FILE_TYPE, ATTR_MEDIA_TYPE, ATTR_TITLE, ATTR_URL};
use panview_core::{
    ClickAction, FileNode, FileTrigger, Navigation, TriggerAttributes, TriggerError, ViewerConfig,
    dispatch,
};

fn click(url: &str, title: &str, media_type: &str, file_type: &str) -> ClickAction {
    let attrs: HashMap<&str, &str> = [
        (ATTR_URL, url),
        (ATTR_TITLE, title),
        (ATTR_MEDIA_TYPE, media_type),
        (ATTR_FILE_TYPE, file_type),
    ]
    .into_iter()
    .collect();
    let trigger = TriggerAttributes::new(|name| attrs.get(name).map(|v| v.to_string()))
        .extract()
        .expect("complete trigger");
    dispatch(&trigger, &ViewerConfig::default())
}

#[test]
fn image_opens_single_entry_gallery() {
    let ClickAction::OpenGallery(config) = click("/pics/cat.png", "cat.png", "1", "png") else {
        panic!("expected gallery");
    };
    assert!(config.full_screen);
    assert!(config.dynamic);
    assert_eq!(config.dynamic_el.len(), 1);

    let entry = &config.dynamic_el[0];
    assert_eq!(entry.src.as_deref(), Some("/pics/cat.png"));
    assert!(entry.html.is_none());
    assert!(entry.sub_html.contains("<h4>cat.png</h4>"));
}

#[test]
fn video_entry_embeds_source_tag() {
    let ClickAction::OpenGallery(config) = click("/v/trip.webm", "Trip", "3", "webm") else {
        panic!("expected gallery");
    };
    assert_eq!(config.dynamic_el.len(), 1);

    let entry = &config.dynamic_el[0];
    assert!(entry.src.is_none());
    let html = entry.html.as_deref().unwrap();
    assert!(html.contains(r#"<source src="/v/trip.webm" type="video/webm">"#));
    assert!(html.contains("controls"));
    assert!(html.contains(r#"preload="none""#));
    assert_eq!(entry.sub_html, "<h4>Trip</h4>");
}

#[test]
fn docx_goes_to_office_viewer_with_full_url() {
    let action = click("/team/plan.docx", "plan.docx", "0", "docx");
    assert_eq!(
        action,
        ClickAction::Navigate(Navigation::OpenWindow(
            "https://view.officeapps.live.com/op/view.aspx?src=https://pan-index.herokuapp.com/team/plan.docx"
                .to_string()
        ))
    );
}

#[test]
fn png_without_media_code_navigates_directly() {
    let action = click("/pics/raw.png", "raw.png", "0", "png");
    assert_eq!(
        action,
        ClickAction::Navigate(Navigation::Assign("/pics/raw.png".to_string()))
    );
}

#[test]
fn pdf_navigates_to_unprefixed_url() {
    let action = click("/files/report.pdf", "report.pdf", "0", "pdf");
    let ClickAction::Navigate(nav) = action else {
        panic!("expected navigation");
    };
    assert_eq!(nav.url(), "/files/report.pdf");
}

#[test]
fn xlsx_office_viewer_target() {
    let action = click("/files/sheet.xlsx", "sheet.xlsx", "0", "xlsx");
    let ClickAction::Navigate(nav) = action else {
        panic!("expected navigation");
    };
    assert_eq!(
        nav.url(),
        "https://view.officeapps.live.com/op/view.aspx?src=https://pan-index.herokuapp.com/files/sheet.xlsx"
    );
}

#[test]
fn uppercase_file_type_still_hits_office_set() {
    let action = click("/files/deck.PPTX", "deck", "0", "PPTX");
    assert!(matches!(
        action,
        ClickAction::Navigate(Navigation::OpenWindow(_))
    ));
}

#[test]
fn missing_url_rejects_click() {
    let attrs: HashMap<&str, &str> = [(ATTR_TITLE, "cat.png"), (ATTR_MEDIA_TYPE, "1")]
        .into_iter()
        .collect();
    let result = TriggerAttributes::new(|name| attrs.get(name).map(|v| v.to_string())).extract();
    assert_eq!(result, Err(TriggerError::MissingAttribute(ATTR_URL)));
}

#[test]
fn listing_node_dispatches_like_rendered_entry() {
    let node = FileNode {
        file_name: "holiday.jpg".to_string(),
        path: "/photos/holiday.jpg".to_string(),
        ..Default::default()
    };
    let ClickAction::OpenGallery(config) =
        dispatch(&FileTrigger::from_node(&node), &ViewerConfig::default())
    else {
        panic!("expected gallery");
    };
    assert_eq!(config.dynamic_el[0].src.as_deref(), Some("/photos/holiday.jpg"));
}
