//! Lightbox gallery configuration.
//!
//! Serializes to the option names lightbox widgets expect (`fullScreen`,
//! `dynamic`, `dynamicEl`, `src`, `html`, `subHtml`), so the same value can
//! drive the built-in overlay or be handed to a JS widget.

use serde::{Deserialize, Serialize};

use crate::format::escape_html;

/// Full configuration for one lightbox opening.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryConfig {
    pub full_screen: bool,
    /// Entries come from `dynamic_el` rather than from page markup.
    pub dynamic: bool,
    pub dynamic_el: Vec<GalleryEntry>,
}

/// One slide in the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    /// Image source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Raw slide markup (used for video)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Caption markup
    pub sub_html: String,
}

impl GalleryConfig {
    /// Full-screen dynamic gallery with a single entry.
    pub fn single(entry: GalleryEntry) -> Self {
        Self {
            full_screen: true,
            dynamic: true,
            dynamic_el: vec![entry],
        }
    }

    /// Gallery showing one image.
    pub fn image(url: &str, title: &str) -> Self {
        Self::single(GalleryEntry {
            src: Some(url.to_string()),
            html: None,
            sub_html: caption(title),
        })
    }

    /// Gallery showing one inline HTML5 video.
    pub fn video(url: &str, file_type: &str, title: &str) -> Self {
        Self::single(GalleryEntry {
            src: None,
            html: Some(video_markup(url, file_type)),
            sub_html: caption(title),
        })
    }
}

/// Caption heading for a title.
pub fn caption(title: &str) -> String {
    format!("<h4>{}</h4>", escape_html(title))
}

/// Inline video player markup.
pub fn video_markup(url: &str, file_type: &str) -> String {
    format!(
        r#"<video class="lg-video-object lg-html5" controls preload="none"><source src="{}" type="video/{}">Your browser does not support HTML5 video</video>"#,
        escape_html(url),
        escape_html(file_type)
    )
}
