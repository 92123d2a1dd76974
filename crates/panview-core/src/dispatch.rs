//! Click dispatch for file entries.
//!
//! [`dispatch`] is a pure function: it maps a [`FileTrigger`] to the single
//! [`ClickAction`] the click should perform. Applying the action (opening the
//! lightbox, changing `window.location`) is left to the caller.

use serde::{Deserialize, Serialize};

use crate::gallery::GalleryConfig;
use crate::media::MediaType;
use crate::trigger::FileTrigger;

/// Default host prefixed to resource paths for the office viewer.
pub const DEFAULT_BASE_HOST: &str = "https://pan-index.herokuapp.com";

/// Default office-document viewer endpoint.
pub const DEFAULT_OFFICE_VIEWER: &str = "https://view.officeapps.live.com/op/view.aspx";

/// Extensions rendered through the office viewer.
pub const DEFAULT_OFFICE_EXTENSIONS: &[&str] = &["doc", "docx", "dotx", "ppt", "pptx", "xls", "xlsx"];

/// External endpoints used when a file is not previewed inline.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Host prefixed to resource paths to form fully-qualified URLs
    pub base_host: String,
    /// Office viewer endpoint; receives the fully-qualified URL as `src`
    pub office_viewer: String,
    /// Lowercase extensions sent to the office viewer
    pub office_extensions: Vec<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_host: DEFAULT_BASE_HOST.to_string(),
            office_viewer: DEFAULT_OFFICE_VIEWER.to_string(),
            office_extensions: DEFAULT_OFFICE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ViewerConfig {
    pub fn is_office(&self, file_type: &str) -> bool {
        self.office_extensions.iter().any(|ext| ext == file_type)
    }

    /// Resource path prefixed with the base host.
    pub fn full_url(&self, url: &str) -> String {
        format!("{}{}", self.base_host.trim_end_matches('/'), url)
    }

    /// Office viewer location for a resource path. `src` is passed verbatim.
    pub fn office_viewer_url(&self, url: &str) -> String {
        format!("{}?src={}", self.office_viewer, self.full_url(url))
    }
}

/// Browser navigation requested by a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Open in a new window/tab (`window.open`)
    OpenWindow(String),
    /// Replace the current location (`location.href = ...`)
    Assign(String),
}

impl Navigation {
    pub fn url(&self) -> &str {
        match self {
            Self::OpenWindow(url) | Self::Assign(url) => url,
        }
    }
}

/// The one thing a click on a file entry does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    OpenGallery(GalleryConfig),
    Navigate(Navigation),
}

/// Decide what a click on `trigger` does.
///
/// - image (1): single-entry gallery with the resource as image source
/// - video (3): single-entry gallery with inline `<video>` markup
/// - office extension: office viewer in a new window with the host-prefixed URL
/// - anything else: direct navigation to the unprefixed resource URL
pub fn dispatch(trigger: &FileTrigger, config: &ViewerConfig) -> ClickAction {
    match trigger.media_type {
        MediaType::Image => {
            ClickAction::OpenGallery(GalleryConfig::image(&trigger.url, &trigger.title))
        }
        MediaType::Video => ClickAction::OpenGallery(GalleryConfig::video(
            &trigger.url,
            &trigger.file_type,
            &trigger.title,
        )),
        _ if config.is_office(&trigger.file_type) => {
            ClickAction::Navigate(Navigation::OpenWindow(config.office_viewer_url(&trigger.url)))
        }
        _ => ClickAction::Navigate(Navigation::Assign(trigger.url.clone())),
    }
}
