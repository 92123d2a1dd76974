//! Typed view of a clickable file entry.
//!
//! A trigger element is any element with the [`TRIGGER_CLASS`] marker class.
//! Its `data-*` attributes are read once into a [`FileTrigger`] before any
//! decision is made about what the click does.

use crate::error::TriggerError;
use crate::media::MediaType;
use crate::node::FileNode;

/// Marker class carried by every clickable file entry.
pub const TRIGGER_CLASS: &str = "icon-file";

pub const ATTR_URL: &str = "data-url";
pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_MEDIA_TYPE: &str = "data-media-type";
pub const ATTR_FILE_TYPE: &str = "data-file-type";

/// Raw attribute source for a trigger element.
///
/// Wraps a lookup closure so the same extraction works for DOM elements
/// (`Element::get_attribute`) and for plain maps in tests.
pub struct TriggerAttributes<F>
where
    F: Fn(&str) -> Option<String>,
{
    lookup: F,
}

impl<F> TriggerAttributes<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Read a required attribute. Absent and blank values are both missing.
    fn required(&self, name: &'static str) -> Result<String, TriggerError> {
        (self.lookup)(name)
            .filter(|v| !v.trim().is_empty())
            .ok_or(TriggerError::MissingAttribute(name))
    }

    /// Extract and validate the trigger view-model.
    pub fn extract(&self) -> Result<FileTrigger, TriggerError> {
        let url = self.required(ATTR_URL)?;
        let title = self.required(ATTR_TITLE)?;
        let media_type = MediaType::parse_attr((self.lookup)(ATTR_MEDIA_TYPE).as_deref());
        let file_type = (self.lookup)(ATTR_FILE_TYPE)
            .map(|t| t.trim().to_lowercase())
            .unwrap_or_default();

        Ok(FileTrigger {
            url,
            title,
            media_type,
            file_type,
        })
    }
}

/// Validated attributes of a clicked file entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTrigger {
    /// Resource path or URL
    pub url: String,
    /// Display name used for captions
    pub title: String,
    pub media_type: MediaType,
    /// Lowercase extension, possibly empty
    pub file_type: String,
}

impl FileTrigger {
    /// The trigger a rendered entry for `node` would produce.
    pub fn from_node(node: &FileNode) -> Self {
        Self {
            url: node.resource_url(),
            title: node.file_name.clone(),
            media_type: node.media(),
            file_type: node.extension(),
        }
    }

    /// Attribute pairs to render on the trigger element.
    pub fn data_attributes(&self) -> [(&'static str, String); 4] {
        [
            (ATTR_URL, self.url.clone()),
            (ATTR_TITLE, self.title.clone()),
            (ATTR_MEDIA_TYPE, self.media_type.code().to_string()),
            (ATTR_FILE_TYPE, self.file_type.clone()),
        ]
    }
}
