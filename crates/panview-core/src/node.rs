use serde::{Deserialize, Serialize};

use crate::media::MediaType;
use crate::path;

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure served by the index for one drive.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// Drive title shown in the header (falls back to configuration)
    #[serde(default)]
    pub title: Option<String>,
    /// Every file and folder in the drive
    #[serde(default)]
    pub files: Vec<FileNode>,
}

/// One file or folder entry in the index.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FileNode {
    /// Backend identifier
    #[serde(default)]
    pub file_id: String,
    /// Display name, including extension
    pub file_name: String,
    #[serde(default)]
    pub is_folder: bool,
    /// Size in bytes (0 for folders)
    #[serde(default)]
    pub file_size: u64,
    /// Extension without the dot; derived from the name when omitted
    #[serde(default)]
    pub file_type: Option<String>,
    /// Absolute index path (e.g. `/files/report.pdf`)
    pub path: String,
    /// Preview code; derived from the extension when omitted
    #[serde(default)]
    pub media_type: Option<MediaType>,
    /// Last modification time, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub last_op_time: String,
    /// Direct download location when it differs from `path`
    #[serde(default)]
    pub download_url: Option<String>,
}

impl FileNode {
    /// Lowercase extension of this entry, empty for folders and extensionless names.
    pub fn extension(&self) -> String {
        if self.is_folder {
            return String::new();
        }
        match &self.file_type {
            Some(t) => t.trim().trim_start_matches('.').to_lowercase(),
            None => self
                .file_name
                .rsplit_once('.')
                .filter(|(stem, _)| !stem.is_empty())
                .map(|(_, ext)| ext.to_lowercase())
                .unwrap_or_default(),
        }
    }

    /// Preview code, falling back to an extension-based guess.
    pub fn media(&self) -> MediaType {
        if self.is_folder {
            return MediaType::Generic;
        }
        self.media_type
            .unwrap_or_else(|| MediaType::from_extension(&self.extension()))
    }

    /// Normalized absolute path.
    pub fn full_path(&self) -> String {
        path::normalize_path(&self.path)
    }

    /// Path of the directory containing this entry.
    pub fn parent_path(&self) -> String {
        path::parent_path(&self.path)
    }

    /// Resource URL used when the entry is opened.
    pub fn resource_url(&self) -> String {
        self.download_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| self.full_path())
    }

    /// Dot-names are never listed, and neither is anything inside a
    /// dot-named folder.
    pub fn is_hidden(&self) -> bool {
        self.file_name.starts_with('.') || path::is_hidden_path(&self.path)
    }
}
