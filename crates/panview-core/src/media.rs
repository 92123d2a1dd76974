//! Media-type codes attached to index entries.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a file entry should be previewed.
///
/// The index encodes this as an integer: 1 = image, 2 = audio, 3 = video,
/// 4 = text. Any other code is kept as-is in [`MediaType::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MediaType {
    Image,
    Audio,
    Video,
    Text,
    #[default]
    Generic,
    Other(i64),
}

impl MediaType {
    /// Map an integer code to a media type.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Generic,
            1 => Self::Image,
            2 => Self::Audio,
            3 => Self::Video,
            4 => Self::Text,
            other => Self::Other(other),
        }
    }

    /// Integer code as written to `data-media-type`.
    pub fn code(self) -> i64 {
        match self {
            Self::Generic => 0,
            Self::Image => 1,
            Self::Audio => 2,
            Self::Video => 3,
            Self::Text => 4,
            Self::Other(code) => code,
        }
    }

    /// Parse an attribute value. Absent or non-numeric input is generic.
    pub fn parse_attr(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(Self::from_code)
            .unwrap_or_default()
    }

    /// Guess the media type from a lowercase file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "svg" | "ico" => Self::Image,
            "mp3" | "wav" | "flac" | "ogg" | "m4a" | "aac" => Self::Audio,
            "mp4" | "webm" | "mkv" | "mov" | "avi" | "flv" | "m3u8" => Self::Video,
            "txt" | "md" | "json" | "xml" | "log" | "csv" | "yaml" | "yml" | "toml" => Self::Text,
            _ => Self::Generic,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_code)
    }
}
