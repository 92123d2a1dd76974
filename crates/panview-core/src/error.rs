//! Error types for file entry handling.

use thiserror::Error;

/// Why a click on a file entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// A required `data-*` attribute is absent or blank.
    #[error("file entry is missing required attribute `{0}`")]
    MissingAttribute(&'static str),
}
