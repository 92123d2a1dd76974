//! Error types for browser-side operations.
//!
//! - [`FetchError`] - Network/fetch errors while loading manifests
//! - [`NavigationError`] - Failures applying a click's navigation
//! - [`ListenerError`] - Failures binding the document click listener

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// Errors while applying a navigation to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Browser window not available")]
    NoWindow,
    /// `window.open` returned no window (usually a popup blocker)
    #[error("Popup blocked while opening {0}")]
    PopupBlocked(String),
    #[error("Failed to navigate to {0}")]
    AssignFailed(String),
}

/// Errors while binding the document-level click listener.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("Document not available")]
    NoDocument,
    #[error("Failed to bind click listener: {0}")]
    BindFailed(String),
}
