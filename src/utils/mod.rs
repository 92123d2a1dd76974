//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json_cached`], [`fetch_content`] - Fetching with timeout and session cache
//! - [`markdown_to_html`] - README rendering with XSS sanitization
//! - [`dom`] - Window, storage and keyboard helpers

pub mod cache;
pub mod dom;
mod fetch;
mod markdown;

pub use fetch::{fetch_content, fetch_json_cached};
pub use markdown::markdown_to_html;
