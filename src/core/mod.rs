//! Browser-side behavior of the file index.
//!
//! This module provides:
//! - [`install_click_dispatcher`] - the document-level file entry click listener
//! - [`open_node`] - opening a listing entry as if it had been clicked
//! - [`load_drive`] - manifest loading for a drive

mod clicks;
pub mod error;
mod loader;

pub use clicks::{install_click_dispatcher, open_node};
pub use loader::load_drive;
