//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer page
//! - [`FileList`] - Directory listing and search results
//! - [`Header`] - Title, drive switcher, search and refresh
//! - `Readme` - README of the current directory

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod pathbar;
mod readme;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
