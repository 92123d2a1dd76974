//! Target-independent logic for the panview file index.
//!
//! This crate provides:
//! - [`FileNode`], [`Manifest`], [`MediaType`] - index data model
//! - [`TriggerAttributes`], [`FileTrigger`] - typed view of a clicked file entry
//! - [`dispatch`] - decides what a click on a file entry does
//! - [`GalleryConfig`] - lightbox configuration produced for media files
//! - [`Listing`] - directory listing, README lookup and search over a manifest
//!
//! Nothing here touches the DOM; the web front end applies the results.

pub mod dispatch;
pub mod error;
pub mod format;
pub mod gallery;
pub mod listing;
pub mod media;
pub mod node;
pub mod path;
pub mod trigger;

pub use dispatch::{ClickAction, Navigation, ViewerConfig, dispatch};
pub use error::TriggerError;
pub use gallery::{GalleryConfig, GalleryEntry};
pub use listing::Listing;
pub use media::MediaType;
pub use node::{FileNode, Manifest};
pub use trigger::{FileTrigger, TriggerAttributes};
