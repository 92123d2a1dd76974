//! Data models and types for the front end.
//!
//! Contains:
//! - [`AppRoute`] - Hash-based navigation (drive, path, search)
//! - [`LoadState`], [`DriveView`], [`LoadSequence`] - Explorer page state
//!
//! Index data types ([`panview_core::FileNode`] and friends) live in the core crate.

mod explorer;
mod route;

pub use explorer::{DriveView, LoadSequence, LoadState};
pub use route::AppRoute;
