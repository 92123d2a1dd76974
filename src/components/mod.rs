//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and drive loading (main entry point)
//! - [`explorer`] - File index UI
//! - [`lightbox`] - Image/video overlay
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
pub mod lightbox;
pub mod router;

pub use router::AppRouter;
