//! UI components built with Leptos.
//!
//! - [`PhotoGallery`] - Thumbnail grid fed by the bucket listing
//! - [`LightboxModal`] - Full-size viewer with keyboard navigation
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod gallery;
pub mod icons;
pub mod lightbox;

pub use gallery::PhotoGallery;
pub use lightbox::LightboxModal;
