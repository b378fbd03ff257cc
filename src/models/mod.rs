//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ObjectListing`], [`StorageObject`] - Cloud Storage listing response
//! - [`GalleryContent`] - What the gallery container displays

mod gallery;
mod listing;

pub use gallery::GalleryContent;
pub use listing::{ObjectListing, StorageObject};
