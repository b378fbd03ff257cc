//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! There is no runtime configuration: the bucket and folder are compiled in.

// =============================================================================
// Storage Configuration
// =============================================================================

/// Cloud Storage bucket holding the photos.
pub const BUCKET_NAME: &str = "jacobvanlennepkade2-1-nl-website";

/// Object name prefix ("folder") listed by the gallery.
pub const FOLDER_PREFIX: &str = "photos/";

/// Base of the Cloud Storage JSON API (object listing).
pub const STORAGE_API_BASE: &str = "https://storage.googleapis.com/storage/v1";

/// Base for public, unauthenticated object URLs.
pub const STORAGE_PUBLIC_BASE: &str = "https://storage.googleapis.com";

// =============================================================================
// DOM Contract
// =============================================================================

/// Element identifiers and class names the page markup and stylesheet rely on.
pub mod dom_ids {
    /// Root element the application mounts into.
    pub const APP_ROOT: &str = "app";
    /// Thumbnail container.
    pub const GALLERY: &str = "photo-gallery";
    /// Lightbox overlay (its backdrop is the element itself).
    pub const MODAL: &str = "gallery-modal";
    /// Full-size image inside the lightbox.
    pub const MODAL_IMAGE: &str = "modal-image";
    pub const CLOSE_CLASS: &str = "close";
    pub const PREV_CLASS: &str = "prev";
    pub const NEXT_CLASS: &str = "next";
}

/// Attribute marking an element as a lightbox thumbnail.
///
/// Its value is the image URL opened when the element is clicked.
pub const THUMBNAIL_MARKER: &str = "data-lightbox";

// =============================================================================
// Text
// =============================================================================

/// Alt text for thumbnails and the lightbox image.
pub const PHOTO_ALT: &str = "Photo from our new home";

/// Messages shown in place of the thumbnails.
pub mod messages {
    pub const LOADING: &str = "Loading photos...";
    pub const NO_PHOTOS: &str = "No photos found in the gallery.";
    pub const LOAD_FAILED: &str = "Sorry, there was an error loading the photos.";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used for the lightbox controls.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
