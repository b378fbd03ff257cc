//! Root application module.
//!
//! Contains the main App component and the [`GalleryContext`] that owns
//! all gallery and lightbox state.

use leptos::prelude::*;

use crate::components::{LightboxModal, PhotoGallery};
use crate::config::BUCKET_NAME;
use crate::core::error::FetchError;
use crate::core::listing::gallery_content;
use crate::core::{Lightbox, LightboxAction};
use crate::models::{GalleryContent, ObjectListing};

// ============================================================================
// GalleryContext
// ============================================================================

/// Gallery state shared by the thumbnail grid and the lightbox.
///
/// Components read the signals but mutate state only through the methods
/// below.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct GalleryContext {
    content: RwSignal<GalleryContent>,
    lightbox: RwSignal<Lightbox>,
}

impl GalleryContext {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(GalleryContent::Loading),
            lightbox: RwSignal::new(Lightbox::new(Vec::new())),
        }
    }

    /// What the gallery container should display.
    pub fn content(&self) -> ReadSignal<GalleryContent> {
        self.content.read_only()
    }

    /// Current lightbox state.
    pub fn lightbox(&self) -> ReadSignal<Lightbox> {
        self.lightbox.read_only()
    }

    /// Apply the outcome of the listing request.
    ///
    /// Rebuilds the lightbox image list from scratch.
    pub fn load(&self, result: Result<ObjectListing, FetchError>) {
        #[cfg(target_arch = "wasm32")]
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Error fetching photos: {}", e).into());
        }

        let content = gallery_content(&result, BUCKET_NAME);
        self.lightbox
            .update(|lb| lb.set_sources(content.sources().to_vec()));
        self.content.set(content);
    }

    /// Open the lightbox on a clicked thumbnail.
    pub fn open(&self, src: &str) {
        let listed = self
            .lightbox
            .try_update(|lb| lb.open(src))
            .unwrap_or(false);

        if !listed {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Opened image is not in the gallery list: {}", src).into(),
            );
        }
    }

    pub fn apply(&self, action: LightboxAction) {
        self.lightbox.update(|lb| lb.apply(action));
    }

    /// Handle a key press; returns `true` if the lightbox consumed it.
    pub fn handle_key(&self, key: &str) -> bool {
        // Hidden lightbox ignores keys; avoid notifying subscribers for nothing.
        if !self.lightbox.with_untracked(|lb| lb.is_visible()) {
            return false;
        }
        self.lightbox
            .try_update(|lb| lb.handle_key(key))
            .unwrap_or(false)
    }
}

/// Root application component.
///
/// Creates and provides the [`GalleryContext`], then renders the thumbnail
/// gallery and the lightbox.
#[component]
pub fn App() -> impl IntoView {
    let ctx = GalleryContext::new();
    provide_context(ctx);

    view! {
        <PhotoGallery />
        <LightboxModal />
    }
}
