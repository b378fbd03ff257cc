//! Thumbnail gallery.
//!
//! Issues the listing request once on mount and renders either the
//! thumbnails or a status message. Thumbnail clicks are delegated to the
//! container and recognised by their marker attribute.

use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use crate::app::GalleryContext;
use crate::config::{BUCKET_NAME, FOLDER_PREFIX, PHOTO_ALT, dom_ids};
use crate::core::listing::listing_url;
use crate::models::{GalleryContent, ObjectListing};
use crate::utils::{dom, fetch_json};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Thumbnail grid backed by the bucket listing.
#[component]
pub fn PhotoGallery() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided at root");
    let content = ctx.content();

    // Runs once: the effect tracks nothing
    Effect::new(move |_| {
        spawn_local(async move {
            let url = listing_url(BUCKET_NAME, FOLDER_PREFIX);
            ctx.load(fetch_json::<ObjectListing>(&url).await);
        });
    });

    let on_click = move |ev: ev::MouseEvent| {
        if let Some(src) = ev.target().and_then(|target| dom::thumbnail_src(&target)) {
            ctx.open(&src);
        }
    };

    view! {
        <div id=dom_ids::GALLERY class=css::gallery on:click=on_click>
            {move || content.with(|content| match content {
                GalleryContent::Photos(urls) => urls
                    .iter()
                    .cloned()
                    .map(|src| view! { <Thumbnail src=src /> })
                    .collect_view()
                    .into_any(),
                other => view! { <p class=css::message>{other.message()}</p> }.into_any(),
            })}
        </div>
    }
}

/// A single lazily loaded thumbnail, marked as a lightbox trigger.
#[component]
fn Thumbnail(src: String) -> impl IntoView {
    view! {
        <div class=css::item>
            <img src=src.clone() alt=PHOTO_ALT loading="lazy" data-lightbox=src />
        </div>
    }
}
