//! Lightbox modal.
//!
//! Shows the selected photo full-size with close/prev/next controls.
//! Closes on the close control, a click on the backdrop or Escape; arrow
//! keys navigate while it is open.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::GalleryContext;
use crate::components::icons as ic;
use crate::config::{PHOTO_ALT, dom_ids};
use crate::core::LightboxAction;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/lightbox/lightbox.module.css");

#[component]
pub fn LightboxModal() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided at root");
    let lightbox = ctx.lightbox();

    // Document-level keyboard shortcuts (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            if ctx.handle_key(&ev.key()) {
                ev.prevent_default();
            }
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }

        // The modal lives as long as the page
        closure.forget();
    }

    let display = move || {
        if lightbox.with(|lb| lb.is_visible()) {
            "block"
        } else {
            "none"
        }
    };

    let on_backdrop = move |ev: ev::MouseEvent| {
        if dom::is_backdrop_click(&ev) {
            ctx.apply(LightboxAction::Close);
        }
    };

    view! {
        <div id=dom_ids::MODAL class=css::modal style:display=display on:click=on_backdrop>
            <span
                class=format!("{} {}", dom_ids::CLOSE_CLASS, css::close)
                title="Close (Esc)"
                on:click=move |_| ctx.apply(LightboxAction::Close)
            >
                <Icon icon=ic::CLOSE />
            </span>
            <img
                id=dom_ids::MODAL_IMAGE
                class=css::image
                alt=PHOTO_ALT
                src=move || lightbox.with(|lb| lb.image().map(str::to_string))
            />
            <a
                class=format!("{} {}", dom_ids::PREV_CLASS, css::prev)
                title="Previous"
                on:click=move |_| ctx.apply(LightboxAction::Prev)
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </a>
            <a
                class=format!("{} {}", dom_ids::NEXT_CLASS, css::next)
                title="Next"
                on:click=move |_| ctx.apply(LightboxAction::Next)
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </a>
        </div>
    }
}
