//! DOM helpers for event handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::config::THUMBNAIL_MARKER;

/// Image URL of a lightbox thumbnail, if `target` is one.
///
/// Any element carrying the marker attribute qualifies, whatever its tag.
pub fn thumbnail_src(target: &EventTarget) -> Option<String> {
    target.dyn_ref::<Element>()?.get_attribute(THUMBNAIL_MARKER)
}

/// Whether the click landed on the listening element itself rather than
/// one of its children.
pub fn is_backdrop_click(ev: &Event) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}
