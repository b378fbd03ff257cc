//! Core gallery logic, independent of the DOM.
//!
//! This module provides:
//! - [`listing`] URL construction, photo filtering and result mapping
//! - [`Lightbox`] modal navigation state
//! - [`error::FetchError`] listing request failures

pub mod error;
pub mod lightbox;
pub mod listing;

pub use lightbox::{Lightbox, LightboxAction};
