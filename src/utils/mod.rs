//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with JSON decoding
//! - [`dom`] - Thumbnail and backdrop click detection

pub mod dom;
mod fetch;

pub use fetch::fetch_json;
