//! Error types for the gallery.
//!
//! - [`FetchError`] - Network, HTTP and decoding failures of the listing request

use std::fmt;

/// Failure of the object listing request.
///
/// Every variant degrades to the same "error loading" message in the
/// gallery; the variant only matters for the console diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Fetch promise rejected (offline, CORS, DNS, ...)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Response body was not text
    InvalidContent,
    /// Body was not a valid listing document
    JsonParseError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
