//! Network fetching through the browser Fetch API.
//!
//! A single request, no timeout and no retry: a request that never
//! settles leaves the caller waiting.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(url).await?;
    parse_json(&text)
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch text from a URL with an unauthenticated CORS GET.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::NetworkError(js_error_message(&e)))?;

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}

/// Best-effort description of a rejected promise value.
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObjectListing;

    #[test]
    fn test_parse_listing() {
        let listing: ObjectListing =
            parse_json(r#"{"items": [{"name": "photos/a.jpg", "size": "1"}]}"#).unwrap();
        assert_eq!(listing.items().len(), 1);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_json::<ObjectListing>("<html>").unwrap_err();
        assert!(matches!(err, FetchError::JsonParseError(_)));
    }
}
