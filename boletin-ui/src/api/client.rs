//! Feed Client
//!
//! The single request the page makes: the daily JSON document.

use boletin::feed::{Feed, FeedError, FeedResult, DEFAULT_FEED_URL};
use gloo_net::http::Request;

/// Local storage key holding an optional feed URL override
pub const FEED_URL_KEY: &str = "boletin_feed_url";

/// Get the feed URL from local storage or use the public default
pub fn get_feed_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(FEED_URL_KEY).ok().flatten())
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_FEED_URL.to_string())
}

/// Fetch and decode the feed; no retries
pub async fn fetch_feed() -> FeedResult<Feed> {
    let url = get_feed_url();

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;

    Ok(serde_json::from_str(&text)?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_feed_url_override() {
        let storage = web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap();

        storage.remove_item(FEED_URL_KEY).unwrap();
        assert_eq!(get_feed_url(), DEFAULT_FEED_URL);

        storage
            .set_item(FEED_URL_KEY, " http://localhost:8090/api/v1/feed ")
            .unwrap();
        assert_eq!(get_feed_url(), "http://localhost:8090/api/v1/feed");

        storage.set_item(FEED_URL_KEY, "").unwrap();
        assert_eq!(get_feed_url(), DEFAULT_FEED_URL);

        storage.remove_item(FEED_URL_KEY).unwrap();
    }
}
