//! Events Feed Client
//!
//! A single endpoint is consumed: `GET <events-url>` returning the full JSON
//! array of sale events. Any transport error, non-2xx status, or undecodable
//! body counts as a failed fetch.

use gloo_net::http::Request;

use crate::model::SaleEvent;

/// Default events endpoint
pub const DEFAULT_EVENTS_URL: &str = "http://localhost:8080/events";

/// Local-storage key for the endpoint override
const EVENTS_URL_KEY: &str = "salesboard_events_url";

/// Get the events endpoint URL from local storage or use the default
pub fn get_events_url() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(EVENTS_URL_KEY) {
                url
            } else {
                DEFAULT_EVENTS_URL.to_string()
            }
        } else {
            DEFAULT_EVENTS_URL.to_string()
        }
    } else {
        DEFAULT_EVENTS_URL.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the events endpoint URL in local storage
pub fn set_events_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(EVENTS_URL_KEY, url);
        }
    }
}

/// Fetch the current sales-event batch.
pub async fn fetch_events() -> Result<Vec<SaleEvent>, String> {
    let response = Request::get(&get_events_url())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
