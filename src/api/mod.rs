//! HTTP API Client
//!
//! Communication with the sales-event feed.

pub mod client;

pub use client::{fetch_events, get_events_url, set_events_url, DEFAULT_EVENTS_URL};
