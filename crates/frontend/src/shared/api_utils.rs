//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing backend URLs.

use super::config::config;

/// Get the base URL for backend requests
///
/// Uses `[api] base_url` when configured. Otherwise the URL is built from
/// the current window location on the configured backend port.
///
/// # Returns
/// - Backend base URL like "http://localhost:5000"
/// - Empty string if no base URL is configured and window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.trim().is_empty() {
        return api.base_url.trim().trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname, api.port)
}

/// `protocol` is as reported by `Location::protocol`, trailing colon included
pub fn base_from_location(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
