//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses the configured base when set, otherwise constructs it from the
/// current window location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    if !config.base_url.is_empty() {
        return config.base_url.clone();
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
    join_base(&protocol, &hostname, config.port)
}

fn join_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, "/api/admin/receipts");
/// ```
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    format!("{}{}", api_base(config), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_wins() {
        let config = ApiConfig {
            base_url: "https://admin.example.com".into(),
            port: 3000,
        };
        assert_eq!(
            api_url(&config, "/api/admin/receipts"),
            "https://admin.example.com/api/admin/receipts"
        );
    }

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("http:", "localhost", 3000), "http://localhost:3000");
    }
}
