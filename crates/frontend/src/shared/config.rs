//! Frontend configuration
//!
//! Defaults are embedded as TOML; the API base can be overridden per browser
//! through `localStorage` without rebuilding the bundle.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub receipts: ReceiptsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Explicit API base (e.g. "https://admin.example.com"). Empty = derive from window location.
    #[serde(default)]
    pub base_url: String,
    /// Backend port used when the base is derived from window location
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReceiptsConfig {
    pub page_size: usize,
    pub search_debounce_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[receipts]
page_size = 10
search_debounce_ms = 300
"#;

/// localStorage key holding an API base override
pub const API_BASE_OVERRIDE_KEY: &str = "receipts_admin_api_base";

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let mut config: AppConfig = toml::from_str(contents)?;
        // page_size = 0 would make every page empty
        config.receipts.page_size = config.receipts.page_size.max(1);
        Ok(config)
    }

    /// Apply an API base override, ignoring blank values
    pub fn with_api_base_override(mut self, base: Option<String>) -> Self {
        if let Some(base) = base.map(|b| b.trim().trim_end_matches('/').to_string()) {
            if !base.is_empty() {
                self.api.base_url = base;
            }
        }
        self
    }
}

/// Load configuration: embedded defaults plus the localStorage override
pub fn load_config() -> AppConfig {
    let config = match AppConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid, using hardcoded defaults: {}", e);
            AppConfig {
                api: ApiConfig {
                    base_url: String::new(),
                    port: 3000,
                },
                receipts: ReceiptsConfig {
                    page_size: 10,
                    search_debounce_ms: 300,
                },
            }
        }
    };

    let override_base = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_OVERRIDE_KEY).ok().flatten());

    if let Some(base) = &override_base {
        log::info!("Using API base override from localStorage: {}", base);
    }

    config.with_api_base_override(override_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.receipts.page_size, 10);
        assert_eq!(config.receipts.search_debounce_ms, 300);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let config = AppConfig::from_toml(
            "[api]\nport = 8080\n[receipts]\npage_size = 0\nsearch_debounce_ms = 0\n",
        )
        .unwrap();
        assert_eq!(config.receipts.page_size, 1);
    }

    #[test]
    fn test_api_base_override() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();

        let same = config.clone().with_api_base_override(Some("   ".into()));
        assert_eq!(same.api.base_url, "");

        let overridden = config.with_api_base_override(Some("https://admin.example.com/".into()));
        assert_eq!(overridden.api.base_url, "https://admin.example.com");
    }
}
