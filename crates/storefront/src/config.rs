//! Storefront configuration.
//!
//! [`StorefrontConfig`] is a plain struct. The browser build uses
//! [`StorefrontConfig::default`]; the preview binary layers environment
//! variables on top with [`StorefrontConfig::from_env`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_catalog::GridLayout;
use storefront_catalog::layout::{LOAD_MORE_THRESHOLD, NARROW_VIEWPORT_PX, ROWS_PER_PAGE};
use storefront_observability::LogFormat;

pub const ENV_SERVER_URL: &str = "STOREFRONT_SERVER_URL";
pub const ENV_LOG_LEVEL: &str = "STOREFRONT_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "STOREFRONT_LOG_FORMAT";
pub const ENV_VIEWPORT_WIDTH: &str = "STOREFRONT_VIEWPORT_WIDTH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// All runtime settings of the listing page.
///
/// | Field                  | Default                  |
/// |------------------------|--------------------------|
/// | server_url             | `http://localhost:5000`  |
/// | narrow_breakpoint_px   | 768                      |
/// | rows_per_page          | 3                        |
/// | load_more_threshold    | 6                        |
/// | log_level              | `info`                   |
/// | log_format             | text                     |
/// | preview_viewport_px    | 1280                     |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Base URL of the catalog server, without trailing slash.
    pub server_url: String,
    pub narrow_breakpoint_px: u32,
    pub rows_per_page: usize,
    pub load_more_threshold: usize,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Viewport width assumed by the preview binary (no real window there).
    pub preview_viewport_px: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            narrow_breakpoint_px: NARROW_VIEWPORT_PX,
            rows_per_page: ROWS_PER_PAGE,
            load_more_threshold: LOAD_MORE_THRESHOLD,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            preview_viewport_px: 1280.0,
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by `STOREFRONT_*` environment variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_SERVER_URL) {
            let url = url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(ConfigError::Invalid {
                    var: ENV_SERVER_URL,
                    value: url,
                });
            }
            config.server_url = url;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level;
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = LogFormat::parse(&raw).ok_or(ConfigError::Invalid {
                var: ENV_LOG_FORMAT,
                value: raw,
            })?;
        }

        if let Some(raw) = lookup(ENV_VIEWPORT_WIDTH) {
            config.preview_viewport_px = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w > 0.0)
                .ok_or(ConfigError::Invalid {
                    var: ENV_VIEWPORT_WIDTH,
                    value: raw,
                })?;
        }

        Ok(config)
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.server_url.trim_end_matches('/'))
    }

    pub fn layout_for(&self, viewport_width_px: f64) -> GridLayout {
        GridLayout::for_viewport(viewport_width_px, self.narrow_breakpoint_px, self.rows_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_listing_page() {
        let cfg = StorefrontConfig::default();
        assert_eq!(cfg.products_url(), "http://localhost:5000/products");
        assert_eq!(cfg.load_more_threshold, 6);
        assert_eq!(cfg.layout_for(1024.0).page_capacity(), 9);
        assert_eq!(cfg.layout_for(600.0).page_capacity(), 6);
    }

    #[test]
    fn env_overrides_apply() {
        let cfg = StorefrontConfig::from_lookup(lookup(&[
            (ENV_SERVER_URL, "https://shop.example.com/"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_VIEWPORT_WIDTH, "375"),
        ]))
        .unwrap();

        assert_eq!(cfg.products_url(), "https://shop.example.com/products");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.preview_viewport_px, 375.0);
    }

    #[test]
    fn rejects_bad_values() {
        let err = StorefrontConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: ENV_LOG_FORMAT,
                value: "xml".to_string()
            }
        );
        assert!(StorefrontConfig::from_lookup(lookup(&[(ENV_VIEWPORT_WIDTH, "-1")])).is_err());
        assert!(StorefrontConfig::from_lookup(lookup(&[(ENV_SERVER_URL, " / ")])).is_err());
    }

    #[test]
    fn deserializes_partial_config() {
        let cfg: StorefrontConfig =
            serde_json::from_str(r#"{"server_url":"http://api:8080","rows_per_page":4}"#).unwrap();
        assert_eq!(cfg.rows_per_page, 4);
        assert_eq!(cfg.narrow_breakpoint_px, 768);
    }
}
