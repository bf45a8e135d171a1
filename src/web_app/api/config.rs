// web_app/api/config.rs - Backend service addresses
//
// Defaults match a local development setup; the server reads overrides from
// the environment (and `.env`) at startup.

use std::time::Duration;

pub const DEFAULT_CATALOG_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_IMAGE_ANALYZE_URL: &str = "http://localhost:8085/api/v1/analyze";
pub const DEFAULT_COMPARE_API_URL: &str = "http://localhost:8090";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base of the catalog REST API, without trailing slash
    pub catalog_base_url: String,
    /// Full address of the image analysis endpoint
    pub image_analyze_url: String,
    /// Base of the product comparison service
    pub compare_base_url: String,
    /// Applied to server-side catalog and comparison calls only
    pub http_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_CATALOG_API_URL.to_string(),
            image_analyze_url: DEFAULT_IMAGE_ANALYZE_URL.to_string(),
            compare_base_url: DEFAULT_COMPARE_API_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ApiSettings {
    /// Build settings from a variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let url = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!(value = %raw, "invalid HTTP_TIMEOUT_SECS, using default");
                    defaults.http_timeout
                }
            },
            None => defaults.http_timeout,
        };

        Self {
            catalog_base_url: url("CATALOG_API_URL", defaults.catalog_base_url),
            image_analyze_url: url("IMAGE_ANALYZE_URL", defaults.image_analyze_url),
            compare_base_url: url("COMPARE_API_URL", defaults.compare_base_url),
            http_timeout,
        }
    }

    /// Load `.env` if present, then read the process environment
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = ApiSettings::from_lookup(|_| None);
        assert_eq!(settings, ApiSettings::default());
        assert_eq!(settings.image_analyze_url, "http://localhost:8085/api/v1/analyze");
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let vars: HashMap<&str, &str> = [
            ("CATALOG_API_URL", "https://shop.example.com/api/"),
            ("HTTP_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();

        let settings = ApiSettings::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(settings.catalog_base_url, "https://shop.example.com/api");
        assert_eq!(settings.http_timeout, Duration::from_secs(5));
        assert_eq!(settings.compare_base_url, DEFAULT_COMPARE_API_URL);
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let settings = ApiSettings::from_lookup(|k| {
            (k == "HTTP_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(settings.http_timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
    }
}
