// web_app/api/state.rs - Process-wide backend clients
//
// Server functions run outside any handler state, so the clients live in a
// global that `main` fills once at startup.

use std::sync::{Mutex, OnceLock};

use reqwest::Client;

use super::client::CatalogClient;
use super::compare::ComparisonClient;
use super::config::ApiSettings;
use super::errors::ApiError;

static CLIENTS: OnceLock<ApiClients> = OnceLock::new();
static TEST_CLIENTS_OVERRIDE: Mutex<Option<ApiClients>> = Mutex::new(None);

/// Everything the server functions need to reach the backends
#[derive(Clone, Debug)]
pub struct ApiClients {
    pub catalog: CatalogClient,
    pub compare: ComparisonClient,
    /// Handed to the browser, which uploads images itself
    pub image_analyze_url: String,
}

impl ApiClients {
    /// Build all clients on one shared connection pool
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(settings.http_timeout).build()?;
        Ok(Self {
            catalog: CatalogClient::new(http.clone(), &settings.catalog_base_url)?,
            compare: ComparisonClient::new(http, &settings.compare_base_url)?,
            image_analyze_url: settings.image_analyze_url.clone(),
        })
    }
}

/// Initialize the global clients
pub fn init_clients(clients: ApiClients) {
    tracing::info!("Initializing global api clients");
    if CLIENTS.set(clients).is_err() {
        tracing::warn!("Api clients already initialized");
    } else {
        tracing::info!("Global api clients initialized successfully");
    }
}

/// Set a clients override for testing
pub fn set_test_clients(clients: ApiClients) {
    let mut guard = TEST_CLIENTS_OVERRIDE
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    *guard = Some(clients);
}

/// Get the global clients
pub fn get_clients() -> Result<ApiClients, ApiError> {
    {
        let guard = TEST_CLIENTS_OVERRIDE
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        if let Some(ref clients) = *guard {
            return Ok(clients.clone());
        }
    }

    match CLIENTS.get() {
        Some(clients) => Ok(clients.clone()),
        None => {
            tracing::warn!("Global api clients are empty!");
            Err(ApiError::NotConfigured)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_settings() {
        let clients = ApiClients::from_settings(&ApiSettings::default()).unwrap();
        assert!(clients
            .catalog
            .categories_url()
            .as_str()
            .starts_with("http://localhost:8080/api/public/categories"));
        assert!(clients.compare.cache().is_empty());
        assert_eq!(clients.image_analyze_url, "http://localhost:8085/api/v1/analyze");
    }

    #[test]
    fn test_test_override_wins() {
        let settings = ApiSettings {
            catalog_base_url: "http://catalog.test/api".into(),
            ..ApiSettings::default()
        };
        set_test_clients(ApiClients::from_settings(&settings).unwrap());
        let clients = get_clients().unwrap();
        assert!(clients
            .catalog
            .categories_url()
            .as_str()
            .starts_with("http://catalog.test/api/"));
    }
}
