// web_app/api/compare.rs - Product comparison service client
//
// Results are cached for a day per product pair. When the service fails, an
// expired entry for the same pair is served instead of the error.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::{check_status, ApiError};
use crate::web_app::model::ProductComparison;

pub const COMPARISON_TTL_HOURS: i64 = 24;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareRequest<'a> {
    product_descriptions: [&'a str; 2],
}

#[derive(Deserialize)]
struct CompareResponse {
    result: String,
}

/// Cache key for a pair: order-sensitive, trimmed and lower-cased
pub fn cache_key(first: &str, second: &str) -> String {
    format!("{}||{}", first.trim(), second.trim()).to_lowercase()
}

/// Parse the service text into points and a verdict.
///
/// The service normally sends the structured JSON document; older deployments
/// send the raw model text with `- Point N:` lines and a `Final Opinion:` line.
pub fn parse_comparison(text: &str) -> ProductComparison {
    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        if let Ok(parsed) = serde_json::from_str::<ProductComparison>(trimmed) {
            return parsed;
        }
    }

    let mut comparison = ProductComparison::default();
    for line in trimmed.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("- Point") {
            let point = match rest.split_once(':') {
                Some((number, body)) if number.trim().chars().all(|c| c.is_ascii_digit()) => {
                    body.trim()
                }
                _ => rest.trim(),
            };
            comparison.comparison_points.push(point.to_string());
        } else if let Some(opinion) = line.strip_prefix("Final Opinion: ") {
            comparison.final_opinion = opinion.to_string();
        }
    }
    comparison
}

#[derive(Clone, Debug, PartialEq)]
pub enum CacheLookup {
    Fresh(ProductComparison),
    Expired(ProductComparison),
    Missing,
}

#[derive(Debug)]
struct CacheEntry {
    value: ProductComparison,
    expires_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ComparisonCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ComparisonCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn lookup(&self, key: &str, now: DateTime<Utc>) -> CacheLookup {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if now <= entry.expires_at => CacheLookup::Fresh(entry.value.clone()),
            Some(entry) => CacheLookup::Expired(entry.value.clone()),
            None => CacheLookup::Missing,
        }
    }

    pub fn insert(&self, key: String, value: ProductComparison, now: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ComparisonCache {
    fn default() -> Self {
        Self::new(Duration::hours(COMPARISON_TTL_HOURS))
    }
}

#[derive(Clone, Debug)]
pub struct ComparisonClient {
    http: Client,
    endpoint: Url,
    cache: Arc<ComparisonCache>,
}

impl ComparisonClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ApiError> {
        Self::with_cache(http, base_url, Arc::new(ComparisonCache::default()))
    }

    pub fn with_cache(
        http: Client,
        base_url: &str,
        cache: Arc<ComparisonCache>,
    ) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&format!("{}/api/compare", base_url.trim_end_matches('/')))?;
        Ok(Self {
            http,
            endpoint,
            cache,
        })
    }

    pub fn cache(&self) -> &ComparisonCache {
        &self.cache
    }

    /// Compare two product descriptions
    pub async fn compare(&self, first: &str, second: &str) -> Result<ProductComparison, ApiError> {
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "Exactly 2 product descriptions are required".to_string(),
            ));
        }

        let key = cache_key(first, second);
        let stale = match self.cache.lookup(&key, Utc::now()) {
            CacheLookup::Fresh(value) => {
                tracing::info!(%key, "returning cached comparison");
                return Ok(value);
            }
            CacheLookup::Expired(value) => Some(value),
            CacheLookup::Missing => None,
        };

        match self.request(first, second).await {
            Ok(value) => {
                self.cache.insert(key, value.clone(), Utc::now());
                Ok(value)
            }
            Err(err) => match stale {
                Some(value) => {
                    tracing::warn!(%key, error = %err, "comparison failed, returning expired cached result");
                    Ok(value)
                }
                None => Err(err),
            },
        }
    }

    async fn request(&self, first: &str, second: &str) -> Result<ProductComparison, ApiError> {
        let body = CompareRequest {
            product_descriptions: [first, second],
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;
        let payload = response.json::<CompareResponse>().await?;
        Ok(parse_comparison(&payload.result))
    }
}
