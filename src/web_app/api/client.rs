// web_app/api/client.rs - Catalog REST client
//
// One method per listing the storefront needs. The request scope picks the
// endpoint; paging and sort always travel as query parameters.

use reqwest::Client;
use url::Url;

use super::errors::{check_status, ApiError};
use crate::web_app::model::{Category, PagedResponse, Product, ProductRequest, ProductScope};

/// Categories are small; one page covers them all
pub const CATEGORY_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidInput(format!(
                "catalog url cannot be a base: {base_url}"
            )));
        }
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Full URL for a listing request
    pub fn products_url(&self, request: &ProductRequest) -> Url {
        let mut url = match &request.scope {
            ProductScope::All => self.endpoint(&["public", "products"]),
            ProductScope::Keyword(keyword) => {
                self.endpoint(&["public", "products", "keyword", keyword.as_str()])
            }
            ProductScope::Category(id) => {
                let id = id.to_string();
                self.endpoint(&["public", "categories", id.as_str(), "products"])
            }
        };
        url.query_pairs_mut().extend_pairs(request.base_params());
        url
    }

    pub fn categories_url(&self) -> Url {
        let mut url = self.endpoint(&["public", "categories"]);
        url.query_pairs_mut()
            .append_pair("pageNumber", "0")
            .append_pair("pageSize", &CATEGORY_PAGE_SIZE.to_string());
        url
    }

    pub async fn fetch_products(
        &self,
        request: &ProductRequest,
    ) -> Result<PagedResponse<Product>, ApiError> {
        let url = self.products_url(request);
        tracing::debug!(%url, "fetching products");
        let response = check_status(self.http.get(url).send().await?).await?;
        let page = response.json::<PagedResponse<Product>>().await?;
        tracing::debug!(
            count = page.content.len(),
            total = page.total_elements,
            "products received"
        );
        Ok(page)
    }

    pub async fn fetch_categories(&self) -> Result<PagedResponse<Category>, ApiError> {
        let url = self.categories_url();
        tracing::debug!(%url, "fetching categories");
        let response = check_status(self.http.get(url).send().await?).await?;
        Ok(response.json::<PagedResponse<Category>>().await?)
    }
}
