// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn clients() -> Result<crate::web_app::api::state::ApiClients, ServerFnError> {
    use crate::web_app::api::state::ApiClients;

    // First try to get from context (for testing or if manually set)
    if let Some(clients) = use_context::<ApiClients>() {
        return Ok(clients);
    }

    crate::web_app::api::state::get_clients().map_err(|e| {
        tracing::error!("Api clients unavailable: {}", e);
        ServerFnError::new("Backend clients not available")
    })
}

/// Fetch one page of products for a derived listing request
///
/// Sent as JSON because the request carries a data-bearing enum.
#[server(name = FetchProducts, prefix = "/api", input = Json)]
pub async fn fetch_products(
    request: ProductRequest,
) -> Result<PagedResponse<Product>, ServerFnError> {
    tracing::info!(
        "Product request: scope={:?}, page={}, sort={}",
        request.scope,
        request.page_number,
        request.sort_order
    );

    let clients = clients()?;
    let result = clients.catalog.fetch_products(&request).await;

    match &result {
        Ok(page) => tracing::info!(
            "Fetch successful: {} products of {}",
            page.content.len(),
            page.total_elements
        ),
        Err(e) => tracing::error!("Fetch failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to fetch products: {}", e)))
}

/// Fetch the category list used by the filter select
#[server(FetchCategories, "/api")]
pub async fn fetch_categories() -> Result<PagedResponse<Category>, ServerFnError> {
    let clients = clients()?;
    clients
        .catalog
        .fetch_categories()
        .await
        .inspect(|page| tracing::info!("Loaded {} categories", page.content.len()))
        .map_err(|e| {
            tracing::error!("Category fetch failed: {}", e);
            ServerFnError::new(format!("Failed to fetch categories: {}", e))
        })
}

/// Compare two products by their descriptions
#[server(CompareProducts, "/api")]
pub async fn compare_products(
    first: String,
    second: String,
) -> Result<ProductComparison, ServerFnError> {
    tracing::info!("Comparison request: '{}' vs '{}'", first, second);

    let clients = clients()?;
    clients
        .compare
        .compare(&first, &second)
        .await
        .map_err(|e| {
            tracing::error!("Comparison failed: {}", e);
            ServerFnError::new(format!("Comparison failed: {}", e))
        })
}

/// Address the browser uploads search images to
#[server(AnalyzerEndpoint, "/api")]
pub async fn analyzer_endpoint() -> Result<String, ServerFnError> {
    Ok(clients()?.image_analyze_url)
}
