// Catalog probe
//
// Checks that the catalog backend answers and shows what request a given
// listing URL query would produce.
//
//   catalog_probe "page=3&sortby=desc&category=Shoes"

use anyhow::{Context, Result};
use storefront::web_app::api::state::ApiClients;
use storefront::web_app::api::ApiSettings;
use storefront::web_app::filter::request_for_query;

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let query = std::env::args().nth(1).unwrap_or_default();
    let settings = ApiSettings::from_env();
    let clients = ApiClients::from_settings(&settings)?;

    println!("Catalog: {}", settings.catalog_base_url);

    let categories = clients
        .catalog
        .fetch_categories()
        .await
        .context("category listing failed")?;
    println!("✓ {} categories", categories.content.len());
    for category in &categories.content {
        println!("  - {} ({})", category.category_name, category.category_id);
    }

    let request = request_for_query(&query, Some(categories.content.as_slice()));
    println!("\nQuery:   {:?}", query);
    println!("Request: {:?}", request);
    println!("URL:     {}", clients.catalog.products_url(&request));

    let page = clients
        .catalog
        .fetch_products(&request)
        .await
        .context("product listing failed")?;
    println!(
        "✓ {} products on page {} of {} ({} total)",
        page.content.len(),
        page.page_number + 1,
        page.total_pages,
        page.total_elements
    );
    for product in page.content.iter().take(5) {
        println!("  - [{}] {}", product.product_id, product.product_name);
    }

    Ok(())
}
