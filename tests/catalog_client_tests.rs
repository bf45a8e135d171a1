// tests/catalog_client_tests.rs
// Catalog client and product server functions against a mock backend

mod common;

use actix_web::{web, HttpRequest, HttpResponse};
use common::{spawn_backend, Recorder, TestServer};
use storefront::fixtures::responses::{CategoriesPage, EmptyProductsPage, ProductsPage};
use storefront::fixtures::CatalogFixture;
use storefront::web_app::api::client::CatalogClient;
use storefront::web_app::api::state::{set_test_clients, ApiClients};
use storefront::web_app::api::{ApiError, ApiSettings};
use storefront::web_app::filter::request_for_query;
use storefront::web_app::model::*;

fn json(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(body)
}

async fn products(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req);
    json(ProductsPage::body())
}

async fn category_products(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req);
    json(EmptyProductsPage::body())
}

async fn categories(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req);
    json(CategoriesPage::body())
}

async fn unavailable(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req);
    HttpResponse::ServiceUnavailable().body("catalog is down")
}

async fn garbage(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req);
    HttpResponse::Ok().content_type("application/json").body("{not json")
}

async fn start_catalog() -> anyhow::Result<TestServer> {
    spawn_backend(|cfg: &mut web::ServiceConfig| {
        cfg.route("/api/public/products", web::get().to(products))
            .route("/api/public/products/keyword/{keyword}", web::get().to(products))
            .route("/api/public/categories", web::get().to(categories))
            .route("/api/public/categories/{id}/products", web::get().to(category_products))
            .route("/down/public/products", web::get().to(unavailable))
            .route("/garbage/public/products", web::get().to(garbage));
    })
    .await
}

fn client(server: &TestServer, prefix: &str) -> CatalogClient {
    CatalogClient::new(reqwest::Client::new(), &server.url(prefix)).unwrap()
}

#[actix_web::test]
async fn test_unfiltered_listing() -> anyhow::Result<()> {
    let server = start_catalog().await?;
    let catalog = client(&server, "/api");

    let page = catalog.fetch_products(&ProductRequest::default()).await?;
    assert_eq!(page.content.len(), 3);
    assert_eq!(page.total_pages, 5);
    assert_eq!(
        server.recorder.last().as_deref(),
        Some("/api/public/products?pageNumber=0&pageSize=10&sortBy=price&sortOrder=asc")
    );

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_keyword_listing_uses_keyword_path() -> anyhow::Result<()> {
    let server = start_catalog().await?;
    let catalog = client(&server, "/api");

    let request = request_for_query("keyword=red+shirt&category=Shoes&sortby=desc", None);
    catalog.fetch_products(&request).await?;

    assert_eq!(
        server.recorder.last().as_deref(),
        Some("/api/public/products/keyword/red%20shirt?pageNumber=0&pageSize=10&sortBy=price&sortOrder=desc")
    );

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_category_listing_after_resolution() -> anyhow::Result<()> {
    let server = start_catalog().await?;
    let catalog = client(&server, "/api");

    let categories = catalog.fetch_categories().await?;
    assert_eq!(
        server.recorder.last().as_deref(),
        Some("/api/public/categories?pageNumber=0&pageSize=100")
    );

    let request = request_for_query("page=3&sortby=desc&category=Shoes", Some(categories.content.as_slice()));
    assert_eq!(request.category_id(), Some(7));

    let page = catalog.fetch_products(&request).await?;
    assert!(page.content.is_empty());
    assert_eq!(
        server.recorder.last().as_deref(),
        Some("/api/public/categories/7/products?pageNumber=2&pageSize=10&sortBy=price&sortOrder=desc")
    );

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_unknown_category_falls_back_to_unfiltered() -> anyhow::Result<()> {
    let server = start_catalog().await?;
    let catalog = client(&server, "/api");

    let categories = catalog.fetch_categories().await?;
    let request = request_for_query("category=Hats", Some(categories.content.as_slice()));
    catalog.fetch_products(&request).await?;

    assert_eq!(
        server.recorder.last().as_deref(),
        Some("/api/public/products?pageNumber=0&pageSize=10&sortBy=price&sortOrder=asc")
    );

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_error_status_is_reported() -> anyhow::Result<()> {
    let server = start_catalog().await?;
    let catalog = client(&server, "/down");

    let err = catalog
        .fetch_products(&ProductRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    match err {
        ApiError::Status { body, .. } => assert_eq!(body, "catalog is down"),
        other => panic!("expected status error, got {other:?}"),
    }

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_malformed_body_is_an_error() -> anyhow::Result<()> {
    let server = start_catalog().await?;
    let catalog = client(&server, "/garbage");

    let result = catalog.fetch_products(&ProductRequest::default()).await;
    assert!(result.is_err());

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_server_functions_use_shared_clients() -> anyhow::Result<()> {
    use storefront::web_app::server_fns::{fetch_categories, fetch_products};

    let server = start_catalog().await?;
    let settings = ApiSettings {
        catalog_base_url: server.url("/api"),
        ..ApiSettings::default()
    };
    set_test_clients(ApiClients::from_settings(&settings)?);

    println!("Testing fetch_categories...");
    let categories = fetch_categories()
        .await
        .map_err(|e| anyhow::anyhow!("fetch_categories failed: {}", e))?;
    assert_eq!(categories.content.len(), 4);

    println!("Testing fetch_products...");
    let request = ProductRequest {
        scope: ProductScope::Keyword("boot".into()),
        ..ProductRequest::default()
    };
    let page = fetch_products(request)
        .await
        .map_err(|e| anyhow::anyhow!("fetch_products failed: {}", e))?;
    assert_eq!(page.content[0].product_name, "Trail Runner");
    assert!(server
        .recorder
        .requests()
        .iter()
        .any(|uri| uri.starts_with("/api/public/products/keyword/boot?")));

    server.stop().await;
    Ok(())
}
