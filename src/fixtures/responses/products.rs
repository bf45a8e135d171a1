// fixtures/responses/products.rs
//
// Product listings as returned by the three `/public/...products` endpoints.
// Prices are sent as JSON numbers; some fields are absent on purpose.

use crate::fixtures::CatalogFixture;

/// Second page of a five-page listing
pub struct ProductsPage;

impl CatalogFixture for ProductsPage {
    fn body() -> &'static str {
        r#"{
            "content": [
                {
                    "productId": 101,
                    "productName": "Trail Runner",
                    "image": "http://localhost:8080/images/trail-runner.png",
                    "description": "Lightweight running shoe with a grippy outsole",
                    "quantity": 12,
                    "price": 89.99,
                    "discount": 10,
                    "specialPrice": 80.99
                },
                {
                    "productId": 102,
                    "productName": "Canvas Sneaker",
                    "description": "Everyday sneaker in washed canvas",
                    "quantity": 0,
                    "price": 45.00,
                    "discount": 0,
                    "specialPrice": 45.00
                },
                {
                    "productId": 103,
                    "productName": "Hiking Boot",
                    "quantity": 4,
                    "price": 129.50
                }
            ],
            "pageNumber": 1,
            "pageSize": 10,
            "totalElements": 43,
            "totalPages": 5,
            "lastPage": false
        }"#
    }
}

/// A search with no hits
pub struct EmptyProductsPage;

impl CatalogFixture for EmptyProductsPage {
    fn body() -> &'static str {
        r#"{
            "content": [],
            "pageNumber": 0,
            "pageSize": 10,
            "totalElements": 0,
            "totalPages": 0,
            "lastPage": true
        }"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::{PagedResponse, Product};
    use rust_decimal::Decimal;

    #[test]
    fn test_products_fixture_parses() {
        let page: PagedResponse<Product> = ProductsPage::parse().unwrap();
        assert_eq!(page.content.len(), 3);
        assert_eq!(page.total_pages, 5);

        let runner = &page.content[0];
        assert_eq!(runner.special_price, Some(Decimal::new(8099, 2)));
        assert!(runner.in_stock());
        assert!(!page.content[1].in_stock());
        assert_eq!(page.content[2].description, None);
    }

    #[test]
    fn test_empty_fixture_parses() {
        let page: PagedResponse<Product> = EmptyProductsPage::parse().unwrap();
        assert!(page.content.is_empty());
        assert!(page.last_page);
    }
}
