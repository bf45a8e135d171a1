// fixtures/responses/categories.rs
//
// Category listing as returned by `GET /public/categories`.
// "Shoes" maps to id 7, which the filter tests rely on.

use crate::fixtures::CatalogFixture;

pub struct CategoriesPage;

impl CatalogFixture for CategoriesPage {
    fn body() -> &'static str {
        r#"{
            "content": [
                { "categoryId": 3, "categoryName": "Electronics" },
                { "categoryId": 5, "categoryName": "Home & Garden" },
                { "categoryId": 7, "categoryName": "Shoes" },
                { "categoryId": 9, "categoryName": "Toys" }
            ],
            "pageNumber": 0,
            "pageSize": 100,
            "totalElements": 4,
            "totalPages": 1,
            "lastPage": true
        }"#
    }
}
