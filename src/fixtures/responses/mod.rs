// fixtures/responses/mod.rs
//
// One fixture per backend endpoint shape.

pub mod categories;
pub mod products;

pub use categories::CategoriesPage;
pub use products::{EmptyProductsPage, ProductsPage};
