// web_app/pages/mod.rs - Page components module
//
// - HomePage: banner plus a few featured products
// - ProductsPage: filterable, paginated catalog listing
// - CartPage: cart lines held in the store
// - AboutPage / ContactPage / NotFound: static pages

pub mod cart;
pub mod home;
pub mod info;
pub mod products;

// Re-export page components
pub use cart::CartPage;
pub use home::HomePage;
pub use info::{AboutPage, ContactPage, NotFound};
pub use products::ProductsPage;
