// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loader, etc.)
// - filter.rs: URL-driven filter bar and pagination
// - product.rs: Product cards, detail view and grid
// - comparison.rs: Two-product comparison tray
// - image_search.rs: Upload and results modals for search by image
// - navbar.rs: Top navigation with cart badge
// - home.rs: Home page banner

pub mod common;
pub mod comparison;
pub mod filter;
pub mod home;
pub mod image_search;
pub mod navbar;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use comparison::ComparePanel;
pub use filter::*;
pub use home::HeroBanner;
pub use image_search::{ImageSearchModal, ImageSearchResults};
pub use navbar::Navbar;
pub use product::*;
