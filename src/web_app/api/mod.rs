// web_app/api/mod.rs - Clients for the backend services
//
// The image analyzer is used from the browser as well, so it and its error
// type compile for every target. The catalog and comparison clients are only
// reached through server functions (SSR only).

pub mod config;
pub mod errors;
pub mod image;

#[cfg(feature = "ssr")]
pub mod client;

#[cfg(feature = "ssr")]
pub mod compare;

#[cfg(feature = "ssr")]
pub mod state;

pub use config::ApiSettings;
pub use errors::ApiError;
pub use image::{ImageAnalyzer, ImageUpload};
