// fixtures/mod.rs - Test fixtures module
//
// Canned catalog backend responses. Unit tests parse them directly;
// integration tests serve them from an in-process HTTP server so the clients
// see exactly what the real backend would send.

pub mod responses;

use serde::de::DeserializeOwned;

/// A recorded backend response body
pub trait CatalogFixture {
    /// Raw JSON, exactly as the backend returns it
    fn body() -> &'static str;

    /// The body decoded into a wire type
    fn parse<T: DeserializeOwned>() -> serde_json::Result<T> {
        serde_json::from_str(Self::body())
    }
}
