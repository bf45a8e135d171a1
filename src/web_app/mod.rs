// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Shared wire types (used by both client and server)
// - query, filter, debounce, store, image_search, compare: plain logic with
//   no framework dependency, compiled for every target
// - api/: Backend HTTP clients and configuration (image upload on all
//   targets, catalog and comparison clients SSR only)
// - server_fns/: Server function declarations (both client and server)
// - actions, hooks: glue between server functions, the URL and the store
// - components/, pages/, app.rs: the UI (both SSR and hydrate)

pub mod model;

pub mod compare;
pub mod debounce;
pub mod filter;
pub mod image_search;
pub mod query;
pub mod store;

pub mod api;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod actions;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod hooks;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
