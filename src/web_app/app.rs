// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the shared store, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::Navbar;
use crate::web_app::pages::{AboutPage, CartPage, ContactPage, HomePage, NotFound, ProductsPage};
use crate::web_app::store::Store;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The application store, provided to every page
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    Store::provide();

    view! {
        <Title text="E-Shop" />
        <Meta name="description" content="Browse, search and compare products, or search by image" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/storefront.css" />

        <Router>
            <Navbar />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}
