// web_app/pages/products.rs - Catalog listing page
//
// Everything this page shows is a function of the URL: the filter bar writes
// query parameters, `use_product_filter` turns them into fetches, and the
// store feeds the grid.

use leptos::prelude::*;

use crate::web_app::actions::spawn_load_categories;
use crate::web_app::compare::CompareSelection;
use crate::web_app::components::{
    ComparePanel, ErrorPanel, FilterBar, Loader, Paginations, ProductGrid,
};
use crate::web_app::hooks::{use_filter_state, use_product_filter};
use crate::web_app::store::Store;

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-12 shadow-sm border border-slate-100 text-center">
            <div class="text-6xl mb-4 opacity-20">"🛍"</div>
            <h3 class="text-xl font-bold text-slate-900 mb-2">"No products found"</h3>
            <p class="text-slate-500 max-w-md mx-auto">
                "Try a different keyword or category, or clear the filters."
            </p>
        </div>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let store = Store::expect();
    let filter = use_filter_state();
    let products = store.products();
    let pagination = store.pagination();
    let is_loading = store.is_loading();
    let error = store.error_message();
    let compare = RwSignal::new(CompareSelection::default());

    Effect::new(move |_| spawn_load_categories(store));
    use_product_filter(store);

    let heading = move || filter.with(|f| f.results_heading());
    let subheading = move || {
        let total = pagination.with(|p| p.total_elements);
        filter.with(|f| f.results_subheading(total))
    };
    let listing = Signal::derive(move || products.get().unwrap_or_default());

    view! {
        <div class="min-h-screen bg-slate-50">
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <FilterBar />
                <ComparePanel selection=compare />

                <div class="mb-6">
                    <h1 class="text-3xl font-bold text-slate-900">{heading}</h1>
                    <p class="text-slate-500 mt-1">{subheading}</p>
                </div>

                {move || {
                    if is_loading.get() {
                        view! {
                            <div class="bg-white rounded-2xl p-12 shadow-sm border border-slate-100">
                                <Loader message="Loading products..." />
                            </div>
                        }
                        .into_any()
                    } else if let Some(message) = error.get() {
                        view! { <ErrorPanel error=message /> }.into_any()
                    } else if products.with(|p| p.as_ref().is_some_and(|p| p.is_empty())) {
                        view! { <EmptyState /> }.into_any()
                    } else {
                        view! {
                            <ProductGrid products=listing compare=compare />
                            <Paginations />
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}
