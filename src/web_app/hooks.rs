// web_app/hooks.rs - Reactive hooks over the URL and the store

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::web_app::actions::spawn_load_products;
use crate::web_app::filter::derive_request;
use crate::web_app::query::{FilterState, QueryParams};
use crate::web_app::store::Store;

/// Current query parameters, in address bar order
pub fn use_query_params() -> Memo<QueryParams> {
    let location = use_location();
    Memo::new(move |_| QueryParams::parse(&location.search.get()))
}

/// Filter state parsed from the current URL
pub fn use_filter_state() -> Memo<FilterState> {
    let params = use_query_params();
    Memo::new(move |_| params.with(FilterState::from_query))
}

/// Current path, used as the base for every filter navigation
pub fn use_pathname() -> Memo<String> {
    let location = use_location();
    Memo::new(move |_| location.pathname.get())
}

/// Keep the product listing in sync with the URL.
///
/// Re-derives and dispatches a fetch whenever the filter state or the loaded
/// category list changes. The first run may happen before categories arrive,
/// in which case a category filter fetches the unfiltered listing and a second
/// fetch follows once the list is in.
pub fn use_product_filter(store: Store) {
    let filter = use_filter_state();
    let categories = store.categories();

    Effect::new(move |_| {
        let request = categories.with(|c| filter.with(|f| derive_request(f, c.as_deref())));
        tracing::debug!(?request, "filter changed");
        spawn_load_products(store, request);
    });
}
