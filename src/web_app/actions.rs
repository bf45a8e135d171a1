// web_app/actions.rs - Async actions that call the server and dispatch results
//
// Each action marks the store as fetching, awaits a server function, then
// dispatches either the data slice plus `IsSuccess`, or `IsError`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::model::ProductRequest;
use crate::web_app::server_fns::{fetch_categories, fetch_products};
use crate::web_app::store::{Action, Store};

/// Message shown in the error panel
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

pub async fn load_products(store: Store, request: ProductRequest) {
    store.dispatch(Action::IsFetching);
    match fetch_products(request).await {
        Ok(page) => {
            store.dispatch(Action::FetchProducts(page));
            store.dispatch(Action::IsSuccess);
        }
        Err(e) => {
            tracing::error!("Product fetch failed: {}", e);
            store.dispatch(Action::IsError(error_message(&e)));
        }
    }
}

pub async fn load_categories(store: Store) {
    store.dispatch(Action::IsFetching);
    match fetch_categories().await {
        Ok(page) => {
            store.dispatch(Action::FetchCategories(page));
            store.dispatch(Action::IsSuccess);
        }
        Err(e) => {
            tracing::error!("Category fetch failed: {}", e);
            store.dispatch(Action::IsError(error_message(&e)));
        }
    }
}

/// Fire-and-forget product fetch. Superseded requests are not cancelled.
pub fn spawn_load_products(store: Store, request: ProductRequest) {
    spawn_local(load_products(store, request));
}

pub fn spawn_load_categories(store: Store) {
    spawn_local(load_categories(store));
}
