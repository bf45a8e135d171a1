// web_app/store.rs - Application state and reducers
//
// State is a plain struct; every change goes through `reduce` with an
// `Action`. Views read it through the `Store` handle provided via context.

use crate::web_app::model::{CartItem, Category, PagedResponse, Pagination, Product};

/// Catalog slice: products, categories and the shared pagination block
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductState {
    /// `None` until the first listing arrives
    pub products: Option<Vec<Product>>,
    /// `None` until the category list arrives
    pub categories: Option<Vec<Category>>,
    pub pagination: Pagination,
}

/// Request status slice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub is_loading: bool,
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Number shown on the navbar badge
    pub fn badge_count(&self) -> usize {
        self.items.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub products: ProductState,
    pub errors: ErrorState,
    pub cart: CartState,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    FetchProducts(PagedResponse<Product>),
    FetchCategories(PagedResponse<Category>),
    IsFetching,
    IsSuccess,
    IsError(String),
    AddToCart(CartItem),
    RemoveFromCart(i64),
}

/// Catalog reducer. Listings replace their slice and pagination wholesale.
pub fn reduce_products(state: &mut ProductState, action: &Action) {
    match action {
        Action::FetchProducts(page) => {
            state.products = Some(page.content.clone());
            state.pagination = page.pagination();
        }
        Action::FetchCategories(page) => {
            state.categories = Some(page.content.clone());
            state.pagination = page.pagination();
        }
        _ => {}
    }
}

pub fn reduce_errors(state: &mut ErrorState, action: &Action) {
    match action {
        Action::IsFetching => {
            state.is_loading = true;
        }
        Action::IsSuccess => {
            state.is_loading = false;
            state.error_message = None;
        }
        Action::IsError(message) => {
            state.is_loading = false;
            state.error_message = Some(message.clone());
        }
        _ => {}
    }
}

pub fn reduce_cart(state: &mut CartState, action: &Action) {
    match action {
        Action::AddToCart(item) => {
            match state.items.iter_mut().find(|i| i.product_id == item.product_id) {
                Some(existing) => existing.quantity += item.quantity,
                None => state.items.push(item.clone()),
            }
        }
        Action::RemoveFromCart(product_id) => {
            state.items.retain(|i| i.product_id != *product_id);
        }
        _ => {}
    }
}

/// Root reducer
pub fn reduce(state: &mut AppState, action: Action) {
    tracing::trace!(?action, "dispatch");
    reduce_products(&mut state.products, &action);
    reduce_errors(&mut state.errors, &action);
    reduce_cart(&mut state.cart, &action);
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use handle::Store;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod handle {
    use leptos::prelude::*;

    use super::{reduce, Action, AppState};
    use crate::web_app::model::{CartItem, Category, Pagination, Product};

    /// Reactive handle to the application state, shared through context.
    ///
    /// Selectors are memos so that readers only re-run when their slice
    /// actually changes, not on every dispatch.
    #[derive(Clone, Copy)]
    pub struct Store {
        state: RwSignal<AppState>,
    }

    impl Store {
        pub fn new() -> Self {
            Self {
                state: RwSignal::new(AppState::default()),
            }
        }

        /// Create a store and provide it to the component tree
        pub fn provide() -> Self {
            let store = Self::new();
            provide_context(store);
            store
        }

        /// The store provided by `App`
        pub fn expect() -> Self {
            expect_context::<Store>()
        }

        pub fn dispatch(&self, action: Action) {
            self.state.update(|state| reduce(state, action));
        }

        pub fn products(&self) -> Memo<Option<Vec<Product>>> {
            let state = self.state;
            Memo::new(move |_| state.with(|s| s.products.products.clone()))
        }

        pub fn categories(&self) -> Memo<Option<Vec<Category>>> {
            let state = self.state;
            Memo::new(move |_| state.with(|s| s.products.categories.clone()))
        }

        pub fn pagination(&self) -> Memo<Pagination> {
            let state = self.state;
            Memo::new(move |_| state.with(|s| s.products.pagination.clone()))
        }

        pub fn is_loading(&self) -> Memo<bool> {
            let state = self.state;
            Memo::new(move |_| state.with(|s| s.errors.is_loading))
        }

        pub fn error_message(&self) -> Memo<Option<String>> {
            let state = self.state;
            Memo::new(move |_| state.with(|s| s.errors.error_message.clone()))
        }

        pub fn cart_count(&self) -> Memo<usize> {
            let state = self.state;
            Memo::new(move |_| state.with(|s| s.cart.badge_count()))
        }

        pub fn cart_items(&self) -> Memo<Vec<CartItem>> {
            let state = self.state;
            Memo::new(move |_| state.with(|s| s.cart.items.clone()))
        }
    }

    impl Default for Store {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert!(state.products.products.is_none());
        assert!(state.products.categories.is_none());
        assert!(!state.errors.is_loading);
        assert_eq!(state.cart.badge_count(), 0);
    }

    #[test]
    fn test_is_fetching_keeps_error() {
        let mut state = ErrorState {
            is_loading: false,
            error_message: Some("boom".into()),
        };
        reduce_errors(&mut state, &Action::IsFetching);
        assert!(state.is_loading);
        assert_eq!(state.error_message.as_deref(), Some("boom"));
    }

    #[test]
    fn test_unrelated_action_leaves_catalog_alone() {
        let mut state = ProductState::default();
        reduce_products(&mut state, &Action::IsSuccess);
        assert_eq!(state, ProductState::default());
    }
}
