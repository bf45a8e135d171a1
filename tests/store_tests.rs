// tests/store_tests.rs
// Reducer behaviour over whole action sequences

use storefront::fixtures::responses::{CategoriesPage, EmptyProductsPage, ProductsPage};
use storefront::fixtures::CatalogFixture;
use storefront::web_app::model::*;
use storefront::web_app::store::{reduce, Action, AppState};

fn products_page() -> PagedResponse<Product> {
    ProductsPage::parse().unwrap()
}

#[test]
fn test_listing_replaces_products_and_pagination() {
    let mut state = AppState::default();
    assert!(state.products.products.is_none());

    reduce(&mut state, Action::FetchProducts(products_page()));
    assert_eq!(state.products.products.as_ref().map(Vec::len), Some(3));
    assert_eq!(state.products.pagination.total_elements, 43);
    assert_eq!(state.products.pagination.total_pages, 5);
    assert_eq!(state.products.pagination.page_number, 1);

    // An empty listing is a real result, not "not loaded yet"
    let empty: PagedResponse<Product> = EmptyProductsPage::parse().unwrap();
    reduce(&mut state, Action::FetchProducts(empty.clone()));
    assert_eq!(state.products.products, Some(Vec::new()));
    assert_eq!(state.products.pagination, empty.pagination());
}

#[test]
fn test_categories_do_not_touch_products() {
    let mut state = AppState::default();
    reduce(&mut state, Action::FetchProducts(products_page()));

    let categories: PagedResponse<Category> = CategoriesPage::parse().unwrap();
    reduce(&mut state, Action::FetchCategories(categories));

    assert_eq!(state.products.categories.as_ref().map(Vec::len), Some(4));
    assert_eq!(state.products.products.as_ref().map(Vec::len), Some(3));
}

#[test]
fn test_fetch_lifecycle() {
    let mut state = AppState::default();

    reduce(&mut state, Action::IsFetching);
    assert!(state.errors.is_loading);

    reduce(&mut state, Action::IsError("HTTP error! status: 500".into()));
    assert!(!state.errors.is_loading);
    assert_eq!(
        state.errors.error_message.as_deref(),
        Some("HTTP error! status: 500")
    );

    // A later success clears the previous failure
    reduce(&mut state, Action::IsFetching);
    reduce(&mut state, Action::FetchProducts(products_page()));
    reduce(&mut state, Action::IsSuccess);
    assert!(!state.errors.is_loading);
    assert!(state.errors.error_message.is_none());
}

#[test]
fn test_error_keeps_previous_listing() {
    let mut state = AppState::default();
    reduce(&mut state, Action::FetchProducts(products_page()));
    reduce(&mut state, Action::IsFetching);
    reduce(&mut state, Action::IsError("network down".into()));

    assert_eq!(state.products.products.as_ref().map(Vec::len), Some(3));
}

#[test]
fn test_cart_add_and_remove() {
    let page = products_page();
    let runner = CartItem::from(&page.content[0]);
    let sneaker = CartItem::from(&page.content[1]);

    let mut state = AppState::default();
    reduce(&mut state, Action::AddToCart(runner.clone()));
    reduce(&mut state, Action::AddToCart(runner.clone()));
    reduce(&mut state, Action::AddToCart(sneaker.clone()));

    // Same product twice is one line with quantity 2
    assert_eq!(state.cart.items.len(), 2);
    assert_eq!(state.cart.items[0].quantity, 2);
    assert_eq!(state.cart.badge_count(), 2);

    reduce(&mut state, Action::RemoveFromCart(runner.product_id));
    assert_eq!(state.cart.items, vec![sneaker]);
    assert_eq!(state.cart.badge_count(), 1);

    // Removing something absent is a no-op
    reduce(&mut state, Action::RemoveFromCart(9999));
    assert_eq!(state.cart.badge_count(), 1);
}

#[test]
fn test_cart_is_independent_of_catalog_actions() {
    let mut state = AppState::default();
    reduce(&mut state, Action::AddToCart(CartItem::from(&products_page().content[2])));
    reduce(&mut state, Action::FetchProducts(EmptyProductsPage::parse().unwrap()));
    reduce(&mut state, Action::IsError("boom".into()));

    assert_eq!(state.cart.badge_count(), 1);
}
