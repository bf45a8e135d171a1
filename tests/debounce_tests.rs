// tests/debounce_tests.rs
// Search box debounce: only the last value of a burst is committed

use std::time::Duration;

use storefront::web_app::debounce::{Debouncer, SEARCH_DEBOUNCE};
use storefront::web_app::query::{keyword_commit, QueryParams, PRODUCTS_PATH};

#[test]
fn test_search_delay_is_700ms() {
    assert_eq!(SEARCH_DEBOUNCE, Duration::from_millis(700));
    assert_eq!(Debouncer::<String>::default().delay(), SEARCH_DEBOUNCE);
}

#[test]
fn test_only_last_keystroke_fires() {
    let mut debouncer = Debouncer::default();
    let tickets: Vec<_> = ["s", "sh", "sho", "shoe"]
        .into_iter()
        .map(|term| debouncer.push(term.to_string()))
        .collect();

    // Every earlier timer expires first and must be ignored
    for ticket in &tickets[..3] {
        assert_eq!(debouncer.fire(*ticket), None);
    }
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.fire(tickets[3]), Some("shoe".to_string()));
    assert!(!debouncer.is_pending());

    // A ticket fires at most once
    assert_eq!(debouncer.fire(tickets[3]), None);
}

#[test]
fn test_clearing_box_does_not_resurrect_old_keyword() {
    let current = QueryParams::parse("keyword=boots&category=Shoes");
    let mut debouncer = Debouncer::default();

    let typed = debouncer.push("boots2".to_string());
    let cleared = debouncer.push(String::new());

    assert_eq!(debouncer.fire(typed), None);
    let committed = debouncer.fire(cleared).unwrap();
    assert_eq!(committed, "");
    assert_eq!(
        keyword_commit(&current, &committed, PRODUCTS_PATH).as_deref(),
        Some("/products?category=Shoes")
    );
}

#[test]
fn test_clear_button_goes_through_debounce() {
    // The clear button pushes "" like any keystroke; only it survives
    let current = QueryParams::parse("keyword=lamp&sortby=desc");
    let mut debouncer = Debouncer::default();

    let typed = debouncer.push("lamps".to_string());
    let cleared = debouncer.push(String::new());
    assert_eq!(debouncer.fire(typed), None);

    let committed = debouncer.fire(cleared).unwrap();
    assert_eq!(
        keyword_commit(&current, &committed, PRODUCTS_PATH).as_deref(),
        Some("/products?sortby=desc")
    );
}

#[test]
fn test_cancel_drops_pending_value() {
    let mut debouncer = Debouncer::default();
    let ticket = debouncer.push("lamp".to_string());
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.fire(ticket), None);

    // Still usable afterwards
    let ticket = debouncer.push("desk".to_string());
    assert_eq!(debouncer.fire(ticket), Some("desk".to_string()));
}

#[test]
fn test_custom_delay() {
    let debouncer: Debouncer<u32> = Debouncer::new(Duration::from_millis(50));
    assert_eq!(debouncer.delay(), Duration::from_millis(50));
    assert!(!debouncer.is_pending());
}
