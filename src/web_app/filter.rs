// web_app/filter.rs - Translation of the URL filter into a backend request
//
// Priority: a non-empty keyword wins, then a category that resolves against
// the loaded category list, then the unfiltered listing.

use crate::web_app::model::{
    Category, ProductRequest, ProductScope, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY,
};
use crate::web_app::query::{FilterState, QueryParams};

/// Look up a category id by exact name
pub fn resolve_category(categories: &[Category], name: &str) -> Option<i64> {
    categories
        .iter()
        .find(|c| c.category_name == name)
        .map(|c| c.category_id)
}

/// Derive the single backend request for a filter state.
///
/// `categories` is `None` until the category list has loaded. A category
/// that cannot be resolved (including before the list arrives) falls back to
/// the unfiltered listing without surfacing an error.
pub fn derive_request(filter: &FilterState, categories: Option<&[Category]>) -> ProductRequest {
    let scope = if let Some(keyword) = filter.active_keyword() {
        tracing::debug!(keyword, "searching by keyword");
        ProductScope::Keyword(keyword.to_string())
    } else if let (Some(name), Some(categories)) = (filter.category.as_deref(), categories) {
        match resolve_category(categories, name) {
            Some(id) => {
                tracing::debug!(category_id = id, "searching by category");
                ProductScope::Category(id)
            }
            None => {
                tracing::debug!(category = name, "category not found, fetching all products");
                ProductScope::All
            }
        }
    } else {
        ProductScope::All
    };

    ProductRequest {
        page_number: filter.page.saturating_sub(1),
        page_size: DEFAULT_PAGE_SIZE,
        sort_by: DEFAULT_SORT_BY.to_string(),
        sort_order: filter.sort_order,
        scope,
    }
}

/// Parse a raw query string and derive its request in one step
pub fn request_for_query(query: &str, categories: Option<&[Category]>) -> ProductRequest {
    derive_request(&FilterState::from_query(&QueryParams::parse(query)), categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::SortOrder;

    fn categories() -> Vec<Category> {
        vec![
            Category { category_id: 7, category_name: "Shoes".into() },
            Category { category_id: 9, category_name: "Books".into() },
        ]
    }

    #[test]
    fn test_empty_query_is_unfiltered_first_page() {
        let request = request_for_query("", Some(categories().as_slice()));
        assert_eq!(request, ProductRequest::default());
    }

    #[test]
    fn test_category_resolution_is_exact() {
        assert_eq!(resolve_category(&categories(), "Shoes"), Some(7));
        assert_eq!(resolve_category(&categories(), "shoes"), None);
    }

    #[test]
    fn test_category_before_list_loads_is_unfiltered() {
        let request = request_for_query("category=Shoes", None);
        assert_eq!(request.scope, ProductScope::All);
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let request = request_for_query("keyword=%20lamp%20", None);
        assert_eq!(request.keyword(), Some("lamp"));
    }

    #[test]
    fn test_page_is_zero_based() {
        let request = request_for_query("page=5&sortby=desc", None);
        assert_eq!(request.page_number, 4);
        assert_eq!(request.sort_order, SortOrder::Desc);
    }
}
