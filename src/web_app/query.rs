// web_app/query.rs - URL query string as the filter state
//
// The address bar is the single source of truth for paging, sorting, search
// and category filtering. `FilterState` is parsed from it on every change and
// the helpers below produce the next URL for each user action.

use url::form_urlencoded;

use crate::web_app::model::SortOrder;

/// Query parameter names (public, bookmarkable)
pub const PARAM_PAGE: &str = "page";
pub const PARAM_SORT: &str = "sortby";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_KEYWORD: &str = "keyword";

/// Value of the category select that means "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Path of the product listing page
pub const PRODUCTS_PATH: &str = "/products";

/// Ordered list of query parameters, mirroring `URLSearchParams`.
///
/// Order is preserved so that rewriting one parameter does not shuffle the
/// others in the address bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every value for `key` with a single one, keeping its position
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize without the leading `?`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// `path` alone when empty, otherwise `path?query`
    pub fn href(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

/// Filter state derived from the URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// `None` means all categories
    pub category: Option<String>,
    pub sort_order: SortOrder,
    pub keyword: Option<String>,
    /// 1-based
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            sort_order: SortOrder::Asc,
            keyword: None,
            page: 1,
        }
    }
}

impl FilterState {
    /// Read the filter from query parameters, applying defaults.
    ///
    /// Unknown sort values fall back to ascending, missing or unparsable pages
    /// to 1, empty strings and the "all" category to `None`.
    pub fn from_query(params: &QueryParams) -> Self {
        let page = params
            .get(PARAM_PAGE)
            .and_then(|p| p.trim().parse::<u32>().ok())
            .map(|p| p.max(1))
            .unwrap_or(1);

        let sort_order = params
            .get(PARAM_SORT)
            .and_then(|s| s.parse::<SortOrder>().ok())
            .unwrap_or_default();

        let category = params
            .get(PARAM_CATEGORY)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
            .map(str::to_string);

        let keyword = params
            .get(PARAM_KEYWORD)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Self {
            category,
            sort_order,
            keyword,
            page,
        }
    }

    /// Canonical query parameters for this state; defaults are omitted
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(category) = &self.category {
            params.set(PARAM_CATEGORY, category.clone());
        }
        if let Some(keyword) = &self.keyword {
            params.set(PARAM_KEYWORD, keyword.clone());
        }
        if self.sort_order != SortOrder::Asc {
            params.set(PARAM_SORT, self.sort_order.as_str());
        }
        if self.page > 1 {
            params.set(PARAM_PAGE, self.page.to_string());
        }
        params
    }

    /// Keyword with surrounding whitespace removed, if anything is left
    pub fn active_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Whether any control differs from its default (drives "Clear All")
    pub fn has_active_filters(&self) -> bool {
        self.active_keyword().is_some()
            || self.category.is_some()
            || self.sort_order != SortOrder::Asc
    }

    /// Value the category select should show
    pub fn category_or_all(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    /// Heading above the product grid
    pub fn results_heading(&self) -> String {
        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) {
            return format!("Search results for \"{}\"", keyword);
        }
        if let Some(category) = &self.category {
            return format!("Products in \"{}\"", category);
        }
        "Product Collection".to_string()
    }

    /// Sub-heading with the total number of matches
    pub fn results_subheading(&self, total: u64) -> String {
        if self.keyword.as_deref().is_some_and(|k| !k.is_empty()) {
            return format!("Found {} products matching your search", total);
        }
        if self.category.is_some() {
            return format!("Found {} products in this category", total);
        }
        format!("Showing {} products", total)
    }
}

/// Next URL after the search box settles on `term`.
///
/// A non-empty term sets the trimmed keyword and returns to page 1; an empty
/// one removes the keyword parameter entirely.
pub fn apply_keyword(current: &QueryParams, term: &str, path: &str) -> String {
    let mut next = current.clone();
    let term = term.trim();
    if term.is_empty() {
        next.remove(PARAM_KEYWORD);
    } else {
        next.set(PARAM_KEYWORD, term);
        next.remove(PARAM_PAGE);
    }
    next.href(path)
}

/// Next URL after choosing a category. "all" returns to the bare path.
pub fn select_category(category: &str, path: &str) -> String {
    if category == ALL_CATEGORIES || category.is_empty() {
        path.to_string()
    } else {
        QueryParams::from_pairs([(PARAM_CATEGORY, category)]).href(path)
    }
}

/// Next URL after flipping the price sort; pagination is always cleared
pub fn toggle_sort(current: &QueryParams, path: &str) -> String {
    let mut next = current.clone();
    let order = FilterState::from_query(current).sort_order.toggled();
    next.set(PARAM_SORT, order.as_str());
    next.remove(PARAM_PAGE);
    next.href(path)
}

/// Next URL for a 1-based page, keeping every other parameter
pub fn with_page(current: &QueryParams, page: u32, path: &str) -> String {
    let mut next = current.clone();
    if page <= 1 {
        next.remove(PARAM_PAGE);
    } else {
        next.set(PARAM_PAGE, page.to_string());
    }
    next.href(path)
}

/// Targets of the Previous and Next links, 1-based and kept inside
/// `1..=total`. A page taken straight from the URL may be anything up to
/// `u32::MAX`, so nothing here may overflow.
pub fn adjacent_pages(current: u32, total: u32) -> (u32, u32) {
    let last = total.max(1);
    let current = current.clamp(1, last);
    (current.saturating_sub(1).max(1), current.saturating_add(1).min(last))
}

/// Next URL once the search box settles on `term`, or `None` when the URL
/// already carries that keyword. Clearing the box commits `""`.
pub fn keyword_commit(current: &QueryParams, term: &str, path: &str) -> Option<String> {
    let existing = current.get(PARAM_KEYWORD).unwrap_or_default();
    if term.trim() == existing.trim() {
        return None;
    }
    Some(apply_keyword(current, term, path))
}

/// Next URL after "Clear All"
pub fn clear_filters(path: &str) -> String {
    path.to_string()
}

/// Listing URL for a category detected by the image analyzer
pub fn browse_category_href(category: &str) -> String {
    QueryParams::from_pairs([(PARAM_CATEGORY, category)]).href(PRODUCTS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_question_mark_and_decodes() {
        let params = QueryParams::parse("?keyword=red+shirt&category=Home%20%26%20Garden");
        assert_eq!(params.get(PARAM_KEYWORD), Some("red shirt"));
        assert_eq!(params.get(PARAM_CATEGORY), Some("Home & Garden"));
    }

    #[test]
    fn test_set_keeps_position_and_dedupes() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.set("a", "9");
        assert_eq!(params.to_query_string(), "a=9&b=2");
    }

    #[test]
    fn test_href_without_params_is_bare_path() {
        assert_eq!(QueryParams::new().href("/products"), "/products");
    }

    #[test]
    fn test_defaults() {
        let state = FilterState::from_query(&QueryParams::new());
        assert_eq!(state, FilterState::default());
        assert_eq!(state.page, 1);
        assert_eq!(state.category_or_all(), ALL_CATEGORIES);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let state = FilterState::from_query(&QueryParams::parse("page=abc&sortby=sideways"));
        assert_eq!(state.page, 1);
        assert_eq!(state.sort_order, SortOrder::Asc);

        let state = FilterState::from_query(&QueryParams::parse("page=0"));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_all_category_is_none() {
        let state = FilterState::from_query(&QueryParams::parse("category=all"));
        assert!(state.category.is_none());
    }

    #[test]
    fn test_whitespace_keyword_is_not_active() {
        let state = FilterState::from_query(&QueryParams::parse("keyword=%20%20"));
        assert!(state.active_keyword().is_none());
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_headings() {
        let state = FilterState {
            keyword: Some("lamp".into()),
            category: Some("Home".into()),
            ..Default::default()
        };
        assert_eq!(state.results_heading(), "Search results for \"lamp\"");
        assert_eq!(state.results_subheading(4), "Found 4 products matching your search");

        let state = FilterState {
            category: Some("Home".into()),
            ..Default::default()
        };
        assert_eq!(state.results_heading(), "Products in \"Home\"");
        assert_eq!(state.results_subheading(2), "Found 2 products in this category");

        let state = FilterState::default();
        assert_eq!(state.results_heading(), "Product Collection");
        assert_eq!(state.results_subheading(0), "Showing 0 products");
    }
}
