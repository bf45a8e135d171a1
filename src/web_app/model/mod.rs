// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON documents exchanged with the catalog backend,
// the image analysis service and the comparison service. Wire names are
// camelCase to match the backend.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Page size used for every product listing request
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Field the backend sorts listings by
pub const DEFAULT_SORT_BY: &str = "price";

/// Price sort direction (`sortby` in the URL, `sortOrder` on the wire)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Label shown next to the price sort button
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Low to High",
            SortOrder::Desc => "High to Low",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unsupported sort order: {other}")),
        }
    }
}

/// Product category as returned by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
}

/// Product record rendered by the cards.
///
/// Only `product_id` is interpreted by the filter pipeline; everything else is
/// display data and may be missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub discount: Option<Decimal>,
    #[serde(default)]
    pub special_price: Option<Decimal>,
}

impl Product {
    /// Price the customer pays: the special price when present, else the list price
    pub fn effective_price(&self) -> Option<Decimal> {
        self.special_price.or(self.price)
    }

    pub fn in_stock(&self) -> bool {
        self.quantity.map(|q| q > 0).unwrap_or(false)
    }

    /// Short text handed to the comparison service
    pub fn comparison_text(&self) -> String {
        match &self.description {
            Some(desc) if !desc.trim().is_empty() => {
                format!("{}: {}", self.product_name, desc.trim())
            }
            _ => self.product_name.clone(),
        }
    }
}

/// Pagination block shared by the product and category slices
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub last_page: bool,
}

/// Paged envelope returned by every listing endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub last_page: bool,
}

impl<T> PagedResponse<T> {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last_page: self.last_page,
        }
    }
}

/// Which listing a request targets. Exactly one scope per request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductScope {
    #[default]
    All,
    Keyword(String),
    Category(i64),
}

/// Backend listing request derived from the URL
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// 0-based page index
    pub page_number: u32,
    pub page_size: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub scope: ProductScope,
}

impl Default for ProductRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::Asc,
            scope: ProductScope::All,
        }
    }
}

impl ProductRequest {
    pub fn keyword(&self) -> Option<&str> {
        match &self.scope {
            ProductScope::Keyword(k) => Some(k.as_str()),
            _ => None,
        }
    }

    pub fn category_id(&self) -> Option<i64> {
        match self.scope {
            ProductScope::Category(id) => Some(id),
            _ => None,
        }
    }

    /// Paging and sort parameters, in the order the backend documents them
    pub fn base_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pageNumber", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortOrder", self.sort_order.to_string()),
        ]
    }

    /// Paging/sort parameters as a query string, without scope parameters
    pub fn base_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.base_params())
            .finish()
    }
}

/// Response of the image analysis endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Any other fields the analyzer sends, kept for the raw view
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Structured outcome of comparing two products
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductComparison {
    #[serde(default)]
    pub comparison_points: Vec<String>,
    #[serde(default)]
    pub final_opinion: String,
}

/// A line in the shopping cart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: u32,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name.clone(),
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_default() {
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("DESC".parse::<SortOrder>().is_err());
        assert!("price".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    #[test]
    fn test_product_deserializes_with_missing_display_fields() {
        let product: Product = serde_json::from_str(r#"{"productId": 12}"#).unwrap();
        assert_eq!(product.product_id, 12);
        assert_eq!(product.product_name, "");
        assert!(product.price.is_none());
        assert!(!product.in_stock());
    }

    #[test]
    fn test_effective_price_prefers_special_price() {
        let product: Product = serde_json::from_str(
            r#"{"productId": 1, "productName": "Mug", "price": 20.0, "specialPrice": 15.5}"#,
        )
        .unwrap();
        assert_eq!(product.effective_price(), Some(Decimal::new(155, 1)));
    }

    #[test]
    fn test_paged_response_pagination_block() {
        let page: PagedResponse<Category> = serde_json::from_str(
            r#"{
                "content": [{"categoryId": 7, "categoryName": "Shoes"}],
                "pageNumber": 0, "pageSize": 100, "totalElements": 1,
                "totalPages": 1, "lastPage": true
            }"#,
        )
        .unwrap();

        assert_eq!(page.content.len(), 1);
        assert_eq!(
            page.pagination(),
            Pagination {
                page_number: 0,
                page_size: 100,
                total_elements: 1,
                total_pages: 1,
                last_page: true,
            }
        );
    }

    #[test]
    fn test_base_query_string_order() {
        let request = ProductRequest {
            page_number: 2,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        assert_eq!(
            request.base_query_string(),
            "pageNumber=2&pageSize=10&sortBy=price&sortOrder=desc"
        );
    }

    #[test]
    fn test_image_analysis_keeps_extra_fields() {
        let analysis: ImageAnalysis = serde_json::from_str(
            r#"{"category": "shoes", "confidence": 0.87, "labels": ["sneaker"]}"#,
        )
        .unwrap();
        assert_eq!(analysis.category, "shoes");
        assert_eq!(analysis.confidence, Some(0.87));
        assert!(analysis.extra.contains_key("labels"));
    }

    #[test]
    fn test_comparison_text_falls_back_to_name() {
        let product: Product =
            serde_json::from_str(r#"{"productId": 3, "productName": "Laptop", "description": "  "}"#)
                .unwrap();
        assert_eq!(product.comparison_text(), "Laptop");
    }
}
