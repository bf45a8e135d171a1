// web_app/compare.rs - Picking two products to compare

use crate::web_app::model::Product;

/// Up to two products picked from the grid, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompareSelection {
    picked: Vec<Product>,
}

impl CompareSelection {
    pub const CAPACITY: usize = 2;

    /// Add a product, or remove it if already picked. A third pick drops the oldest.
    pub fn toggle(&mut self, product: Product) {
        if let Some(idx) = self.position(product.product_id) {
            self.picked.remove(idx);
            return;
        }
        if self.picked.len() == Self::CAPACITY {
            self.picked.remove(0);
        }
        self.picked.push(product);
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.position(product_id).is_some()
    }

    fn position(&self, product_id: i64) -> Option<usize> {
        self.picked.iter().position(|p| p.product_id == product_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.picked
    }

    /// Descriptions to send once exactly two products are picked
    pub fn pair(&self) -> Option<(String, String)> {
        match self.picked.as_slice() {
            [first, second] => Some((first.comparison_text(), second.comparison_text())),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.picked.clear();
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64) -> Product {
        serde_json::from_value(serde_json::json!({
            "productId": id,
            "productName": format!("Product {id}"),
        }))
        .unwrap()
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = CompareSelection::default();
        selection.toggle(product(1));
        assert!(selection.contains(1));
        selection.toggle(product(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_third_pick_drops_oldest() {
        let mut selection = CompareSelection::default();
        selection.toggle(product(1));
        selection.toggle(product(2));
        selection.toggle(product(3));
        let ids: Vec<i64> = selection.products().iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_pair_requires_two() {
        let mut selection = CompareSelection::default();
        selection.toggle(product(1));
        assert!(selection.pair().is_none());
        selection.toggle(product(2));
        assert_eq!(
            selection.pair(),
            Some(("Product 1".to_string(), "Product 2".to_string()))
        );
    }
}
