//! Filter state and the product filter evaluator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use store_commerce::catalog::Product;

/// Lowest selectable price, in minor units.
pub const PRICE_FLOOR: i64 = 0;
/// Highest selectable price, in minor units.
pub const PRICE_CEIL: i64 = 150_000;

/// The currently selected browse filters.
///
/// Selection sets are ordered (`BTreeSet`) so the URL encoding of a
/// state is canonical. The price range invariant `min <= max`, both
/// within `[PRICE_FLOOR, PRICE_CEIL]`, is maintained by every
/// constructor and mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Inclusive price range, in minor units.
    pub price_range: (i64, i64),
    /// Selected styles; empty means "any".
    pub styles: BTreeSet<String>,
    /// Selected materials; empty means "any".
    pub materials: BTreeSet<String>,
    /// Selected brands; empty means "any".
    pub brands: BTreeSet<String>,
    /// Only show discounted products.
    pub show_discounted: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_range: (PRICE_FLOOR, PRICE_CEIL),
            styles: BTreeSet::new(),
            materials: BTreeSet::new(),
            brands: BTreeSet::new(),
            show_discounted: false,
        }
    }
}

impl FilterState {
    /// Create the default (match-everything) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price range, ordering and clamping into bounds.
    pub fn set_price_range(&mut self, min: i64, max: i64) {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.price_range = (
            lo.clamp(PRICE_FLOOR, PRICE_CEIL),
            hi.clamp(PRICE_FLOOR, PRICE_CEIL),
        );
    }

    /// Builder form of [`set_price_range`](Self::set_price_range).
    pub fn with_price_range(mut self, min: i64, max: i64) -> Self {
        self.set_price_range(min, max);
        self
    }

    /// Add a style to the selection if absent, remove it if present.
    pub fn toggle_style(&mut self, style: impl Into<String>) {
        toggle(&mut self.styles, style.into());
    }

    /// Add a material to the selection if absent, remove it if present.
    pub fn toggle_material(&mut self, material: impl Into<String>) {
        toggle(&mut self.materials, material.into());
    }

    /// Add a brand to the selection if absent, remove it if present.
    pub fn toggle_brand(&mut self, brand: impl Into<String>) {
        toggle(&mut self.brands, brand.into());
    }

    /// Set the discount-only toggle.
    pub fn set_show_discounted(&mut self, show: bool) {
        self.show_discounted = show;
    }

    /// Builder form of style selection.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.styles.insert(style.into());
        self
    }

    /// Builder form of the discount-only toggle.
    pub fn with_discounted_only(mut self) -> Self {
        self.show_discounted = true;
        self
    }

    /// Clear every filter back to the default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check whether the price range is at its default.
    pub fn price_is_default(&self) -> bool {
        self.price_range == (PRICE_FLOOR, PRICE_CEIL)
    }

    /// Check whether every field is at its default.
    pub fn is_default(&self) -> bool {
        self.price_is_default()
            && self.styles.is_empty()
            && self.materials.is_empty()
            && self.brands.is_empty()
            && !self.show_discounted
    }

    /// Evaluate the filter predicate against a single product.
    ///
    /// Clauses are ANDed; a selection-set clause is vacuously true
    /// when the set is empty. A product missing an attribute never
    /// matches a non-empty selection on it.
    pub fn matches(&self, product: &Product) -> bool {
        let (min, max) = self.price_range;
        if product.price.amount_cents < min || product.price.amount_cents > max {
            return false;
        }
        if !set_matches(&self.styles, product.style.as_deref()) {
            return false;
        }
        if !set_matches(&self.materials, product.material.as_deref()) {
            return false;
        }
        if !set_matches(&self.brands, product.brand.as_deref()) {
            return false;
        }
        if self.show_discounted && !product.has_discount() {
            return false;
        }
        true
    }

    /// Reduce a product list to the visible subset.
    ///
    /// Pure and order-preserving: the result is a stable subsequence
    /// of the input, and applying the same state twice is a no-op.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: String) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

fn set_matches(selection: &BTreeSet<String>, value: Option<&str>) -> bool {
    if selection.is_empty() {
        return true;
    }
    match value {
        Some(v) => selection.contains(v),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_commerce::{Currency, Money};

    fn product(id: &str, price_cents: i64, style: Option<&str>) -> Product {
        let mut p = Product::new(
            format!("SKU-{}", id),
            format!("Product {}", id),
            format!("product-{}", id),
            Money::new(price_cents, Currency::USD),
        );
        p.style = style.map(String::from);
        p
    }

    #[test]
    fn test_price_range_scenario() {
        // Products at 100 and 200; range [0, 150] keeps only the first.
        let products = vec![product("1", 100, Some("A")), product("2", 200, Some("B"))];
        let state = FilterState::new().with_price_range(0, 150);

        let visible = state.apply(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku, "SKU-1");
    }

    #[test]
    fn test_style_scenario() {
        let products = vec![product("1", 100, Some("A")), product("2", 200, Some("B"))];
        let state = FilterState::new().with_style("B");

        let visible = state.apply(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku, "SKU-2");
    }

    #[test]
    fn test_default_state_is_identity() {
        let products = vec![product("1", 100, Some("A")), product("2", 200, None)];
        let state = FilterState::default();
        assert_eq!(state.apply(&products), products);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let products = vec![
            product("1", 100, Some("A")),
            product("2", 200, Some("B")),
            product("3", 120, Some("A")),
        ];
        let state = FilterState::new().with_price_range(0, 150).with_style("A");

        let once = state.apply(&products);
        let twice = state.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let products = vec![product("1", 150, None)];
        let state = FilterState::new().with_price_range(150, 150);
        assert_eq!(state.apply(&products).len(), 1);
    }

    #[test]
    fn test_missing_attribute_fails_selection() {
        let products = vec![product("1", 100, None)];
        let state = FilterState::new().with_style("A");
        assert!(state.apply(&products).is_empty());
    }

    #[test]
    fn test_discount_only() {
        let mut discounted = product("1", 100, None);
        discounted.set_discount(25).unwrap();
        let products = vec![discounted, product("2", 100, None)];

        let state = FilterState::new().with_discounted_only();
        let visible = state.apply(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku, "SKU-1");
    }

    #[test]
    fn test_range_reorders_and_clamps() {
        let mut state = FilterState::new();
        state.set_price_range(200_000, -50);
        assert_eq!(state.price_range, (PRICE_FLOOR, PRICE_CEIL));

        state.set_price_range(500, 100);
        assert_eq!(state.price_range, (100, 500));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = FilterState::new();
        state.toggle_material("Walnut");
        assert!(!state.is_default());
        state.toggle_material("Walnut");
        assert!(state.is_default());
    }
}
