//! Cart and line item types.

use crate::error::StoreError;
use crate::ids::{CartId, LineItemId, ProductId, UserId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Session ID for anonymous carts.
    pub session_id: String,
    /// User ID for authenticated carts.
    pub user_id: Option<UserId>,
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new cart for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            session_id: session_id.into(),
            user_id: None,
            items: Vec::new(),
            currency: Currency::USD,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a cart for an authenticated user.
    pub fn for_user(user_id: UserId, session_id: impl Into<String>) -> Self {
        let mut cart = Self::new(session_id);
        cart.user_id = Some(user_id);
        cart
    }

    /// Add an item to the cart, merging with an existing line for the
    /// same product.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - Adding would exceed MAX_QUANTITY_PER_ITEM
    /// - The item's currency differs from the cart's
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
        discount_percent: Option<i64>,
    ) -> Result<LineItemId, StoreError> {
        if quantity <= 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        if unit_price.currency != self.currency {
            return Err(StoreError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(StoreError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(StoreError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            self.updated_at = current_timestamp();
            return Ok(existing.id.clone());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(StoreError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = LineItem {
            id: LineItemId::generate(),
            product_id,
            name: name.into(),
            unit_price,
            discount_percent: discount_percent.filter(|d| *d > 0),
            quantity,
        };
        let id = item.id.clone();
        self.items.push(item);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Set a line item's quantity; zero removes the line.
    pub fn set_quantity(
        &mut self,
        item_id: &LineItemId,
        quantity: i64,
    ) -> Result<(), StoreError> {
        if quantity < 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(StoreError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let pos = self
            .items
            .iter()
            .position(|i| &i.id == item_id)
            .ok_or_else(|| StoreError::ItemNotInCart(item_id.to_string()))?;

        if quantity == 0 {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity = quantity;
        }
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Remove a line item.
    pub fn remove_item(&mut self, item_id: &LineItemId) -> Result<(), StoreError> {
        let pos = self
            .items
            .iter()
            .position(|i| &i.id == item_id)
            .ok_or_else(|| StoreError::ItemNotInCart(item_id.to_string()))?;
        self.items.remove(pos);
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Check whether the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculate cart totals with checked arithmetic.
    pub fn pricing(&self) -> Result<CartPricing, StoreError> {
        let mut subtotal = Money::zero(self.currency);
        let mut discount_total = Money::zero(self.currency);

        for item in &self.items {
            let line = item.line_pricing()?;
            subtotal = subtotal.checked_add(line.subtotal)?;
            discount_total = discount_total.checked_add(line.discount)?;
        }

        let grand_total = subtotal.checked_sub(discount_total)?;
        Ok(CartPricing {
            subtotal,
            discount_total,
            grand_total,
        })
    }
}

/// A cart line item.
///
/// The discount percent is captured from the product at add time so a
/// later catalog change does not silently reprice the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name snapshot.
    pub name: String,
    /// Unit list price snapshot.
    pub unit_price: Money,
    /// Percent-off discount snapshot, if any.
    pub discount_percent: Option<i64>,
    /// Quantity.
    pub quantity: i64,
}

impl LineItem {
    /// Totals for this line.
    pub fn line_pricing(&self) -> Result<LineItemPricing, StoreError> {
        let subtotal = self.unit_price.checked_mul(self.quantity)?;
        let discount = match self.discount_percent {
            Some(d) if d > 0 => subtotal.percent(d)?,
            _ => Money::zero(subtotal.currency),
        };
        let total = subtotal.checked_sub(discount)?;
        Ok(LineItemPricing {
            subtotal,
            discount,
            total,
        })
    }
}

/// Totals for a single line item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Quantity times unit price.
    pub subtotal: Money,
    /// Discount applied to the line.
    pub discount: Money,
    /// Line subtotal minus discount.
    pub total: Money,
}

/// Totals for the whole cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Sum of line discounts.
    pub discount_total: Money,
    /// Subtotal minus discounts.
    pub grand_total: Money,
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new("session-1");
        let id = cart
            .add_item(ProductId::new("p1"), "Chair", 2, usd(10_000), None)
            .unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, id);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::new("session-1");
        cart.add_item(ProductId::new("p1"), "Chair", 2, usd(10_000), None)
            .unwrap();
        cart.add_item(ProductId::new("p1"), "Chair", 3, usd(10_000), None)
            .unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_quantity_cap() {
        let mut cart = Cart::new("session-1");
        cart.add_item(ProductId::new("p1"), "Chair", 98, usd(100), None)
            .unwrap();
        let err = cart
            .add_item(ProductId::new("p1"), "Chair", 2, usd(100), None)
            .unwrap_err();
        assert!(matches!(err, StoreError::QuantityExceedsLimit(100, _)));
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new("session-1");
        assert!(cart
            .add_item(ProductId::new("p1"), "Chair", 0, usd(100), None)
            .is_err());
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = Cart::new("session-1");
        let err = cart
            .add_item(
                ProductId::new("p1"),
                "Chair",
                1,
                Money::new(100, Currency::EUR),
                None,
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new("session-1");
        let id = cart
            .add_item(ProductId::new("p1"), "Chair", 2, usd(100), None)
            .unwrap();
        cart.set_quantity(&id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_pricing_with_discount() {
        let mut cart = Cart::new("session-1");
        cart.add_item(ProductId::new("p1"), "Chair", 2, usd(10_000), Some(10))
            .unwrap();
        cart.add_item(ProductId::new("p2"), "Table", 1, usd(50_000), None)
            .unwrap();

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.subtotal.amount_cents, 70_000);
        assert_eq!(pricing.discount_total.amount_cents, 2_000);
        assert_eq!(pricing.grand_total.amount_cents, 68_000);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut cart = Cart::new("session-1");
        let err = cart.remove_item(&LineItemId::new("nope")).unwrap_err();
        assert!(matches!(err, StoreError::ItemNotInCart(_)));
    }
}
