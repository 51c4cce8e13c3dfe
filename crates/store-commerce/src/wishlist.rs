//! Wishlist types.

use crate::error::StoreError;
use crate::ids::{ProductId, UserId, WishlistId};
use serde::{Deserialize, Serialize};

/// Maximum number of products a wishlist can hold.
pub const MAX_WISHLIST_ITEMS: usize = 100;

/// A per-user wishlist. Insertion order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wishlist {
    /// Unique wishlist identifier.
    pub id: WishlistId,
    /// Owning user.
    pub user_id: UserId,
    /// Saved products, oldest first.
    pub product_ids: Vec<ProductId>,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Wishlist {
    /// Create an empty wishlist for a user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: WishlistId::generate(),
            user_id,
            product_ids: Vec::new(),
            updated_at: current_timestamp(),
        }
    }

    /// Check membership.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    /// Check whether the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    /// Add a product if absent, remove it if present.
    ///
    /// Returns `true` when the product is a member after the call.
    pub fn toggle(&mut self, product_id: ProductId) -> Result<bool, StoreError> {
        if let Some(pos) = self.product_ids.iter().position(|p| p == &product_id) {
            self.product_ids.remove(pos);
            self.updated_at = current_timestamp();
            return Ok(false);
        }
        if self.product_ids.len() >= MAX_WISHLIST_ITEMS {
            return Err(StoreError::WishlistFull(MAX_WISHLIST_ITEMS));
        }
        self.product_ids.push(product_id);
        self.updated_at = current_timestamp();
        Ok(true)
    }

    /// Remove a product if present.
    pub fn remove(&mut self, product_id: &ProductId) {
        if let Some(pos) = self.product_ids.iter().position(|p| p == product_id) {
            self.product_ids.remove(pos);
            self.updated_at = current_timestamp();
        }
    }
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

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new(UserId::new("u1"));
        let p = ProductId::new("p1");

        assert!(wishlist.toggle(p.clone()).unwrap());
        assert!(wishlist.contains(&p));

        assert!(!wishlist.toggle(p.clone()).unwrap());
        assert!(!wishlist.contains(&p));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::new(UserId::new("u1"));
        wishlist.toggle(ProductId::new("a")).unwrap();
        wishlist.toggle(ProductId::new("b")).unwrap();
        wishlist.toggle(ProductId::new("c")).unwrap();
        wishlist.remove(&ProductId::new("b"));

        let ids: Vec<&str> = wishlist.product_ids.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_capacity_limit() {
        let mut wishlist = Wishlist::new(UserId::new("u1"));
        for i in 0..MAX_WISHLIST_ITEMS {
            wishlist.toggle(ProductId::new(format!("p{}", i))).unwrap();
        }
        let err = wishlist.toggle(ProductId::new("overflow")).unwrap_err();
        assert!(matches!(err, StoreError::WishlistFull(_)));

        // Toggling an existing member still works at capacity.
        assert!(!wishlist.toggle(ProductId::new("p0")).unwrap());
    }
}
