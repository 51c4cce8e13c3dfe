//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Wishlist is at capacity.
    #[error("Wishlist is full (limit {0})")]
    WishlistFull(usize),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Cart has no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid order status transition.
    #[error("Invalid order transition from {from} to {to}")]
    InvalidOrderTransition { from: String, to: String },

    /// Address is missing required fields.
    #[error("Incomplete address: missing {0}")]
    IncompleteAddress(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Validation(e.to_string())
    }
}
