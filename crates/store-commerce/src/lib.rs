//! Commerce domain types and logic for the UniqueStore storefront.
//!
//! This crate provides the storefront's core domain model:
//!
//! - **Catalog**: products with style/material/brand attributes and
//!   percent discounts
//! - **Cart**: line items, quantity limits, pricing totals
//! - **Wishlist**: per-user saved products
//! - **Addresses**: address book entries with completeness validation
//! - **Orders**: order snapshots and a guarded status state machine
//!
//! Everything here is deterministic in-memory logic; persistence and
//! querying live behind the `store-data` collaborator boundary.
//!
//! # Example
//!
//! ```rust,ignore
//! use store_commerce::prelude::*;
//!
//! let mut cart = Cart::new("session-1");
//! cart.add_item(
//!     product.id.clone(),
//!     "Walnut Lounge Chair".to_string(),
//!     1,
//!     Money::new(24_900, Currency::USD),
//!     product.discount,
//! )?;
//!
//! let pricing = cart.pricing()?;
//! println!("Total: {}", pricing.grand_total.display());
//! ```

pub mod address;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod wishlist;

pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{Product, ProductImage, ProductStatus};

    pub use crate::cart::{Cart, CartPricing, LineItem, MAX_QUANTITY_PER_ITEM};

    pub use crate::wishlist::{Wishlist, MAX_WISHLIST_ITEMS};

    pub use crate::address::Address;

    pub use crate::order::{Order, OrderLineItem, OrderStatus};
}
