//! Product catalog module.
//!
//! Contains the product read model consumed by browsing, carts, and
//! the featured-collection carousel.

mod product;

pub use product::{Product, ProductImage, ProductStatus, MAX_DISCOUNT_PERCENT};
