//! Product types.

use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Largest percent-off discount a product can carry.
pub const MAX_DISCOUNT_PERCENT: i64 = 90;

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to customers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "active" => Some(ProductStatus::Active),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// A product as the storefront consumes it.
///
/// Style, material, and brand are free-form attributes the browse
/// filters select on; products missing an attribute simply never
/// match a selection on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description (may contain HTML/markdown).
    pub description: Option<String>,
    /// List price.
    pub price: Money,
    /// Percent off the list price, if discounted.
    pub discount: Option<i64>,
    /// Style attribute (e.g., "Mid-Century").
    pub style: Option<String>,
    /// Material attribute (e.g., "Walnut").
    pub material: Option<String>,
    /// Brand attribute.
    pub brand: Option<String>,
    /// Product visibility status.
    pub status: ProductStatus,
    /// Product images in display order.
    pub images: Vec<ProductImage>,
    /// Whether the product appears in the featured-collection carousel.
    pub featured: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new active product.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            price,
            discount: None,
            style: None,
            material: None,
            brand: None,
            status: ProductStatus::Active,
            images: Vec::new(),
            featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Check if the product carries a discount.
    pub fn has_discount(&self) -> bool {
        self.discount.map(|d| d > 0).unwrap_or(false)
    }

    /// Set a percent-off discount, validating the range.
    pub fn set_discount(&mut self, percent: i64) -> Result<(), StoreError> {
        if !(0..=MAX_DISCOUNT_PERCENT).contains(&percent) {
            return Err(StoreError::Validation(format!(
                "discount percent out of range: {}",
                percent
            )));
        }
        self.discount = if percent == 0 { None } else { Some(percent) };
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Effective price after any discount.
    pub fn discounted_price(&self) -> Result<Money, StoreError> {
        match self.discount {
            Some(d) if d > 0 => {
                let off = self.price.percent(d)?;
                self.price.checked_sub(off)
            }
            _ => Ok(self.price),
        }
    }

    /// Append an image.
    pub fn add_image(&mut self, url: impl Into<String>) {
        self.images.push(ProductImage {
            url: url.into(),
            alt_text: None,
        });
        self.updated_at = current_timestamp();
    }
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    /// URL to the image file.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
