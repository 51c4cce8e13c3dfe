//! The featured-collection carousel, mapped onto product identity.

use std::time::Instant;

use store_browse::{Carousel, Step};
use store_commerce::catalog::Product;
use store_commerce::ids::ProductId;

/// The carousel over the featured product collection.
///
/// Wraps the index machine from `store-browse` with the products it
/// rotates over, exposing product identity where the machine only
/// knows indices. Deadlines live inside the machine and are driven by
/// [`tick`](Self::tick); dropping the carousel drops its timers.
#[derive(Debug)]
pub struct FeaturedCarousel {
    products: Vec<Product>,
    machine: Carousel,
}

impl FeaturedCarousel {
    /// Create a carousel over a product list, starting at the first.
    pub fn new(products: Vec<Product>) -> Self {
        let machine = Carousel::new(products.len());
        Self { products, machine }
    }

    /// Replace the product list, re-syncing the machine.
    ///
    /// A shrink clamps the active index; an empty list makes every
    /// operation a no-op.
    pub fn set_products(&mut self, products: Vec<Product>, now: Instant) {
        self.machine.sync_count(products.len(), now);
        self.products = products;
    }

    /// Number of products in rotation.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the carousel has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The currently active product.
    pub fn active_product(&self) -> Option<&Product> {
        self.products.get(self.machine.active())
    }

    /// The product entering at the loop boundary during a wrapping
    /// transition, if any.
    pub fn entering_id(&self) -> Option<&ProductId> {
        self.machine
            .entering()
            .and_then(|i| self.products.get(i))
            .map(|p| &p.id)
    }

    /// Products inside the rendered window, in index order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.machine
            .visible_indices()
            .into_iter()
            .filter_map(|i| self.products.get(i))
            .collect()
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.machine.is_transitioning()
    }

    /// Whether auto-play is enabled.
    pub fn is_auto_play(&self) -> bool {
        self.machine.is_auto_play()
    }

    /// Enable or disable auto-play.
    pub fn set_auto_play(&mut self, on: bool, now: Instant) {
        self.machine.set_auto_play(on, now);
    }

    /// Advance to the next product.
    pub fn advance(&mut self, now: Instant) -> Option<Step> {
        self.machine.advance(now)
    }

    /// Jump to a product by index (indicator click).
    pub fn select(&mut self, index: usize, now: Instant) -> Option<Step> {
        self.machine.select(index, now)
    }

    /// Act on expired transition and auto-play deadlines.
    pub fn tick(&mut self, now: Instant) -> Option<Step> {
        self.machine.tick(now)
    }
}
