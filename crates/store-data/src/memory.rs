//! In-memory backend for tests and local demos.

use async_trait::async_trait;
use std::sync::RwLock;
use store_commerce::catalog::Product;
use store_commerce::ids::UserId;
use store_commerce::order::{sort_history, Order};

use crate::catalog::{CatalogQuery, ProductCatalog};
use crate::error::BackendError;
use crate::orders::OrderStore;

/// An in-process implementation of the backend traits.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    products: RwLock<Vec<Product>>,
    orders: RwLock<Vec<Order>>,
}

impl InMemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend seeded with products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Replace the product set.
    pub fn set_products(&self, products: Vec<Product>) {
        if let Ok(mut guard) = self.products.write() {
            *guard = products;
        }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryBackend {
    async fn list_products(&self, query: &CatalogQuery) -> Result<Vec<Product>, BackendError> {
        let guard = self
            .products
            .read()
            .map_err(|_| BackendError::Connection("poisoned product store".to_string()))?;

        let mut products: Vec<Product> = guard
            .iter()
            .filter(|p| p.is_available())
            .filter(|p| !query.featured_only || p.featured)
            .cloned()
            .collect();
        if let Some(limit) = query.limit {
            products.truncate(limit);
        }
        Ok(products)
    }

    async fn get_product(&self, slug: &str) -> Result<Product, BackendError> {
        let guard = self
            .products
            .read()
            .map_err(|_| BackendError::Connection("poisoned product store".to_string()))?;

        guard
            .iter()
            .find(|p| p.slug == slug && p.is_available())
            .cloned()
            .ok_or_else(|| BackendError::NotFound(slug.to_string()))
    }
}

#[async_trait]
impl OrderStore for InMemoryBackend {
    async fn save_order(&self, order: &Order) -> Result<(), BackendError> {
        let mut guard = self
            .orders
            .write()
            .map_err(|_| BackendError::Connection("poisoned order store".to_string()))?;
        guard.push(order.clone());
        Ok(())
    }

    async fn list_orders(&self, user_id: &UserId) -> Result<Vec<Order>, BackendError> {
        let guard = self
            .orders
            .read()
            .map_err(|_| BackendError::Connection("poisoned order store".to_string()))?;

        let mut orders: Vec<Order> = guard
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect();
        sort_history(&mut orders);
        Ok(orders)
    }
}
