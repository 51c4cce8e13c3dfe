//! Product catalog collaborator.

use async_trait::async_trait;
use store_commerce::catalog::Product;

use crate::error::BackendError;
use crate::retry::RetryPolicy;
use crate::timeout::TimeoutConfig;

/// Server-side narrowing for a catalog read.
///
/// The browse filters are evaluated client-side over the returned
/// array; this query only narrows what the backend ships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Only products flagged for the featured carousel.
    pub featured_only: bool,
    /// Cap the number of returned products.
    pub limit: Option<usize>,
}

impl CatalogQuery {
    /// Query for the full visible catalog.
    pub fn all() -> Self {
        Self::default()
    }

    /// Query for the featured collection.
    pub fn featured() -> Self {
        Self {
            featured_only: true,
            limit: None,
        }
    }

    /// Set a result cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Read access to the hosted product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// List visible products matching the query, in catalog order.
    async fn list_products(&self, query: &CatalogQuery) -> Result<Vec<Product>, BackendError>;

    /// Fetch a single product by slug.
    async fn get_product(&self, slug: &str) -> Result<Product, BackendError>;
}

/// List products with a time budget and retry policy applied.
///
/// Each attempt gets the full timeout budget; retryable failures back
/// off per policy before the next attempt. The terminal error is
/// returned as-is — the store layer degrades it to an empty list.
pub async fn list_with_retry<C>(
    catalog: &C,
    query: &CatalogQuery,
    timeout: TimeoutConfig,
    policy: &RetryPolicy,
) -> Result<Vec<Product>, BackendError>
where
    C: ProductCatalog + ?Sized,
{
    let mut attempt: u32 = 0;
    loop {
        let result = match tokio::time::timeout(timeout.total, catalog.list_products(query)).await
        {
            Ok(inner) => inner,
            Err(_) => Err(BackendError::Timeout(format!(
                "catalog read exceeded {:?}",
                timeout.total
            ))),
        };

        match result {
            Ok(products) => return Ok(products),
            Err(err) => {
                if !policy.should_retry(&err, attempt) {
                    return Err(err);
                }
                let delay = policy.backoff.delay_for_attempt(attempt);
                tracing::warn!(attempt, error = %err, "catalog read failed, retrying");
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                attempt += 1;
            }
        }
    }
}
