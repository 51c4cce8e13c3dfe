//! The product grid: catalog fetch plus client-side filtering.

use store_browse::FilterState;
use store_commerce::catalog::Product;
use store_data::{list_with_retry, CatalogQuery, Dependency, ProductCatalog, RetryPolicy, TimeoutConfig};

use crate::filter_store::{FilterStore, HistorySink};

/// State behind the storefront's browse page.
///
/// Holds the fetched catalog and the URL-synchronized filters; the
/// grid renders [`visible`](Self::visible). A backend failure leaves
/// an empty catalog rather than an error surface — the page shows its
/// empty state and does not retry beyond the fetch policy.
#[derive(Debug)]
pub struct BrowsePage<H: HistorySink> {
    products: Vec<Product>,
    filters: FilterStore<H>,
}

impl<H: HistorySink> BrowsePage<H> {
    /// Create a page with no products loaded, filters from the URL.
    pub fn new(query: &str, history: H) -> Self {
        Self {
            products: Vec::new(),
            filters: FilterStore::from_query(query, history),
        }
    }

    /// The URL-synchronized filter store.
    pub fn filters(&self) -> &FilterStore<H> {
        &self.filters
    }

    /// Mutable access to the filter store.
    pub fn filters_mut(&mut self) -> &mut FilterStore<H> {
        &mut self.filters
    }

    /// All fetched products, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Re-fetch the catalog with the default policy for the
    /// dependency; failures degrade to an empty list.
    pub async fn refresh<C: ProductCatalog + ?Sized>(&mut self, catalog: &C) {
        let policy = RetryPolicy::new(Dependency::Catalog.default_max_retries());
        let timeout = TimeoutConfig::for_dependency(Dependency::Catalog);

        self.products =
            match list_with_retry(catalog, &CatalogQuery::all(), timeout, &policy).await {
                Ok(products) => products,
                Err(err) => {
                    tracing::warn!(error = %err, "catalog unavailable, showing empty grid");
                    Vec::new()
                }
            };
    }

    /// The filtered, order-preserving subset the grid renders.
    pub fn visible(&self) -> Vec<Product> {
        self.state().apply(&self.products)
    }

    fn state(&self) -> &FilterState {
        self.filters.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use store_commerce::{Currency, Money};
    use store_data::{BackendError, InMemoryBackend};

    #[derive(Debug, Default)]
    struct NullSink;

    impl HistorySink for NullSink {
        fn replace_query(&mut self, _query: &str) {}
    }

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

    #[tokio::test]
    async fn test_refresh_then_filter() {
        let backend = InMemoryBackend::with_products(vec![
            product("1", 100, Some("A")),
            product("2", 200, Some("B")),
        ]);

        let mut page = BrowsePage::new("", NullSink);
        page.refresh(&backend).await;
        assert_eq!(page.visible().len(), 2);

        page.filters_mut().set_price_range(0, 150);
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku, "SKU-1");
    }

    #[tokio::test]
    async fn test_url_filters_apply_on_load() {
        let backend = InMemoryBackend::with_products(vec![
            product("1", 100, Some("A")),
            product("2", 200, Some("B")),
        ]);

        let mut page = BrowsePage::new("styles=%5B%22B%22%5D", NullSink);
        page.refresh(&backend).await;

        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku, "SKU-2");
    }

    struct DownCatalog;

    #[async_trait]
    impl store_data::ProductCatalog for DownCatalog {
        async fn list_products(
            &self,
            _query: &store_data::CatalogQuery,
        ) -> Result<Vec<Product>, BackendError> {
            Err(BackendError::Http {
                status: 404,
                endpoint: "/products".to_string(),
            })
        }

        async fn get_product(&self, slug: &str) -> Result<Product, BackendError> {
            Err(BackendError::NotFound(slug.to_string()))
        }
    }

    #[tokio::test]
    async fn test_backend_failure_degrades_to_empty() {
        let mut page = BrowsePage::new("", NullSink);
        page.refresh(&DownCatalog).await;
        assert!(page.visible().is_empty());
    }
}
