//! Time budgets per backend dependency.

use std::time::Duration;

/// Backend dependencies the storefront calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// Product catalog reads (render-blocking).
    Catalog,
    /// Order reads and writes.
    Orders,
}

impl Dependency {
    pub fn name(&self) -> &'static str {
        match self {
            Dependency::Catalog => "catalog",
            Dependency::Orders => "orders",
        }
    }

    /// Default total time budget for a call to this dependency.
    ///
    /// Catalog reads block rendering and get a tight budget; order
    /// writes are allowed longer.
    pub fn default_timeout(&self) -> Duration {
        match self {
            Dependency::Catalog => Duration::from_millis(800),
            Dependency::Orders => Duration::from_secs(2),
        }
    }

    /// Default retry attempts for this dependency.
    pub fn default_max_retries(&self) -> u32 {
        match self {
            Dependency::Catalog => 2,
            Dependency::Orders => 1,
        }
    }
}

/// Timeout configuration for a backend call.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutConfig {
    /// Total budget for the call, retries excluded.
    pub total: Duration,
}

impl TimeoutConfig {
    /// Create a config from a total budget.
    pub fn from_total(total: Duration) -> Self {
        Self { total }
    }

    /// The default budget for a dependency.
    pub fn for_dependency(dependency: Dependency) -> Self {
        Self::from_total(dependency.default_timeout())
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from_total(Duration::from_secs(1))
    }
}
