//! Order store collaborator.

use async_trait::async_trait;
use store_commerce::ids::UserId;
use store_commerce::order::Order;

use crate::error::BackendError;

/// Persistence for placed orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a newly placed order.
    async fn save_order(&self, order: &Order) -> Result<(), BackendError>;

    /// A user's order history, newest first.
    async fn list_orders(&self, user_id: &UserId) -> Result<Vec<Order>, BackendError>;
}
