//! Order types and status state machine.

use crate::address::Address;
use crate::cart::Cart;
use crate::error::StoreError;
use crate::ids::{OrderId, ProductId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Pending -> Paid -> Shipped -> Delivered, with Cancelled reachable
/// from Pending or Paid only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check whether a transition to `next` is allowed.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Paid)
                | (OrderStatus::Paid, OrderStatus::Shipped)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Paid, OrderStatus::Cancelled)
        )
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Ordering user.
    pub user_id: UserId,
    /// Item snapshots.
    pub items: Vec<OrderLineItem>,
    /// Current status.
    pub status: OrderStatus,
    /// Shipping destination snapshot.
    pub shipping_address: Address,
    /// Sum of line subtotals at placement time.
    pub subtotal: Money,
    /// Discounts applied at placement time.
    pub discount_total: Money,
    /// Amount charged.
    pub grand_total: Money,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    /// Snapshot a cart into a pending order.
    ///
    /// The cart must be non-empty and the address complete; pricing is
    /// captured here so later catalog changes cannot reprice history.
    pub fn from_cart(
        cart: &Cart,
        shipping_address: Address,
        user_id: UserId,
    ) -> Result<Self, StoreError> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        shipping_address.validate()?;

        let pricing = cart.pricing()?;
        let items = cart
            .items
            .iter()
            .map(|line| {
                line.line_pricing().map(|lp| OrderLineItem {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    total: lp.total,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: OrderId::generate(),
            user_id,
            items,
            status: OrderStatus::Pending,
            shipping_address,
            subtotal: pricing.subtotal,
            discount_total: pricing.discount_total,
            grand_total: pricing.grand_total,
            placed_at: current_timestamp(),
        })
    }

    /// Move the order to a new status, enforcing the lifecycle.
    pub fn transition(&mut self, next: OrderStatus) -> Result<(), StoreError> {
        if !self.status.can_transition_to(next) {
            return Err(StoreError::InvalidOrderTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// Check whether the order can still be cancelled.
    pub fn is_cancellable(&self) -> bool {
        self.status.can_transition_to(OrderStatus::Cancelled)
    }
}

/// An order line snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Product this line referred to.
    pub product_id: ProductId,
    /// Product name at placement time.
    pub name: String,
    /// Unit price at placement time.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total after discount.
    pub total: Money,
}

/// Sort orders newest-first for history views.
pub fn sort_history(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
