//! Chart-series aggregation for the admin console.
//!
//! Pure reductions from order and product lists to the labeled point
//! series the dashboard charts render. All bucketing is driven by a
//! caller-supplied reference time so the numbers are reproducible.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::HashMap;

use store_commerce::order::{Order, OrderStatus};

/// A single labeled chart value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// Axis label (month, status, product name).
    pub label: String,
    /// The value, in whatever unit the series declares.
    pub value: i64,
}

/// A labeled series of chart points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    /// Series label, e.g. "Revenue".
    pub label: String,
    /// Points in display order.
    pub points: Vec<ChartPoint>,
}

/// Revenue per calendar month over the trailing `months` months,
/// oldest first, zero-filled, in minor currency units.
///
/// Cancelled orders do not count; orders outside the range are
/// dropped.
pub fn revenue_by_month(orders: &[Order], months: usize, now: DateTime<Utc>) -> ChartSeries {
    let buckets = trailing_months(now, months);

    let mut totals: HashMap<(i32, u32), i64> = HashMap::new();
    for order in orders {
        if order.status == OrderStatus::Cancelled {
            continue;
        }
        if let Some(placed) = DateTime::<Utc>::from_timestamp(order.placed_at, 0) {
            let key = (placed.year(), placed.month());
            if buckets.contains(&key) {
                *totals.entry(key).or_insert(0) += order.grand_total.amount_cents;
            }
        }
    }

    let points = buckets
        .into_iter()
        .map(|(year, month)| ChartPoint {
            label: format!("{:04}-{:02}", year, month),
            value: totals.get(&(year, month)).copied().unwrap_or(0),
        })
        .collect();

    ChartSeries {
        label: "Revenue".to_string(),
        points,
    }
}

/// Order counts per lifecycle status, in lifecycle order.
pub fn orders_by_status(orders: &[Order]) -> ChartSeries {
    const STATUSES: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    let mut counts: HashMap<OrderStatus, i64> = HashMap::new();
    for order in orders {
        *counts.entry(order.status).or_insert(0) += 1;
    }

    let points = STATUSES
        .iter()
        .map(|status| ChartPoint {
            label: status.display_name().to_string(),
            value: counts.get(status).copied().unwrap_or(0),
        })
        .collect();

    ChartSeries {
        label: "Orders".to_string(),
        points,
    }
}

/// The most-ordered products by unit count, descending, capped at
/// `limit`. Ties break alphabetically so output is deterministic.
pub fn top_products(orders: &[Order], limit: usize) -> ChartSeries {
    let mut counts: HashMap<String, i64> = HashMap::new();
    for order in orders {
        if order.status == OrderStatus::Cancelled {
            continue;
        }
        for item in &order.items {
            *counts.entry(item.name.clone()).or_insert(0) += item.quantity;
        }
    }

    let mut ranked: Vec<(String, i64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);

    ChartSeries {
        label: "Top products".to_string(),
        points: ranked
            .into_iter()
            .map(|(label, value)| ChartPoint { label, value })
            .collect(),
    }
}

/// The trailing `months` (year, month) pairs ending at `now`,
/// oldest first.
fn trailing_months(now: DateTime<Utc>, months: usize) -> Vec<(i32, u32)> {
    let mut buckets = Vec::with_capacity(months);
    let mut year = now.year();
    let mut month = now.month();

    for _ in 0..months {
        buckets.push((year, month));
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }

    buckets.reverse();
    buckets
}
