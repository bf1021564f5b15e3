//! Sales ledger model

use serde::{Deserialize, Serialize};

/// Ledger entries written by the order fulfillment path.
pub const SALE_TYPE_ONLINE: &str = "online";
/// Reserved for point-of-sale style entries recorded outside this service.
pub const SALE_TYPE_OFFLINE: &str = "offline";

/// Append-only ledger row: one per order line, written on the owning
/// order's first transition to "Delivered". `unit_price_at_sale` is the
/// product price at fulfillment time; `sale_date` is the order's original
/// `date_ordered`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Sale {
    pub sale_id: i64,
    pub sale_date: i64,
    pub sale_type: String,
    pub product_id: i64,
    pub quantity_sold: i64,
    pub unit_price_at_sale: f64,
    pub total_sale_amount: f64,
    pub store_id: i64,
    pub customer_id: i64,
}
