//! Order Model
//!
//! Orders are created once (with their items) and afterwards mutated only
//! through status transitions. The first transition into
//! [`STATUS_DELIVERED`] fans out into the sales ledger.

use serde::{Deserialize, Serialize};

/// Initial, non-terminal status label.
pub const STATUS_PROCESSING: &str = "Processing";
/// Terminal status label; triggers the ledger fan-out exactly once.
pub const STATUS_DELIVERED: &str = "Delivered";

/// Order row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub date_ordered: i64,
    pub total_amount: f64,
    pub status: String,
}

/// Order line. Created atomically with its parent order, immutable after.
/// `store_id` is denormalized so ledger and overview queries can scope
/// without walking the customer relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub store_id: i64,
}

/// One line of a create-order request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: i64,
    pub quantity: i64,
}

/// Create order payload. `total_amount` is client-supplied by contract;
/// the server does not reprice the cart at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub total_amount: f64,
    pub status: String,
    pub store_id: i64,
    pub items: Vec<OrderItemInput>,
}

/// Order joined with the owning customer's display name (list view).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderWithCustomer {
    pub order_id: i64,
    pub date_ordered: i64,
    pub total_amount: f64,
    pub status: String,
    pub customer_name: String,
}
