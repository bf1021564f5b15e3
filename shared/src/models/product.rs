//! Product Model

use serde::{Deserialize, Serialize};

/// Product row. `price` is the live price; the sales ledger snapshots it
/// per line at fulfillment time (`unit_price_at_sale`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub product_id: i64,
    pub store_id: i64,
    pub product_name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
