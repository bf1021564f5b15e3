//! Customer Model
//!
//! Customers are store-scoped accounts, separate from platform users.

use serde::{Deserialize, Serialize};

/// Customer row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub customer_id: i64,
    pub store_id: i64,
    pub customer_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub date_joined: i64,
}

/// Create customer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub customer_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub password: String,
}

/// Customer with order aggregates (owner list view).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomerWithStats {
    pub customer_id: i64,
    pub customer_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_joined: i64,
    pub no_of_orders: i64,
    pub amount_spent: f64,
}

/// Minimal id/name pair (order-form dropdowns).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomerName {
    pub customer_id: i64,
    pub customer_name: String,
}
