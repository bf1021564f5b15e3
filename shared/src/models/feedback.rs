//! Feedback Model

use serde::{Deserialize, Serialize};

/// Feedback row (customer review of a product).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Feedback {
    pub feedback_id: i64,
    pub store_id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub rating: i64,
    pub review_description: String,
    pub review_date: i64,
}

/// Feedback joined with customer/product names (owner list view).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FeedbackWithDetails {
    pub feedback_id: i64,
    pub review_date: i64,
    pub rating: i64,
    pub review_description: String,
    pub customer_name: String,
    pub product_name: String,
}
