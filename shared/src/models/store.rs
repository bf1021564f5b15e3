//! Store (tenant) model

use serde::{Deserialize, Serialize};

/// Store row. The tenant boundary: every customer, product, order and
/// ledger entry is scoped to exactly one store for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Store {
    pub store_id: i64,
    pub owner_user_id: i64,
    pub store_name: String,
    pub store_email: String,
    pub store_address: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub theme: Option<String>,
    pub primary_color: Option<String>,
    pub logo: Option<String>,
    pub banner_image: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub business_type: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create store payload. Presentation fields are plain strings; asset
/// upload is handled outside this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCreate {
    pub store_name: String,
    pub store_email: String,
    pub store_address: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub theme: Option<String>,
    pub primary_color: Option<String>,
    pub logo: Option<String>,
    pub banner_image: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub business_type: Option<String>,
}
