//! Platform user model (store owners and plain accounts)

use serde::{Deserialize, Serialize};

/// Role label for accounts created via signup.
pub const USER_TYPE_CUSTOMER: &str = "customer";
/// Role label required by store-management endpoints.
pub const USER_TYPE_SHOP_OWNER: &str = "shop_owner";

/// User row. `store_id` stays NULL until a store is created for the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub user_id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub user_type: String,
    pub store_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}
