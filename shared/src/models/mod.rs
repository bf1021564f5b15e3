//! Data models
//!
//! Shared between store-server and the admin frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), all timestamps are
//! epoch milliseconds.

pub mod customer;
pub mod feedback;
pub mod order;
pub mod product;
pub mod sale;
pub mod store;
pub mod user;

// Re-exports
pub use customer::*;
pub use feedback::*;
pub use order::*;
pub use product::*;
pub use sale::*;
pub use store::*;
pub use user::*;
