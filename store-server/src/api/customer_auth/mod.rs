//! Customer Authentication Routes
//!
//! Customers are store-scoped accounts in the `customers` table, separate
//! from platform users.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/customer/auth/login", post(handler::login))
}
