//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Build authentication router
/// - /api/auth/signup, /api/auth/login: public
/// - /api/auth/me: requires a valid bearer token (extractor-enforced)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/signup", post(handler::signup))
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
}
