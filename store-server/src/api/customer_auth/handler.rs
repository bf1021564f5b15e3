//! Customer Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use shared::models::USER_TYPE_CUSTOMER;

use crate::auth::verify_password;
use crate::core::ServerState;
use crate::db::repository::customer;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Customer email is only unique within a store, so login carries the store.
#[derive(Deserialize)]
pub struct CustomerLoginRequest {
    pub store_id: i64,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct CustomerInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub store_id: i64,
}

#[derive(Serialize)]
pub struct CustomerLoginResponse {
    pub message: String,
    pub customer: CustomerInfo,
    pub token: String,
}

/// POST /api/customer/auth/login - authenticate a store's customer
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerLoginRequest>,
) -> AppResult<Json<CustomerLoginResponse>> {
    let customer =
        customer::find_by_email(&state.pool, payload.store_id, &payload.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let customer = match customer {
        Some(c) => {
            if !verify_password(&payload.password, &c.password_hash) {
                tracing::warn!(email = %payload.email, store_id = payload.store_id, "Customer login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            c
        }
        None => {
            tracing::warn!(email = %payload.email, store_id = payload.store_id, "Customer login failed - customer not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(
            customer.customer_id,
            &customer.email,
            USER_TYPE_CUSTOMER,
            Some(customer.store_id),
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        customer_id = customer.customer_id,
        store_id = customer.store_id,
        "Customer logged in successfully"
    );

    Ok(Json(CustomerLoginResponse {
        message: "Login successful!".to_string(),
        customer: CustomerInfo {
            id: customer.customer_id,
            name: customer.customer_name,
            email: customer.email,
            store_id: customer.store_id,
        },
        token,
    }))
}
