//! Authentication Handlers
//!
//! Signup, login and token introspection for platform accounts.

use std::time::Duration;

use axum::{Json, extract::State};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::auth::{CurrentUser, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{self, MAX_PASSWORD_LEN};
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user_id: i64,
    pub email: String,
}

/// POST /api/auth/signup - register a platform account
///
/// New accounts start as plain `customer` users; ownership is granted
/// when a store is created for them.
pub async fn signup(
    State(state): State<ServerState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    validation::validate_email(&payload.email, "email")?;
    validation::validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let password_hash = hash_password(&payload.password)?;
    let created = user::create(&state.pool, &payload.email, &password_hash).await?;

    tracing::info!(user_id = created.user_id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully".to_string(),
            user_id: created.user_id,
            email: created.email,
        }),
    ))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub user_type: String,
    pub store_id: Option<i64>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
    pub token: String,
}

/// POST /api/auth/login - authenticate and issue a JWT
///
/// Unknown email and wrong password return the same message to prevent
/// account enumeration; both paths take the same fixed delay.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = user::find_by_email(&state.pool, &payload.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) => {
            if !verify_password(&payload.password, &u.password_hash) {
                tracing::warn!(email = %payload.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            tracing::warn!(email = %payload.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(user.user_id, &user.email, &user.user_type, user.store_id)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = user.user_id,
        user_type = %user.user_type,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        user: UserInfo {
            id: user.user_id,
            email: user.email,
            user_type: user.user_type,
            store_id: user.store_id,
        },
        token,
    }))
}

/// GET /api/auth/me - current token's account
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<UserInfo>> {
    // Refresh from the database so a store created after token issuance
    // shows up without re-login.
    let fresh = user::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", user.id)))?;

    Ok(Json(UserInfo {
        id: fresh.user_id,
        email: fresh.email,
        user_type: fresh.user_type,
        store_id: fresh.store_id,
    }))
}
