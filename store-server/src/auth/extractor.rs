//! 认证提取器
//!
//! `CurrentUser`: 从 Authorization 头验证 JWT 并注入账号上下文。
//! `StoreOwner`: 在 `CurrentUser` 之上要求店主身份, 店铺管理端点专用。

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::auth::jwt::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // 同一请求内已验证过则直接复用
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                AppError::unauthorized()
            })?;

        let token = JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

        let claims = state
            .get_jwt_service()
            .validate_token(token)
            .map_err(|e| {
                security_log!(
                    "WARN",
                    "auth_failed",
                    error = format!("{}", e),
                    uri = format!("{:?}", parts.uri)
                );
                match e {
                    JwtError::ExpiredToken => AppError::token_expired(),
                    _ => AppError::invalid_token(e.to_string()),
                }
            })?;

        let user = CurrentUser::try_from(claims)
            .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {}", e)))?;

        parts.extensions.insert(user.clone());
        Ok(user)
    }
}

/// 已验证的店主上下文: 账号 + 其店铺 ID
#[derive(Debug, Clone)]
pub struct StoreOwner {
    pub user: CurrentUser,
    pub store_id: i64,
}

impl FromRequestParts<ServerState> for StoreOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_shop_owner() {
            security_log!(
                "WARN",
                "owner_gate_rejected",
                user_id = user.id,
                uri = format!("{:?}", parts.uri)
            );
            return Err(AppError::forbidden("Shop owner account required"));
        }

        let store_id = user
            .store_id
            .ok_or_else(|| AppError::forbidden("Account is not linked to a store"))?;

        Ok(Self { user, store_id })
    }
}
