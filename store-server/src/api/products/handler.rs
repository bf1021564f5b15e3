//! Product API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use shared::models::Product;

use crate::core::ServerState;
use crate::db::repository::product;
use crate::utils::{AppError, AppResult};

/// 查询参数沿用前端的 camelCase 约定
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreQuery {
    pub store_id: Option<i64>,
}

/// GET /api/products?storeId=xxx - 店铺商品列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<StoreQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let store_id = query
        .store_id
        .ok_or_else(|| AppError::validation("storeId is required in query"))?;

    let products = product::find_by_store(&state.pool, store_id).await?;
    Ok(Json(products))
}
