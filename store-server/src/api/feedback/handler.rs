//! Feedback API Handlers

use axum::{Json, extract::State};

use shared::models::FeedbackWithDetails;

use crate::auth::StoreOwner;
use crate::core::ServerState;
use crate::db::repository::feedback;
use crate::utils::AppResult;

/// GET /api/feedback - 当前店铺的评价列表 (含顾客与商品名, 新评价在前)
pub async fn list(
    State(state): State<ServerState>,
    owner: StoreOwner,
) -> AppResult<Json<Vec<FeedbackWithDetails>>> {
    let feedback = feedback::find_by_store(&state.pool, owner.store_id).await?;
    Ok(Json(feedback))
}
