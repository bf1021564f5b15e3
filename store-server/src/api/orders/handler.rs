//! Order API Handlers
//!
//! 订单首次转入 "Delivered" 时, 在同一事务内为每个订单行写入一条销售
//! 台账记录; 重复应用同一状态是幂等空操作, 不会重复写台账。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use shared::models::{OrderCreate, OrderWithCustomer};

use crate::core::ServerState;
use crate::db::repository::order::{self, StatusTransition};
use crate::utils::validation::{self, MAX_SHORT_TEXT_LEN};
use crate::utils::{money, AppError, AppResult};

/// 查询参数沿用前端的 camelCase 约定
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreQuery {
    pub store_id: Option<i64>,
}

/// GET /api/orders?storeId=xxx - 店铺订单列表 (新订单在前)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<StoreQuery>,
) -> AppResult<Json<Vec<OrderWithCustomer>>> {
    let store_id = query
        .store_id
        .ok_or_else(|| AppError::validation("storeId is required in query"))?;

    let orders = order::find_by_store(&state.pool, store_id).await?;
    Ok(Json(orders))
}

#[derive(Serialize)]
pub struct OrderCreated {
    pub message: String,
    pub order_id: i64,
}

/// POST /api/orders - 创建订单 (含订单行, 单事务)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    if payload.items.is_empty() {
        return Err(AppError::validation(
            "items must contain at least one entry",
        ));
    }
    money::validate_amount(payload.total_amount, "total_amount")?;
    validation::validate_required_text(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;
    for (idx, item) in payload.items.iter().enumerate() {
        money::validate_quantity(item.quantity, &format!("items[{idx}].quantity"))?;
    }

    let order_id = order::create(&state.pool, &payload).await?;

    tracing::info!(order_id, store_id = payload.store_id, "Order created");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order and items saved successfully".to_string(),
            order_id,
        }),
    ))
}

/// 两个字段都必填; Option 仅为了给缺失字段一个明确的 400 响应
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
    pub store_id: Option<i64>,
}

#[derive(Serialize)]
pub struct StatusUpdateResponse {
    pub order_id: i64,
    pub status: String,
    pub sales_recorded: usize,
    pub message: String,
}

/// PUT /api/orders/{id}/status - 订单状态转换
///
/// 店铺归属与幂等判定折叠在同一条带条件 UPDATE 里; 非本店或不存在的
/// 订单返回 403。
pub async fn set_status(
    State(state): State<ServerState>,
    Path(order_id): Path<i64>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<StatusUpdateResponse>> {
    let (Some(status), Some(store_id)) = (payload.status, payload.store_id) else {
        return Err(AppError::validation(
            "Both status and storeId are required in body",
        ));
    };
    validation::validate_required_text(&status, "status", MAX_SHORT_TEXT_LEN)?;

    let outcome = order::set_status(&state.pool, order_id, store_id, &status).await?;

    let (sales_recorded, message) = match outcome {
        StatusTransition::Applied { sales_recorded } if sales_recorded > 0 => {
            tracing::info!(
                order_id,
                store_id,
                sales_recorded,
                "Order delivered, sales ledger written"
            );
            (sales_recorded, "Order marked as Delivered and sales recorded")
        }
        StatusTransition::Applied { .. } => (0, "Order status updated successfully"),
        StatusTransition::Unchanged => (0, "Order status unchanged"),
    };

    Ok(Json(StatusUpdateResponse {
        order_id,
        status,
        sales_recorded,
        message: message.to_string(),
    }))
}
