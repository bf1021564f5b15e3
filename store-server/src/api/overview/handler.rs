//! Overview API Handlers
//!
//! 订单和营收类指标走 orders 表 (经 customers 限定店铺), 销量类指标走
//! order_items 上冗余的 store_id, 两边口径一致。

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use shared::models::STATUS_PROCESSING;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// 销量榜条目 (取前五)
#[derive(Serialize, sqlx::FromRow)]
pub struct TopProduct {
    pub product_name: String,
    pub sold: i64,
}

/// 待处理订单行, 带客户名直接可展示
#[derive(Serialize, sqlx::FromRow)]
pub struct PendingOrder {
    pub order_id: i64,
    pub total_amount: f64,
    pub status: String,
    pub customer_name: String,
}

/// 订单状态直方图条目
#[derive(Serialize, sqlx::FromRow)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// 按日营收点 (date 为 YYYY-MM-DD)
#[derive(Serialize, sqlx::FromRow)]
pub struct DailyRevenue {
    pub date: String,
    pub revenue: f64,
}

/// 仪表盘响应
#[derive(Serialize)]
pub struct OverviewResponse {
    pub total_orders: i64,
    pub products_sold: i64,
    pub total_customers: i64,
    pub total_revenue: f64,
    pub top_products: Vec<TopProduct>,
    pub pending_orders: Vec<PendingOrder>,
    pub order_status_counts: Vec<StatusCount>,
    pub daily_revenue: Vec<DailyRevenue>,
}

/// GET /api/overview/{store_id} - 店铺仪表盘聚合
pub async fn dashboard(
    State(state): State<ServerState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<OverviewResponse>> {
    let pool = &state.pool;

    let total_orders = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) \
         FROM orders o \
         JOIN customers c ON o.customer_id = c.customer_id \
         WHERE c.store_id = ?",
    )
    .bind(store_id)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    let products_sold = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(quantity), 0) FROM order_items WHERE store_id = ?",
    )
    .bind(store_id)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    let total_customers =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers WHERE store_id = ?")
            .bind(store_id)
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

    let total_revenue = sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(o.total_amount), 0.0) \
         FROM orders o \
         JOIN customers c ON o.customer_id = c.customer_id \
         WHERE c.store_id = ?",
    )
    .bind(store_id)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    let top_products = sqlx::query_as::<_, TopProduct>(
        "SELECT p.product_name, SUM(oi.quantity) AS sold \
         FROM order_items oi \
         JOIN products p ON oi.product_id = p.product_id \
         WHERE oi.store_id = ? \
         GROUP BY oi.product_id \
         ORDER BY sold DESC \
         LIMIT 5",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    let pending_orders = sqlx::query_as::<_, PendingOrder>(
        "SELECT o.order_id, o.total_amount, o.status, c.customer_name \
         FROM orders o \
         JOIN customers c ON o.customer_id = c.customer_id \
         WHERE c.store_id = ? AND o.status = ?",
    )
    .bind(store_id)
    .bind(STATUS_PROCESSING)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    let order_status_counts = sqlx::query_as::<_, StatusCount>(
        "SELECT o.status, COUNT(*) AS count \
         FROM orders o \
         JOIN customers c ON o.customer_id = c.customer_id \
         WHERE c.store_id = ? \
         GROUP BY o.status",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    let daily_revenue = sqlx::query_as::<_, DailyRevenue>(
        "SELECT date(o.date_ordered / 1000, 'unixepoch') AS date, \
                SUM(o.total_amount) AS revenue \
         FROM orders o \
         JOIN customers c ON o.customer_id = c.customer_id \
         WHERE c.store_id = ? \
         GROUP BY date \
         ORDER BY date",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(OverviewResponse {
        total_orders,
        products_sold,
        total_customers,
        total_revenue,
        top_products,
        pending_orders,
        order_status_counts,
        daily_revenue,
    }))
}
