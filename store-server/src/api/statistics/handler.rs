//! Statistics API Handlers

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use shared::models::{SALE_TYPE_OFFLINE, SALE_TYPE_ONLINE};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// 查询参数沿用前端的 camelCase 约定
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreQuery {
    pub store_id: Option<i64>,
}

/// 台账总览: 记录笔数与按渠道拆分的销售额
#[derive(Serialize, sqlx::FromRow)]
pub struct SalesTotals {
    pub total_orders: i64,
    pub total_sales: f64,
    pub online_sales: f64,
    pub offline_sales: f64,
}

/// 按日分布, BTreeMap 保证日期键有序输出
#[derive(Serialize)]
pub struct SalesByDate {
    pub online: BTreeMap<String, f64>,
    pub offline: BTreeMap<String, f64>,
}

#[derive(sqlx::FromRow)]
struct DailyRow {
    date: String,
    sale_type: String,
    total: f64,
}

/// GET /api/statistics?storeId=xxx - 店铺台账汇总
pub async fn totals(
    State(state): State<ServerState>,
    Query(query): Query<StoreQuery>,
) -> AppResult<Json<SalesTotals>> {
    let store_id = query
        .store_id
        .ok_or_else(|| AppError::validation("storeId is required in query"))?;

    let totals = sqlx::query_as::<_, SalesTotals>(
        "SELECT \
             COUNT(*) AS total_orders, \
             COALESCE(SUM(total_sale_amount), 0.0) AS total_sales, \
             COALESCE(SUM(CASE WHEN sale_type = 'online' THEN total_sale_amount ELSE 0.0 END), 0.0) AS online_sales, \
             COALESCE(SUM(CASE WHEN sale_type = 'offline' THEN total_sale_amount ELSE 0.0 END), 0.0) AS offline_sales \
         FROM sales \
         WHERE store_id = ?",
    )
    .bind(store_id)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(totals))
}

/// GET /api/statistics/by-date?storeId=xxx - 按日、按渠道的销售额
///
/// sale_date 存毫秒时间戳, 在 SQL 里折算成 YYYY-MM-DD 再分组。
pub async fn by_date(
    State(state): State<ServerState>,
    Query(query): Query<StoreQuery>,
) -> AppResult<Json<SalesByDate>> {
    let store_id = query
        .store_id
        .ok_or_else(|| AppError::validation("storeId is required in query"))?;

    let rows = sqlx::query_as::<_, DailyRow>(
        "SELECT \
             date(sale_date / 1000, 'unixepoch') AS date, \
             sale_type, \
             SUM(total_sale_amount) AS total \
         FROM sales \
         WHERE store_id = ? \
         GROUP BY date, sale_type \
         ORDER BY date",
    )
    .bind(store_id)
    .fetch_all(&state.pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    let mut online = BTreeMap::new();
    let mut offline = BTreeMap::new();
    for row in rows {
        match row.sale_type.as_str() {
            SALE_TYPE_ONLINE => {
                online.insert(row.date, row.total);
            }
            SALE_TYPE_OFFLINE => {
                offline.insert(row.date, row.total);
            }
            _ => {}
        }
    }

    Ok(Json(SalesByDate { online, offline }))
}
