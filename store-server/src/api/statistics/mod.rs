//! Statistics API 模块
//!
//! 销售台账的汇总视图, 只读 sales 表, 不回头扫订单。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/statistics", get(handler::totals))
        .route("/api/statistics/by-date", get(handler::by_date))
}
