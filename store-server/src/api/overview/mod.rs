//! Overview API 模块
//!
//! 仪表盘聚合: 一次请求拿齐订单量、营收、榜单与趋势。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/overview/{store_id}", get(handler::dashboard))
}
