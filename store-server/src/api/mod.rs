//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`auth`] - 平台用户认证接口
//! - [`customer_auth`] - 店铺顾客认证接口
//! - [`stores`] - 店铺创建与展示接口
//! - [`customers`] - 顾客管理接口 (店主)
//! - [`products`] - 商品查询接口
//! - [`orders`] - 订单与状态转换接口
//! - [`feedback`] - 商品评价接口 (店主)
//! - [`statistics`] - 销售台账统计接口
//! - [`overview`] - 仪表盘聚合接口

pub mod auth;
pub mod customer_auth;
pub mod health;

// Store resources API
pub mod customers;
pub mod feedback;
pub mod orders;
pub mod overview;
pub mod products;
pub mod statistics;
pub mod stores;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
