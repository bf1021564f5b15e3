//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型与结果别名
//! - [`money`] - 金额计算（rust_decimal）
//! - [`validation`] - 输入校验
//! - 日志等工具

pub mod error;
pub mod logger;
pub mod money;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
