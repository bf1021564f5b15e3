//! Store Server - 多租户电商管理后台
//!
//! # 架构概述
//!
//! 本模块是 Store Server 的主入口，提供以下核心功能：
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系, 平台用户与店铺顾客双轨
//! - **数据库** (`db`): SQLite (WAL) + 迁移 + 仓储层
//! - **HTTP API** (`api`): RESTful API 接口
//! - **销售台账**: 订单首次交付时逐行落账, 幂等
//!
//! # 模块结构
//!
//! ```text
//! store-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── auth/          # JWT 认证、密码散列、提取器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层与仓储
//! └── utils/         # 错误、校验、金额、日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService, StoreOwner};
pub use core::{Config, Server, ServerState, build_app};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 .env、准备日志目录并初始化日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 缺失不是错误, 环境变量可以直接来自进程环境
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();

    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }

    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_____  ________
  \__ \/ __/ __ \/ ___/ _ \
 ___/ / /_/ /_/ / /  /  __/
/____/\__/\____/_/   \___/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
