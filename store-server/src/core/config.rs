//! 服务器配置
//!
//! 全部来自环境变量 (支持 .env 文件):
//!
//! | 环境变量 | 默认值 | 说明 |
//! |---------|--------|------|
//! | `SERVER_HOST` | `0.0.0.0` | HTTP 监听地址 |
//! | `SERVER_PORT` | `3000` | HTTP 监听端口 |
//! | `DATABASE_PATH` | `store.db` | SQLite 数据库文件路径 |
//! | `JWT_SECRET` | (开发环境自动生成) | JWT 签名密钥, 至少 32 字符 |
//! | `JWT_EXPIRATION_MINUTES` | `60` | 令牌有效期 |
//! | `RUST_ENV` | `development` | 运行环境: development / production |
//! | `LOG_LEVEL` | `info` | 日志级别 |
//! | `LOG_DIR` | (无) | 设置后日志同时写入文件 |

use serde::{Deserialize, Serialize};

use crate::auth::JwtConfig;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP 监听地址
    pub host: String,
    /// HTTP 监听端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// JWT 配置
    pub jwt: JwtConfig,
    /// 运行环境
    pub environment: String,
    /// 日志目录 (设置后写入滚动日志文件)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "store.db".to_string()),
            jwt: JwtConfig::default(),
            environment: std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 带覆盖项的配置 (测试用)
    pub fn with_overrides(database_path: Option<String>, http_port: Option<u16>) -> Self {
        let mut config = Self::from_env();
        if let Some(path) = database_path {
            config.database_path = path;
        }
        if let Some(port) = http_port {
            config.http_port = port;
        }
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
