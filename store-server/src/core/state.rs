//! 服务器共享状态
//!
//! 所有 handler 通过 [`ServerState`] 访问共享资源:
//!
//! | 字段 | 说明 |
//! |------|------|
//! | `config` | 服务器配置 |
//! | `pool` | SQLite 连接池 (WAL 模式) |
//! | `jwt_service` | JWT 签发/验证服务 |

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;

/// 服务器共享状态 (可廉价克隆)
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 初始化所有服务: 打开数据库、执行迁移、构建 JWT 服务
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;

        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// 基于已有连接池构建状态 (测试用)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
