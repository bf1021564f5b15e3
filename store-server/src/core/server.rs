//! HTTP 服务器
//!
//! 组装路由、中间件并启动 axum 服务。

use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, extract::Request};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::{Config, ServerState};

/// 请求访问日志中间件
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// 组装完整的应用路由
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::customer_auth::router())
        .merge(crate::api::stores::router())
        .merge(crate::api::customers::router())
        .merge(crate::api::products::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::feedback::router())
        .merge(crate::api::statistics::router())
        .merge(crate::api::overview::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// HTTP 服务器
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    /// 创建服务器 (启动时初始化状态)
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// 使用已初始化的状态创建服务器
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// 启动服务器并阻塞直到收到关闭信号
    pub async fn run(mut self) -> anyhow::Result<()> {
        let state = match self.state.take() {
            Some(state) => state,
            None => ServerState::initialize(&self.config).await?,
        };

        let app = build_app(state);

        let addr = format!("{}:{}", self.config.host, self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("HTTP server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
