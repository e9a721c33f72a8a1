//! S3 预签名 URL 服务库
//!
//! 这是一个部署在 API Gateway 后面的 Lambda 函数，主要功能包括：
//! - 校验请求方法和存储桶配置
//! - 从请求路径中提取对象键
//! - 返回指向限时预签名 URL 的 301 重定向
//! - 提供本地 HTTP 前端，便于脱离 Lambda 调试

pub mod config;
pub mod error;
pub mod event;
pub mod handlers;
pub mod s3;
pub mod utils;

use handlers::PresignRouter;
use http::Method;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

/// Lambda 运行时注入的环境变量，存在时表示运行在 Lambda 中
pub const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

/// 是否运行在 Lambda 环境中
pub fn in_lambda() -> bool {
    std::env::var_os(LAMBDA_RUNTIME_API).is_some()
}

/// 初始化日志
///
/// 日志级别通过 `RUST_LOG` 控制，默认 `info`。在 Lambda 中关闭 ANSI 颜色，
/// 避免 CloudWatch 日志中出现转义字符。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_ansi(!in_lambda())
        .init();
}

/// 创建并配置本地 HTTP 前端
///
/// 所有路径和方法都交给预签名路由处理，包括：
/// - CORS配置，允许GET、HEAD和OPTIONS请求
/// - 请求追踪中间件
///
/// # 参数
///
/// * `router` - 预签名路由实例
///
/// # Returns
///
/// 返回配置好的Axum Router实例
pub fn app(router: PresignRouter) -> axum::Router {
    // 配置 CORS
    let cors = CorsLayer::permissive()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(AllowHeaders::any());

    axum::Router::new()
        .fallback(handlers::handle_local)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum::extract::Extension(Arc::new(router)))
}
