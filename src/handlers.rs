//! 请求处理模块
//!
//! 此模块包含了预签名请求的处理器：
//! - 预签名路由（核心逻辑）
//! - Lambda 调用处理器
//! - 本地 HTTP 前端处理器

pub mod lambda;
pub mod local;
pub mod presign;

// 重新导出主要的公共接口
pub use lambda::handle_lambda_event;
pub use local::handle_local;
pub use presign::PresignRouter;
