//! 工具函数模块
//!
//! 此模块包含了项目中使用的各种工具函数：
//! - HTTP头部处理工具
//! - 路径处理工具（路由前缀与对象键提取）

pub mod headers;
pub mod path;
