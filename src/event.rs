//! 调用事件与响应模块
//!
//! 定义 API Gateway 代理事件中本服务关心的字段，以及返回给触发方的结构化响应。

use http::{StatusCode, header};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 重定向响应中的头部名称
const LOCATION_HEADER: &str = "Location";

/// 入站调用事件
///
/// 只读取 `httpMethod` 和 `path` 两个字段，其余字段（如 `resource`、`headers`）全部忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PresignEvent {
    #[serde(rename = "httpMethod", default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl PresignEvent {
    /// 使用给定的方法和路径构造事件。
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: Some(method.into()),
            path: Some(path.into()),
        }
    }
}

/// 返回给触发方的响应
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PresignResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl PresignResponse {
    /// 构造不带额外头部的响应。
    ///
    /// # 参数
    ///
    /// * `status` - HTTP 状态码。
    /// * `body` - 响应体。
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// 构造空响应体的响应。
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, "")
    }

    /// 构造指向预签名 URL 的 301 重定向响应。
    ///
    /// # 参数
    ///
    /// * `location` - 重定向目标，写入 `Location` 头部。
    pub fn redirect(location: impl Into<String>) -> Self {
        let mut response = Self::empty(StatusCode::MOVED_PERMANENTLY);
        // API Gateway 原样透传头部名称，这里使用首字母大写的写法
        response
            .headers
            .insert(LOCATION_HEADER.to_owned(), location.into());
        response
    }

    /// 读取 `Location` 头部（大小写不敏感）。
    pub fn location(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(header::LOCATION.as_str()))
            .map(|(_, value)| value.as_str())
    }
}
