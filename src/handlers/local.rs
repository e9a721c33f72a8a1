use super::presign::PresignRouter;
use crate::event::{PresignEvent, PresignResponse};
use crate::utils::headers::to_header_map;
use axum::{
    extract::{Extension, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use std::sync::Arc;

/// 请求路径解码失败时的响应体
const INVALID_PATH: &str = "Invalid request path: not valid UTF-8";

/// 本地 HTTP 前端的请求处理函数。
///
/// 将 HTTP 请求的方法和路径转换为调用事件，交给预签名路由处理，
/// 再把结构化响应写回 HTTP 响应，行为与部署在 API Gateway 后面时一致。
/// API Gateway 在事件中传递的是解码后的路径，这里同样先做百分号解码，
/// 解码结果不是合法 UTF-8 时返回 400。
///
/// # 参数
///
/// * `Extension(router)` - 预签名路由实例。
/// * `req` - HTTP 请求。
///
/// # 返回值
///
/// 与 Lambda 返回值对应的 HTTP 响应。
pub async fn handle_local(
    Extension(router): Extension<Arc<PresignRouter>>,
    req: Request,
) -> Response {
    let path = match percent_decode_str(req.uri().path()).decode_utf8() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(path = req.uri().path(), error = %e, "请求路径解码失败");
            return (StatusCode::BAD_REQUEST, INVALID_PATH).into_response();
        }
    };

    let event = PresignEvent::new(req.method().as_str(), path);
    into_http_response(router.handle(&event).await)
}

/// 将结构化响应转换为 axum 响应。
fn into_http_response(response: PresignResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, to_header_map(&response.headers), response.body).into_response()
}
