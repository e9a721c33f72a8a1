use super::presign::PresignRouter;
use crate::event::{PresignEvent, PresignResponse};
use lambda_runtime::{Error, LambdaEvent};

/// 处理 Lambda 调用
///
/// 请求级错误都已转换为响应，因此这里只有在运行时本身出错时才会返回 `Err`。
///
/// # 参数
///
/// * `router` - 进程内共享的预签名路由。
/// * `event` - Lambda 调用事件。
pub async fn handle_lambda_event(
    router: &PresignRouter,
    event: LambdaEvent<PresignEvent>,
) -> Result<PresignResponse, Error> {
    let (payload, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "收到调用");

    Ok(router.handle(&payload).await)
}
