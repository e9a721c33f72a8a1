use crate::config::Settings;
use crate::error::PresignError;
use crate::event::{PresignEvent, PresignResponse};
use crate::s3::ObjectSigner;
use crate::utils::path::derive_key;
use http::Method;
use std::sync::Arc;

/// 事件中缺少方法时在错误信息里使用的名称
const UNDEFINED_METHOD: &str = "undefined";

/// 预签名请求路由
///
/// 将入站事件映射为响应：校验方法和存储桶配置，从路径中提取对象键，
/// 然后委托签名服务生成 URL。本身不持有可变状态，可以在并发调用间共享。
#[derive(Clone)]
pub struct PresignRouter {
    signer: Arc<dyn ObjectSigner>,
    settings: Arc<Settings>,
}

impl PresignRouter {
    /// 创建路由。
    ///
    /// # 参数
    ///
    /// * `signer` - 签名服务，进程内只创建一次。
    /// * `settings` - 运行时配置。
    pub fn new(signer: Arc<dyn ObjectSigner>, settings: Arc<Settings>) -> Self {
        Self { signer, settings }
    }

    /// 处理事件并返回预签名 URL。
    ///
    /// # 返回值
    ///
    /// 成功时返回预签名 URL。
    ///
    /// # Errors
    ///
    /// - 方法不是 GET：`UnimplementedHttpMethod`
    /// - 未配置存储桶：`MissingBucketName`
    /// - 签名失败：`Signer`，不重试
    pub async fn route(&self, event: &PresignEvent) -> Result<String, PresignError> {
        let method = event.http_method.as_deref();
        if method != Some(Method::GET.as_str()) {
            return Err(PresignError::UnimplementedHttpMethod(
                method.unwrap_or(UNDEFINED_METHOD).to_string(),
            ));
        }

        let bucket = self
            .settings
            .bucket()
            .ok_or(PresignError::MissingBucketName)?;

        // 空键原样交给签名服务
        let key = derive_key(
            event.path.as_deref().unwrap_or_default(),
            self.settings.route_prefix.depth(),
        );

        let url = self.signer.presign_get(bucket, &key).await?;
        tracing::info!(bucket, key = %key, "已生成预签名 URL");
        Ok(url)
    }

    /// 处理事件并生成响应。
    ///
    /// 所有错误都在这里转换为结构化响应，不会向调用方传播。
    ///
    /// # 返回值
    ///
    /// 成功时返回 301 重定向，`Location` 为预签名 URL；失败时按错误类型返回 400、204 或 500。
    pub async fn handle(&self, event: &PresignEvent) -> PresignResponse {
        match self.route(event).await {
            Ok(url) => PresignResponse::redirect(url),
            Err(err) => {
                tracing::error!(
                    method = event.http_method.as_deref().unwrap_or(UNDEFINED_METHOD),
                    path = event.path.as_deref().unwrap_or_default(),
                    error = %err,
                    "预签名请求处理失败"
                );
                err.into_response()
            }
        }
    }
}
