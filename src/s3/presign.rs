//! S3预签名URL模块
//!
//! 该模块负责生成S3对象的预签名GET URL。

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::{Client, presigning::PresigningConfig};
use std::time::Duration;

/// 对象签名服务
///
/// 为 (存储桶, 键) 生成限时可用的 GET URL。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectSigner: Send + Sync {
    async fn presign_get(&self, bucket: &str, key: &str) -> Result<String>;
}

/// 基于 AWS SDK 的签名服务
#[derive(Debug, Clone)]
pub struct S3Signer {
    client: Client,
    expires_in: Duration,
}

impl S3Signer {
    /// 创建签名服务。
    ///
    /// # 参数
    ///
    /// * `client` - S3 客户端实例。
    /// * `expires_in` - 预签名 URL 的有效期。
    pub fn new(client: Client, expires_in: Duration) -> Self {
        Self { client, expires_in }
    }
}

#[async_trait]
impl ObjectSigner for S3Signer {
    /// 为 S3 键生成预签名 URL。
    ///
    /// # Errors
    ///
    /// 有效期不合法或签名失败（如凭证获取失败）时返回错误。
    #[tracing::instrument(skip(self))]
    async fn presign_get(&self, bucket: &str, key: &str) -> Result<String> {
        let presigning_config = PresigningConfig::expires_in(self.expires_in)?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config)
            .await?;

        Ok(presigned_request.uri().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::static_credentials_client;

    fn signer(expires_in: Duration) -> S3Signer {
        let client = static_credentials_client("ap-northeast-2", "AKIDEXAMPLE", "secret");
        S3Signer::new(client, expires_in)
    }

    #[tokio::test]
    /// 测试生成有效的预签名URL
    ///
    /// 验证生成的URL包含存储桶、键、签名和有效期。
    async fn test_presign_get_returns_signed_url() {
        let url = signer(Duration::from_secs(900))
            .presign_get("my-bucket", "test-file")
            .await
            .unwrap();

        assert!(url.starts_with("https://"));
        assert!(url.contains("my-bucket"));
        assert!(url.contains("test-file"));
        assert!(url.contains("X-Amz-Signature="));
        assert!(url.contains("X-Amz-Expires=900"));
    }

    #[tokio::test]
    /// 测试包含斜杠的键名
    async fn test_presign_get_key_with_slashes() {
        let url = signer(Duration::from_secs(60))
            .presign_get("my-bucket", "a/b/c")
            .await
            .unwrap();

        assert!(url.contains("/a/b/c?"));
    }

    #[tokio::test]
    /// 测试超过最长有效期时返回错误
    async fn test_presign_get_rejects_long_expiry() {
        let result = signer(Duration::from_secs(8 * 24 * 60 * 60))
            .presign_get("my-bucket", "test-file")
            .await;

        assert!(result.is_err());
    }
}
