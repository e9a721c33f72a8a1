//! 请求错误模块
//!
//! 所有请求级错误在边界处统一转换为结构化响应，不会向触发方抛出。

use crate::event::PresignResponse;
use http::StatusCode;
use thiserror::Error;

/// 未知错误时的默认响应体
pub const UNKNOWN_SERVER_ERROR: &str = "Unknown server error";

/// 处理预签名请求时可能出现的错误
#[derive(Debug, Error)]
pub enum PresignError {
    /// 不支持的 HTTP 方法（当前只支持 GET）
    #[error("Unimplemented HTTP method: {0}")]
    UnimplementedHttpMethod(String),

    /// 未配置存储桶名称
    #[error("No bucket name provided.")]
    MissingBucketName,

    /// 存储桶为空，当前没有代码路径会产生该错误
    #[error("Bucket is empty.")]
    EmptyBucket,

    /// 签名服务调用失败
    #[error(transparent)]
    Signer(#[from] anyhow::Error),
}

impl PresignError {
    /// 错误对应的 HTTP 状态码。
    pub fn status_code(&self) -> StatusCode {
        match self {
            PresignError::UnimplementedHttpMethod(_) | PresignError::MissingBucketName => {
                StatusCode::BAD_REQUEST
            }
            PresignError::EmptyBucket => StatusCode::NO_CONTENT,
            PresignError::Signer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 将错误转换为返回给触发方的响应。
    ///
    /// # 返回值
    ///
    /// - 400：响应体为错误信息
    /// - 204：空响应体
    /// - 500：响应体为错误信息，信息为空时使用 `Unknown server error`
    pub fn into_response(self) -> PresignResponse {
        let status = self.status_code();
        match self {
            PresignError::EmptyBucket => PresignResponse::empty(status),
            PresignError::Signer(err) => {
                let message = err.to_string();
                if message.is_empty() {
                    PresignResponse::new(status, UNKNOWN_SERVER_ERROR)
                } else {
                    PresignResponse::new(status, message)
                }
            }
            other => PresignResponse::new(status, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unimplemented_method_maps_to_400() {
        let response = PresignError::UnimplementedHttpMethod("POST".into()).into_response();
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, "Unimplemented HTTP method: POST");
        assert!(response.headers.is_empty());
    }

    #[test]
    fn test_missing_bucket_maps_to_400() {
        let response = PresignError::MissingBucketName.into_response();
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, "No bucket name provided.");
    }

    #[test]
    fn test_empty_bucket_maps_to_204() {
        let response = PresignError::EmptyBucket.into_response();
        assert_eq!(response.status_code, 204);
        assert!(response.body.is_empty());
    }

    #[test]
    fn test_signer_error_maps_to_500() {
        let response =
            PresignError::Signer(anyhow::anyhow!("dispatch failure")).into_response();
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "dispatch failure");
    }

    #[test]
    fn test_signer_error_without_message() {
        let response = PresignError::Signer(anyhow::anyhow!("")).into_response();
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, UNKNOWN_SERVER_ERROR);
    }
}
