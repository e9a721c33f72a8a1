use lambda_runtime::{Error, run, service_fn};
use presign_router::config::Settings;
use presign_router::handlers::{PresignRouter, handle_lambda_event};
use presign_router::s3::{S3Signer, build_s3_client};
use presign_router::{app, in_lambda, init_tracing};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 加载 .env 文件
    dotenvy::dotenv().ok();
    init_tracing();

    let settings = Arc::new(Settings::from_env()?);
    if settings.bucket().is_none() {
        tracing::warn!("未配置 BUCKET，所有请求都将返回 400");
    }

    // 签名客户端每个进程只初始化一次
    let client = build_s3_client(&settings).await;
    let signer = Arc::new(S3Signer::new(client, settings.expires_in));
    let router = PresignRouter::new(signer, settings.clone());

    if in_lambda() {
        return run(service_fn(|event| handle_lambda_event(&router, event))).await;
    }

    let listener = tokio::net::TcpListener::bind(settings.listen_addr.as_str()).await?;
    tracing::info!("服务器运行在 http://{}", settings.listen_addr);
    axum::serve(listener, app(router)).await?;

    Ok(())
}
