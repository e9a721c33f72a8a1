//! S3客户端模块
//!
//! 该模块负责S3客户端的创建。客户端在进程启动时创建一次，之后以只读方式在并发调用间共享。

use crate::config::Settings;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;

/// 使用默认凭证链创建 S3 客户端。
///
/// 凭证按 AWS 标准顺序查找：环境变量、共享配置文件、容器/实例元数据（Lambda 执行角色）。
/// 签名区域取自配置。
///
/// # 参数
///
/// * `settings` - 运行时配置。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`。
pub async fn build_s3_client(settings: &Settings) -> Client {
    let region_provider = RegionProviderChain::first_try(Some(Region::new(settings.region.clone())));

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    tracing::info!(region = %settings.region, "S3 客户端初始化完成");
    Client::new(&aws_config)
}

/// 使用固定凭证创建 S3 客户端，不读取任何环境配置。
///
/// 预签名只在本地计算签名，不访问网络，因此该客户端适合本地调试和测试。
///
/// # 参数
///
/// * `region` - 签名区域。
/// * `access_key_id` - 访问密钥 ID。
/// * `secret_access_key` - 秘密访问密钥。
pub fn static_credentials_client(
    region: &str,
    access_key_id: &str,
    secret_access_key: &str,
) -> Client {
    let credentials = Credentials::new(
        access_key_id,
        secret_access_key,
        None,
        None,
        "static-credentials",
    );

    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .credentials_provider(credentials)
        .build();

    Client::from_conf(config)
}
