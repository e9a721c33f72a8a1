//! 运行时配置模块。
//!
//! 该模块负责从环境变量加载配置。配置在进程启动时加载一次，之后只读。

use crate::utils::path::RoutePrefix;
use anyhow::{Context, Result, bail};
use std::env;
use std::time::Duration;

/// 存储桶名称未设置时部署脚本写入的占位值
pub const BUCKET_PLACEHOLDER: &str = "undefined";

/// 未设置区域时使用的默认签名区域
pub const DEFAULT_REGION: &str = "ap-northeast-2";

/// 预签名 URL 的默认有效期（15 分钟）
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(15 * 60);

/// SigV4 预签名 URL 允许的最长有效期（7 天）
pub const MAX_EXPIRES_IN: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// 本地 HTTP 前端的默认监听地址
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// 运行时配置
#[derive(Debug, Clone)]
pub struct Settings {
    bucket: Option<String>,
    pub region: String,
    pub expires_in: Duration,
    pub route_prefix: RoutePrefix,
    pub listen_addr: String,
}

impl Settings {
    /// 从进程环境变量加载配置。
    ///
    /// # 环境变量
    ///
    /// * `BUCKET` - 目标存储桶名称
    /// * `REGION` / `AWS_REGION` - 签名区域（默认：ap-northeast-2）
    /// * `PRESIGN_EXPIRES_IN` - 预签名 URL 有效期，单位秒（默认：900）
    /// * `ROUTE_PREFIX` - 需要从路径中丢弃的路由前缀（默认：presign/objects）
    /// * `LISTEN_ADDR` - 本地 HTTP 前端监听地址（默认：0.0.0.0:3000）
    ///
    /// # Errors
    ///
    /// `PRESIGN_EXPIRES_IN` 不是合法的秒数时返回错误。
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 通过给定的查找函数加载配置，便于在测试中替换环境变量。
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = lookup("BUCKET");

        let region = lookup("REGION")
            .or_else(|| lookup("AWS_REGION"))
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let expires_in = match lookup("PRESIGN_EXPIRES_IN") {
            Some(raw) => parse_expires_in(&raw)?,
            None => DEFAULT_EXPIRES_IN,
        };

        let route_prefix = lookup("ROUTE_PREFIX")
            .map(|p| RoutePrefix::parse(&p))
            .unwrap_or_default();

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self::new(bucket)
            .with_region(region)
            .with_expires_in(expires_in)
            .with_route_prefix(route_prefix)
            .with_listen_addr(listen_addr))
    }

    /// 使用默认值构造配置，只指定存储桶。
    pub fn new(bucket: Option<String>) -> Self {
        Self {
            bucket,
            region: DEFAULT_REGION.to_string(),
            expires_in: DEFAULT_EXPIRES_IN,
            route_prefix: RoutePrefix::default(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    pub fn with_route_prefix(mut self, route_prefix: RoutePrefix) -> Self {
        self.route_prefix = route_prefix;
        self
    }

    pub fn with_listen_addr(mut self, listen_addr: impl Into<String>) -> Self {
        self.listen_addr = listen_addr.into();
        self
    }

    /// 获取已配置的存储桶名称。
    ///
    /// # 返回值
    ///
    /// 未设置、为空或为占位值 `undefined` 时返回 `None`。判断时忽略首尾空白，
    /// 返回值保持配置原样。
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref().filter(|b| {
            let trimmed = b.trim();
            !trimmed.is_empty() && trimmed != BUCKET_PLACEHOLDER
        })
    }
}

/// 解析预签名有效期（秒）。
fn parse_expires_in(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("PRESIGN_EXPIRES_IN 不是合法的秒数: {raw}"))?;
    let expires_in = Duration::from_secs(secs);

    if expires_in.is_zero() {
        bail!("PRESIGN_EXPIRES_IN 必须大于 0");
    }
    if expires_in > MAX_EXPIRES_IN {
        bail!(
            "PRESIGN_EXPIRES_IN 不能超过 {} 秒",
            MAX_EXPIRES_IN.as_secs()
        );
    }

    Ok(expires_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings.bucket(), None);
        assert_eq!(settings.region, DEFAULT_REGION);
        assert_eq!(settings.expires_in, Duration::from_secs(900));
        assert_eq!(settings.route_prefix.depth(), 2);
        assert_eq!(settings.listen_addr, DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn test_bucket_placeholder_is_missing() {
        assert_eq!(settings_from(&[("BUCKET", "undefined")]).unwrap().bucket(), None);
        assert_eq!(settings_from(&[("BUCKET", "")]).unwrap().bucket(), None);
        assert_eq!(
            settings_from(&[("BUCKET", "my-bucket")]).unwrap().bucket(),
            Some("my-bucket")
        );
        assert_eq!(settings_from(&[("BUCKET", "  ")]).unwrap().bucket(), None);
        assert_eq!(settings_from(&[("BUCKET", " undefined ")]).unwrap().bucket(), None);
    }

    #[test]
    fn test_bucket_is_not_rewritten() {
        assert_eq!(
            settings_from(&[("BUCKET", " my-bucket ")]).unwrap().bucket(),
            Some(" my-bucket ")
        );
    }

    #[test]
    fn test_region_lookup_order() {
        let settings = settings_from(&[("REGION", "us-west-2"), ("AWS_REGION", "eu-west-1")]).unwrap();
        assert_eq!(settings.region, "us-west-2");

        let settings = settings_from(&[("AWS_REGION", "eu-west-1")]).unwrap();
        assert_eq!(settings.region, "eu-west-1");
    }

    #[test]
    fn test_expires_in() {
        let settings = settings_from(&[("PRESIGN_EXPIRES_IN", "3600")]).unwrap();
        assert_eq!(settings.expires_in, Duration::from_secs(3600));

        assert!(settings_from(&[("PRESIGN_EXPIRES_IN", "abc")]).is_err());
        assert!(settings_from(&[("PRESIGN_EXPIRES_IN", "0")]).is_err());
        assert!(settings_from(&[("PRESIGN_EXPIRES_IN", "604801")]).is_err());
        assert!(settings_from(&[("PRESIGN_EXPIRES_IN", "604800")]).is_ok());
    }

    #[test]
    fn test_route_prefix() {
        let settings = settings_from(&[("ROUTE_PREFIX", "presign")]).unwrap();
        assert_eq!(settings.route_prefix.depth(), 1);
    }
}
