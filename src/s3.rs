//! S3模块
//!
//! 该模块负责与S3交互：客户端初始化和预签名URL生成。

// 声明子模块
pub mod client;
pub mod presign;

// 重新导出常用的类型和函数
pub use client::{build_s3_client, static_credentials_client};
pub use presign::{ObjectSigner, S3Signer};

#[cfg(test)]
pub use presign::MockObjectSigner;
