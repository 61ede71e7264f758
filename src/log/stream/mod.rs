//! 远程日志流客户端
//!
//! `LogStreamClient` 抽象了远程日志服务的两个调用：创建日志流和写入日志事件。
//! `AwsLogStreamClient` 是基于 AWS CloudWatch Logs 的实现。

mod aws_client;
mod client;
mod error;

pub use aws_client::{AwsClientOptions, AwsLogStreamClient};
pub use client::LogStreamClient;
pub use error::LogStreamError;
