//! 日志模块
//!
//! 提供统一的日志门面，后端可以是本地终端，也可以是远程日志流。
//!
//! # 特性
//!
//! - 三个日志级别：Debug, Info, Error，DEBUG 需要显式开启
//! - 每条消息带 `[instance] [LEVEL]` 前缀
//! - ConsoleAppender：输出到 stdout / stderr
//! - CloudWatchAppender：写入 AWS CloudWatch Logs 日志流，失败时降级到本地输出
//! - 日志调用永远不会向调用方返回错误
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use logship::log::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = LoggerConfig::from_json(r#"
//!         {
//!             instance: "worker-1",
//!             debug: false,
//!             local_echo: true,
//!             appender: {
//!                 type: "CloudWatchAppender",
//!                 options: {
//!                     log_group: "app-logs",
//!                     region: "us-east-1",
//!                     timeout: "5s"
//!                 }
//!             }
//!         }
//!     "#)?;
//!
//!     let logger = Logger::new(config).await?;
//!
//!     logger.info("application started").await;
//!     logship::info!(logger, "started {}", 1);
//!
//!     Ok(())
//! }
//! ```

pub mod appender;
pub mod formatter;
pub mod log_record;
pub mod logger;
pub mod macros;
pub mod stream;

pub use appender::{
    create_appender, AppenderConfig, CloudWatchAppender, CloudWatchAppenderConfig,
    ConsoleAppender, ConsoleAppenderConfig, LogAppender, MemoryAppender, Target,
};
pub use formatter::{LogFormatter, TextFormatter};
pub use log_record::{LogEvent, LogLevel, LogRecord};
pub use logger::{Logger, LoggerConfig};
pub use stream::{AwsClientOptions, AwsLogStreamClient, LogStreamClient, LogStreamError};
