//! logship - 可插拔的日志输出库
//!
//! 提供统一的日志门面，支持本地终端输出和远程日志流（AWS CloudWatch Logs）两种后端。
//!
//! ## 模块
//!
//! - **cfg**: 配置加载（JSON5 / YAML / TOML）与人性化时长解析
//! - **log**: 日志门面、格式化器、输出器以及远程日志流客户端
//!
//! ## 设计理念
//!
//! - 🔌 **可插拔**: 所有后端实现同一个 `LogAppender` trait
//! - 🛡️ **不打扰业务**: 日志调用永远不会向调用方返回错误，远程失败时降级到本地输出
//! - 🧩 **显式注入**: 不依赖全局 logger，实例通过构造显式传递

pub mod cfg;
pub mod log;

// 重新导出主要的公共 API
pub use log::{
    AppenderConfig, CloudWatchAppender, CloudWatchAppenderConfig, ConsoleAppender,
    ConsoleAppenderConfig, LogAppender, LogEvent, LogFormatter, LogLevel, LogRecord,
    LogStreamClient, LogStreamError, Logger, LoggerConfig, MemoryAppender, Target,
};
