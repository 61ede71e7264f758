//! 日志宏模块
//!
//! 提供 `format!` 风格插值的日志宏，展开为对 Logger 的异步调用
//!
//! # 示例
//!
//! ```ignore
//! use logship::{info, Logger, LoggerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let logger = Logger::new(LoggerConfig::default()).await?;
//!
//!     info!(logger, "started {}", 1);
//!
//!     Ok(())
//! }
//! ```

/// 记录 INFO 级别日志
///
/// ```ignore
/// info!(logger, "started {}", 1);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format!($($arg)+)).await
    };
}

/// 记录 DEBUG 级别日志，未开启 debug 时不会格式化消息
///
/// ```ignore
/// debug!(logger, "cache size: {}", cache.len());
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        if $logger.debug_enabled() {
            $logger.debug(::std::format!($($arg)+)).await
        }
    };
}

/// 记录 ERROR 级别日志
///
/// ```ignore
/// err!(logger, "request failed: {}", error);
/// ```
#[macro_export]
macro_rules! err {
    ($logger:expr, $($arg:tt)+) => {
        $logger.err(::std::format!($($arg)+)).await
    };
}
