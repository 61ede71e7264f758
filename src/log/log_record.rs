use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 调试信息，仅在开启 debug 时输出
    Debug,
    /// 一般信息
    Info,
    /// 错误信息
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "error" | "err" => Ok(LogLevel::Error),
            _ => Err(format!("invalid log level: {}", s)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// 日志记录，格式化之前的原始信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// 已完成插值的日志消息
    pub message: String,
    /// 实例名称
    pub instance: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            instance: instance.into(),
        }
    }
}

/// 日志事件
///
/// 交给输出器的最终单元：格式化后的一行文本，附带提交时刻的毫秒时间戳。
/// 创建后不可修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    timestamp: i64,
    message: String,
    instance: String,
}

impl LogEvent {
    /// 以当前时间创建事件
    pub fn new(message: impl Into<String>, instance: impl Into<String>) -> Self {
        Self::with_timestamp(chrono::Utc::now().timestamp_millis(), message, instance)
    }

    /// 以指定的毫秒时间戳创建事件
    pub fn with_timestamp(
        timestamp: i64,
        message: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            message: message.into(),
            instance: instance.into(),
        }
    }

    /// 毫秒时间戳（Unix epoch）
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse_and_display() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("err".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("warn".parse::<LogLevel>().is_err());

        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn test_log_event_timestamp_is_current() {
        let before = chrono::Utc::now().timestamp_millis();
        let event = LogEvent::new("[worker-1] [INFO] started 1", "worker-1");
        let after = chrono::Utc::now().timestamp_millis();

        assert!(event.timestamp() >= before && event.timestamp() <= after);
        assert_eq!(event.message(), "[worker-1] [INFO] started 1");
        assert_eq!(event.instance(), "worker-1");
    }

    #[test]
    fn test_log_event_with_timestamp() {
        let event = LogEvent::with_timestamp(1_700_000_000_000, "msg", "api");
        assert_eq!(event.timestamp(), 1_700_000_000_000);
    }
}
