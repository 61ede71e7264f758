use crate::log::appender::LogAppender;
use crate::log::log_record::LogEvent;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Stdout,
    #[default]
    Stderr,
}

/// ConsoleAppender 配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct ConsoleAppenderConfig {
    /// 输出目标，默认 stderr
    pub target: Target,

    /// 是否输出，关闭时所有写入都是空操作
    #[default = true]
    pub enabled: bool,
}

/// 终端输出器
///
/// 同步地把每一行写到 stdout / stderr，写入失败会被忽略
pub struct ConsoleAppender {
    config: ConsoleAppenderConfig,
}

impl ConsoleAppender {
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// 写入一行
    pub fn write(&self, line: &str) {
        if !self.config.enabled {
            return;
        }

        let _ = match self.config.target {
            Target::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", line).and_then(|_| stdout.flush())
            }
            Target::Stderr => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{}", line)
            }
        };
    }
}

#[async_trait::async_trait]
impl LogAppender for ConsoleAppender {
    async fn append(&self, event: &LogEvent) -> Result<()> {
        self.write(event.message());
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        if self.config.enabled && self.config.target == Target::Stdout {
            io::stdout().lock().flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_appender_append() {
        let appender = ConsoleAppender::new(ConsoleAppenderConfig::default());

        let result = appender.append(&LogEvent::new("Test message", "test")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_console_appender_stdout_flush() {
        let appender = ConsoleAppender::new(ConsoleAppenderConfig {
            target: Target::Stdout,
            enabled: true,
        });

        appender.write("to stdout");
        assert!(appender.flush().await.is_ok());
    }

    #[tokio::test]
    async fn test_console_appender_disabled() {
        let appender = ConsoleAppender::new(ConsoleAppenderConfig {
            target: Target::Stdout,
            enabled: false,
        });
        assert!(!appender.is_enabled());

        // 关闭时仍然返回成功
        let result = appender.append(&LogEvent::new("dropped", "test")).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_console_appender_config_from_json() {
        let config: ConsoleAppenderConfig =
            json5::from_str(r#"{ target: "stdout" }"#).unwrap();
        assert_eq!(config.target, Target::Stdout);
        assert!(config.enabled);

        let config: ConsoleAppenderConfig = json5::from_str("{}").unwrap();
        assert_eq!(config, ConsoleAppenderConfig::default());
        assert_eq!(config.target, Target::Stderr);
    }
}
