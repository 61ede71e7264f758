use crate::cfg::{load_file, parse_str, ConfigFormat};
use crate::log::appender::{create_appender, AppenderConfig, LogAppender};
use crate::log::formatter::{LogFormatter, TextFormatter};
use crate::log::log_record::{LogEvent, LogLevel, LogRecord};
use anyhow::{anyhow, Result};
use garde::Validate;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::path::Path;
use std::sync::Arc;

/// Logger 配置，创建后不可修改
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq, Validate)]
#[serde(default)]
pub struct LoggerConfig {
    /// 实例名称，附加在每条消息前
    #[garde(length(min = 1))]
    #[default = "default"]
    pub instance: String,

    /// 是否输出 DEBUG 级别日志
    #[garde(skip)]
    pub debug: bool,

    /// 使用远程后端时，是否同时把每条消息写到本地终端
    #[garde(skip)]
    #[default = true]
    pub local_echo: bool,

    /// Appender 配置
    #[garde(skip)]
    pub appender: AppenderConfig,
}

impl LoggerConfig {
    /// 从 JSON 字符串创建（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        parse_str(json_str, ConfigFormat::Json)
    }

    /// 从 YAML 字符串创建
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        parse_str(yaml_str, ConfigFormat::Yaml)
    }

    /// 从 TOML 字符串创建
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        parse_str(toml_str, ConfigFormat::Toml)
    }

    /// 从配置文件创建，格式由扩展名决定
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_file(path)
    }
}

/// 日志门面
///
/// 负责级别控制、格式化和实例标记，再把结果交给当前后端。
/// 所有方法都不会向调用方返回错误，后端失败只会以 tracing 诊断的形式出现。
pub struct Logger {
    config: LoggerConfig,
    formatter: Arc<dyn LogFormatter>,
    appender: Arc<dyn LogAppender>,
}

impl Logger {
    /// 根据配置创建 Logger 以及对应的后端
    pub async fn new(config: LoggerConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|errors| anyhow!("invalid logger config: {}", errors))?;

        let appender = create_appender(&config.appender, config.local_echo).await?;
        Ok(Self::from_parts(config, appender))
    }

    /// 使用指定的后端创建 Logger，`config.appender` 会被忽略
    pub fn with_appender(config: LoggerConfig, appender: Arc<dyn LogAppender>) -> Result<Self> {
        config
            .validate()
            .map_err(|errors| anyhow!("invalid logger config: {}", errors))?;

        Ok(Self::from_parts(config, appender))
    }

    fn from_parts(config: LoggerConfig, appender: Arc<dyn LogAppender>) -> Self {
        Self {
            config,
            formatter: Arc::new(TextFormatter::new()),
            appender,
        }
    }

    /// 替换格式化器
    pub fn with_formatter(mut self, formatter: Arc<dyn LogFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn instance(&self) -> &str {
        &self.config.instance
    }

    pub fn debug_enabled(&self) -> bool {
        self.config.debug
    }

    /// 记录日志
    pub async fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level == LogLevel::Debug && !self.config.debug {
            return;
        }

        let record = LogRecord::new(level, message, self.config.instance.as_str());
        let line = self.formatter.format(&record);

        // 时间戳取提交时刻
        let event = LogEvent::new(line, self.config.instance.as_str());
        if let Err(err) = self.appender.append(&event).await {
            tracing::warn!(instance = %self.config.instance, error = %err, "failed to append log event");
        }
    }

    /// 记录 INFO 级别日志
    pub async fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message).await
    }

    /// 记录 DEBUG 级别日志，未开启 debug 时为空操作
    pub async fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message).await
    }

    /// 记录 ERROR 级别日志
    pub async fn err(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message).await
    }

    /// 刷新后端缓冲区
    pub async fn flush(&self) {
        if let Err(err) = self.appender.flush().await {
            tracing::warn!(instance = %self.config.instance, error = %err, "failed to flush log appender");
        }
    }
}
