use crate::log::appender::{
    CloudWatchAppender, CloudWatchAppenderConfig, ConsoleAppender, ConsoleAppenderConfig,
    LogAppender,
};
use anyhow::Result;
use serde::Deserialize;
use std::sync::Arc;

/// Appender 配置
///
/// 与 `{ type, options }` 形式的配置对应：
///
/// ```json5
/// {
///     type: "CloudWatchAppender",
///     options: { log_group: "app-logs", region: "us-east-1" }
/// }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", content = "options")]
pub enum AppenderConfig {
    ConsoleAppender(ConsoleAppenderConfig),
    CloudWatchAppender(CloudWatchAppenderConfig),
}

impl Default for AppenderConfig {
    fn default() -> Self {
        AppenderConfig::ConsoleAppender(ConsoleAppenderConfig::default())
    }
}

impl AppenderConfig {
    pub fn type_name(&self) -> &'static str {
        match self {
            AppenderConfig::ConsoleAppender(_) => "ConsoleAppender",
            AppenderConfig::CloudWatchAppender(_) => "CloudWatchAppender",
        }
    }
}

/// 根据配置创建 Appender
///
/// `local_echo` 只对远程后端生效，决定是否把每条消息同时写到本地终端
pub async fn create_appender(
    config: &AppenderConfig,
    local_echo: bool,
) -> Result<Arc<dyn LogAppender>> {
    match config {
        AppenderConfig::ConsoleAppender(options) => {
            Ok(Arc::new(ConsoleAppender::new(options.clone())))
        }
        AppenderConfig::CloudWatchAppender(options) => {
            Ok(Arc::new(CloudWatchAppender::new(options.clone(), local_echo).await?))
        }
    }
}
