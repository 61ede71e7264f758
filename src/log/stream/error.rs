use std::time::Duration;
use thiserror::Error;

/// 远程日志流错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogStreamError {
    #[error("创建日志流失败 [{group}/{stream}]: {message}")]
    StreamCreation {
        group: String,
        stream: String,
        message: String,
    },

    #[error("写入日志事件失败 [{group}/{stream}]: {message}")]
    Append {
        group: String,
        stream: String,
        message: String,
    },

    /// 服务端拒绝了携带的序列号，`expected` 为服务端期望的序列号（如果返回了的话）
    #[error("序列号不匹配, 期望: {expected:?}")]
    InvalidSequenceToken { expected: Option<String> },

    #[error("远程调用超时 [{operation}]: {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("配置错误: {0}")]
    Configuration(String),
}

impl LogStreamError {
    /// 服务端期望的序列号
    pub fn expected_sequence_token(&self) -> Option<&str> {
        match self {
            LogStreamError::InvalidSequenceToken { expected } => expected.as_deref(),
            _ => None,
        }
    }
}
