use crate::log::log_record::LogRecord;

/// 日志格式化器 trait
///
/// 负责将 LogRecord 格式化为一行文本
pub trait LogFormatter: Send + Sync {
    /// 格式化日志记录
    fn format(&self, record: &LogRecord) -> String;
}
