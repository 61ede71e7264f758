use crate::log::formatter::LogFormatter;
use crate::log::log_record::LogRecord;
use std::fmt::Write;

/// 文本格式化器
///
/// 输出格式: `[instance] [LEVEL] message`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> String {
        // 实例名 + 级别 + 分隔符约 16 字节
        let mut result =
            String::with_capacity(16 + record.instance.len() + record.message.len());

        result.push('[');
        result.push_str(&record.instance);
        result.push_str("] ");
        // 写入 String 不会失败
        let _ = write!(result, "[{}] ", record.level);
        result.push_str(&record.message);

        result
    }
}
