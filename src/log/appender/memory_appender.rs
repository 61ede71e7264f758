use crate::log::appender::LogAppender;
use crate::log::log_record::LogEvent;
use anyhow::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 内存输出器
///
/// 把每一行保存在内存中，可作为本地回显目标注入，也便于在测试中断言输出
#[derive(Debug, Default)]
pub struct MemoryAppender {
    lines: Mutex<Vec<String>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, line: &str) {
        self.guard().push(line.to_string());
    }

    /// 当前已记录的所有行
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl LogAppender for MemoryAppender {
    async fn append(&self, event: &LogEvent) -> Result<()> {
        self.write(event.message());
        Ok(())
    }
}
