use crate::log::log_record::LogEvent;
use anyhow::Result;

/// 日志输出器 trait
///
/// 所有后端（本地终端、远程日志流）都实现该 trait，
/// 由 Logger 门面统一分发 info / debug / err。
#[async_trait::async_trait]
pub trait LogAppender: Send + Sync {
    /// 输出一条日志事件
    async fn append(&self, event: &LogEvent) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}
