use crate::log::log_record::LogEvent;
use crate::log::stream::LogStreamError;

/// 远程日志服务客户端
///
/// 只描述日志流协议依赖的调用契约，具体的线上协议由实现方负责。
#[async_trait::async_trait]
pub trait LogStreamClient: Send + Sync {
    /// 在日志组 `group` 中创建名为 `stream` 的日志流
    async fn create_log_stream(&self, group: &str, stream: &str) -> Result<(), LogStreamError>;

    /// 向日志流写入事件
    ///
    /// `sequence_token` 为上一次成功写入返回的序列号，首次写入时为 None。
    /// 成功时返回下一次写入需要携带的序列号。
    async fn put_log_events(
        &self,
        group: &str,
        stream: &str,
        events: &[LogEvent],
        sequence_token: Option<&str>,
    ) -> Result<Option<String>, LogStreamError>;
}
