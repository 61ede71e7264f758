use crate::cfg::serde_duration::{serde_as, HumanDur};
use crate::log::appender::{ConsoleAppender, ConsoleAppenderConfig, LogAppender};
use crate::log::log_record::LogEvent;
use crate::log::stream::{AwsClientOptions, AwsLogStreamClient, LogStreamClient, LogStreamError};
use anyhow::Result;
use garde::Validate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// CloudWatchAppender 配置
#[serde_as]
#[derive(Clone, Serialize, Deserialize, SmartDefault, Validate, PartialEq)]
#[serde(default)]
pub struct CloudWatchAppenderConfig {
    /// 日志组名称
    #[garde(length(min = 1))]
    pub log_group: String,

    /// AWS 区域
    #[garde(length(min = 1))]
    #[default = "us-east-1"]
    pub region: String,

    /// 自定义端点（LocalStack 等）
    #[garde(skip)]
    pub endpoint: Option<String>,

    #[garde(skip)]
    pub access_key_id: Option<String>,

    #[garde(skip)]
    pub secret_access_key: Option<String>,

    /// 单次远程调用的超时时间，超时按失败处理，必须大于 0
    #[garde(custom(non_zero_timeout))]
    #[serde_as(as = "HumanDur")]
    #[default(Duration::from_secs(5))]
    pub timeout: Duration,

    /// 写入因序列号不匹配被拒绝时，是否采用服务端返回的期望序列号
    #[garde(skip)]
    pub resync_sequence_token: bool,
}

impl CloudWatchAppenderConfig {
    fn client_options(&self) -> AwsClientOptions {
        AwsClientOptions {
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
        }
    }
}

// 不输出 secret_access_key
impl fmt::Debug for CloudWatchAppenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudWatchAppenderConfig")
            .field("log_group", &self.log_group)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .field("resync_sequence_token", &self.resync_sequence_token)
            .finish()
    }
}

/// 日志流状态
///
/// 只有成功创建日志流或成功写入之后才会被修改
#[derive(Debug, Default)]
struct StreamState {
    stream_name: Option<String>,
    sequence_token: Option<String>,
}

/// CloudWatch 输出器
///
/// 维护单个远程日志流的生命周期：
/// - 首次写入时以 UUID 为名创建日志流，创建失败则下次写入时重试
/// - 每次写入恰好发起一次远程调用、只包含一个事件，并携带上次返回的序列号
/// - 事件时间戳在拿到流状态锁、即将提交时重新生成
/// - 写入失败时序列号保持不变，也不会重建日志流
/// - 任何远程失败都降级到本地输出，`append` 总是返回成功
///
/// 开启本地回显时，每条消息无论远程结果如何都会写入本地输出，且只写一次。
pub struct CloudWatchAppender {
    config: CloudWatchAppenderConfig,
    client: Arc<dyn LogStreamClient>,
    local: Arc<dyn LogAppender>,
    local_echo: bool,
    // 远程调用期间持有锁，保证并发写入时不会重复建流或丢失序列号更新
    state: Mutex<StreamState>,
}

impl CloudWatchAppender {
    /// 创建基于 AWS SDK 的输出器，本地回显写到 stderr
    pub async fn new(config: CloudWatchAppenderConfig, local_echo: bool) -> Result<Self> {
        validate(&config)?;

        let client = AwsLogStreamClient::connect(&config.client_options()).await?;
        let local = ConsoleAppender::new(ConsoleAppenderConfig {
            enabled: local_echo,
            ..Default::default()
        });

        Ok(Self::from_parts(config, Arc::new(client), Arc::new(local), local_echo))
    }

    /// 使用指定的远程客户端和本地输出创建
    pub fn with_client(
        config: CloudWatchAppenderConfig,
        client: Arc<dyn LogStreamClient>,
        local: Arc<dyn LogAppender>,
        local_echo: bool,
    ) -> Result<Self> {
        validate(&config)?;
        Ok(Self::from_parts(config, client, local, local_echo))
    }

    fn from_parts(
        config: CloudWatchAppenderConfig,
        client: Arc<dyn LogStreamClient>,
        local: Arc<dyn LogAppender>,
        local_echo: bool,
    ) -> Self {
        Self {
            config,
            client,
            local,
            local_echo,
            state: Mutex::new(StreamState::default()),
        }
    }

    pub fn log_group(&self) -> &str {
        &self.config.log_group
    }

    /// 已确认创建的日志流名称
    pub async fn stream_name(&self) -> Option<String> {
        self.state.lock().await.stream_name.clone()
    }

    /// 下一次写入将携带的序列号
    pub async fn sequence_token(&self) -> Option<String> {
        self.state.lock().await.sequence_token.clone()
    }

    /// 把事件写入远程日志流
    async fn ship(&self, state: &mut StreamState, event: &LogEvent) -> Result<(), LogStreamError> {
        let group = self.config.log_group.as_str();

        let stream = match state.stream_name.clone() {
            Some(name) => name,
            None => {
                let name = Uuid::new_v4().to_string();
                self.bounded("create_log_stream", self.client.create_log_stream(group, &name))
                    .await?;
                tracing::debug!(log_group = group, log_stream = %name, "log stream created");

                state.stream_name = Some(name.clone());
                state.sequence_token = None;
                name
            }
        };

        // 持锁后重新取时间，保证时间戳与远程写入顺序一致
        let event = LogEvent::new(event.message(), event.instance());
        let result = self
            .bounded(
                "put_log_events",
                self.client.put_log_events(
                    group,
                    &stream,
                    std::slice::from_ref(&event),
                    state.sequence_token.as_deref(),
                ),
            )
            .await;

        match result {
            Ok(next_token) => {
                state.sequence_token = next_token;
                Ok(())
            }
            Err(err) => {
                if self.config.resync_sequence_token {
                    if let Some(expected) = err.expected_sequence_token() {
                        tracing::debug!(
                            log_group = group,
                            log_stream = %stream,
                            "adopting sequence token expected by the service"
                        );
                        state.sequence_token = Some(expected.to_string());
                    }
                }
                Err(err)
            }
        }
    }

    /// 为远程调用加上超时
    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, LogStreamError>>,
    ) -> Result<T, LogStreamError> {
        let timeout = self.config.timeout;
        tokio::time::timeout(timeout, call)
            .await
            .map_err(|_| LogStreamError::Timeout { operation, timeout })?
    }

    async fn echo(&self, event: &LogEvent) {
        if !self.local_echo {
            return;
        }
        if let Err(err) = self.local.append(event).await {
            tracing::debug!(error = %err, "local echo failed");
        }
    }
}

#[async_trait::async_trait]
impl LogAppender for CloudWatchAppender {
    async fn append(&self, event: &LogEvent) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            if let Err(err) = self.ship(&mut state, event).await {
                tracing::warn!(
                    log_group = %self.config.log_group,
                    error = %err,
                    "failed to ship log event, falling back to local output"
                );
            }
        }

        // 成功时是回显，失败时是降级输出
        self.echo(event).await;
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        self.local.flush().await
    }
}

fn non_zero_timeout(value: &Duration, _ctx: &()) -> garde::Result {
    if value.is_zero() {
        return Err(garde::Error::new("timeout must be greater than 0"));
    }
    Ok(())
}

fn validate(config: &CloudWatchAppenderConfig) -> Result<(), LogStreamError> {
    config
        .validate()
        .map_err(|errors| LogStreamError::Configuration(format!("{}", errors)))
}
