use async_trait::async_trait;
use aws_config::Region;
use aws_credential_types::Credentials;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::operation::put_log_events::PutLogEventsError;
use aws_sdk_cloudwatchlogs::types::InputLogEvent;
use aws_sdk_cloudwatchlogs::Client;

use crate::log::log_record::LogEvent;
use crate::log::stream::{LogStreamClient, LogStreamError};

/// AWS 客户端连接参数
///
/// 凭证获取顺序（优先级从高到低）：
/// 1. `access_key_id` + `secret_access_key` - 直接配置的访问密钥
/// 2. 默认凭证链（环境变量、`~/.aws/credentials`、ECS / EC2 实例凭证等）
#[derive(Clone, Default)]
pub struct AwsClientOptions {
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

/// 基于 AWS CloudWatch Logs 的日志流客户端
#[derive(Clone)]
pub struct AwsLogStreamClient {
    client: Client,
}

impl AwsLogStreamClient {
    /// 加载 AWS 配置并创建客户端
    pub async fn connect(options: &AwsClientOptions) -> Result<Self, LogStreamError> {
        if options.access_key_id.is_some() != options.secret_access_key.is_some() {
            return Err(LogStreamError::Configuration(
                "access_key_id 和 secret_access_key 必须同时配置".to_string(),
            ));
        }

        let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(options.region.clone()));

        if let (Some(ak), Some(sk)) = (&options.access_key_id, &options.secret_access_key) {
            let credentials = Credentials::new(ak, sk, None, None, "logship");
            builder = builder.credentials_provider(credentials);
        }

        let sdk_config = builder.load().await;

        let client = match &options.endpoint {
            // 自定义 endpoint，用于 LocalStack 等兼容服务
            Some(endpoint) => {
                let conf = aws_sdk_cloudwatchlogs::config::Builder::from(&sdk_config)
                    .endpoint_url(endpoint)
                    .build();
                Client::from_conf(conf)
            }
            None => Client::new(&sdk_config),
        };

        Ok(Self { client })
    }

    /// 使用已构建好的 SDK 客户端
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogStreamClient for AwsLogStreamClient {
    async fn create_log_stream(&self, group: &str, stream: &str) -> Result<(), LogStreamError> {
        self.client
            .create_log_stream()
            .log_group_name(group)
            .log_stream_name(stream)
            .send()
            .await
            .map_err(|err| LogStreamError::StreamCreation {
                group: group.to_string(),
                stream: stream.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(())
    }

    async fn put_log_events(
        &self,
        group: &str,
        stream: &str,
        events: &[LogEvent],
        sequence_token: Option<&str>,
    ) -> Result<Option<String>, LogStreamError> {
        let append_error = |message: String| LogStreamError::Append {
            group: group.to_string(),
            stream: stream.to_string(),
            message,
        };

        let log_events = events
            .iter()
            .map(|event| {
                InputLogEvent::builder()
                    .timestamp(event.timestamp())
                    .message(event.message())
                    .build()
                    .map_err(|err| append_error(err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let output = self
            .client
            .put_log_events()
            .log_group_name(group)
            .log_stream_name(stream)
            .set_log_events(Some(log_events))
            .set_sequence_token(sequence_token.map(str::to_string))
            .send()
            .await
            .map_err(|err| match err.as_service_error() {
                Some(PutLogEventsError::InvalidSequenceTokenException(e)) => {
                    LogStreamError::InvalidSequenceToken {
                        expected: e.expected_sequence_token().map(str::to_string),
                    }
                }
                Some(PutLogEventsError::DataAlreadyAcceptedException(e)) => {
                    LogStreamError::InvalidSequenceToken {
                        expected: e.expected_sequence_token().map(str::to_string),
                    }
                }
                _ => append_error(DisplayErrorContext(&err).to_string()),
            })?;

        Ok(output.next_sequence_token().map(str::to_string))
    }
}
