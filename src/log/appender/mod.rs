mod cloudwatch_appender;
mod console_appender;
mod memory_appender;
mod registry;
mod trait_;

pub use cloudwatch_appender::{CloudWatchAppender, CloudWatchAppenderConfig};
pub use console_appender::{ConsoleAppender, ConsoleAppenderConfig, Target};
pub use memory_appender::MemoryAppender;
pub use registry::{create_appender, AppenderConfig};
pub use trait_::LogAppender;
