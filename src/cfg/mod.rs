//! cfg 模块 - 配置加载
//!
//! 提供多种格式的配置解析，以及人性化的时长序列化

pub mod loader;
pub mod serde_duration;

pub use loader::{load_file, parse_str, ConfigFormat};
pub use serde_duration::{format_duration, parse_duration, HumanDur};
