use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// 配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON，按 JSON5 解析（支持注释、尾随逗号、未引用的键）
    Json,
    /// YAML
    Yaml,
    /// TOML
    Toml,
}

impl ConfigFormat {
    /// 根据扩展名推断格式
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "json" | "json5" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(anyhow!("不支持的文件格式: {}", ext)),
        }
    }

    /// 根据文件路径推断格式
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| anyhow!("无法识别配置文件格式: {}", path.display()))?;
        Self::from_extension(ext)
    }
}

/// 按指定格式解析配置字符串
pub fn parse_str<T: DeserializeOwned>(content: &str, format: ConfigFormat) -> Result<T> {
    match format {
        ConfigFormat::Json => Ok(json5::from_str(content)?),
        ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        ConfigFormat::Toml => Ok(toml::from_str(content)?),
    }
}

/// 读取并解析配置文件，格式由扩展名决定
pub fn load_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("读取配置文件失败 {}: {}", path.display(), e))?;
    parse_str(&content, format)
}
