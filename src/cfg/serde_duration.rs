use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

pub use serde_with::{serde_as, DeserializeAs, SerializeAs};

/// Duration 的人性化格式
///
/// 支持格式: "500ms", "5s", "2m", "1h", "1m30s"
pub struct HumanDur;

impl SerializeAs<Duration> for HumanDur {
    fn serialize_as<S>(source: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(*source))
    }
}

impl<'de> DeserializeAs<'de, Duration> for HumanDur {
    fn deserialize_as<D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }
}

/// 解析时间字符串: "1m30s" -> Duration
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return Err(anyhow!("空字符串"));
    }

    let mut total = Duration::ZERO;
    let mut rest = s.as_str();
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| anyhow!("缺少时间单位: {}", s))?;
        if num_end == 0 {
            return Err(anyhow!("期望数字: {}", rest));
        }
        let value: f64 = rest[..num_end]
            .parse()
            .map_err(|_| anyhow!("无效数字: {}", &rest[..num_end]))?;

        let unit_part = &rest[num_end..];
        let unit_end = unit_part
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(unit_part.len());
        let unit = &unit_part[..unit_end];

        let secs = match unit {
            "ms" => value / 1000.0,
            "s" => value,
            "m" => value * 60.0,
            "h" => value * 3600.0,
            "" => return Err(anyhow!("缺少时间单位: {}", s)),
            _ => return Err(anyhow!("不支持的时间单位: {}", unit)),
        };
        let part = Duration::try_from_secs_f64(secs)
            .map_err(|e| anyhow!("时长超出范围: {}: {}", s, e))?;
        total = total
            .checked_add(part)
            .ok_or_else(|| anyhow!("时长超出范围: {}", s))?;
        rest = &unit_part[unit_end..];
    }

    Ok(total)
}

/// Duration 格式化为字符串，不足一秒或非整秒时使用毫秒
pub fn format_duration(duration: Duration) -> String {
    if duration.subsec_millis() != 0 || (duration.as_secs() == 0 && !duration.is_zero()) {
        return format!("{}ms", duration.as_millis());
    }

    let secs = duration.as_secs();
    if secs == 0 {
        "0s".to_string()
    } else if secs % 3600 == 0 {
        format!("{}h", secs / 3600)
    } else if secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}
