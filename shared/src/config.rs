use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DETECT_ENDPOINT: &str = "/detect";
pub const DEFAULT_HEALTH_ENDPOINT: &str = "/health";
pub const DEFAULT_FILE_FIELD: &str = "file";
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;
pub const DEFAULT_NOTICE_MS: u32 = 6_000;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
    #[error("{name} must be a positive integer, got {value:?}")]
    NotPositive { name: &'static str, value: String },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_detect_endpoint")]
    pub detect_endpoint: String,
    #[serde(default = "default_health_endpoint")]
    pub health_endpoint: String,
    #[serde(default = "default_file_field")]
    pub file_field: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u32,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: log::Level,
}

fn default_detect_endpoint() -> String {
    DEFAULT_DETECT_ENDPOINT.to_string()
}

fn default_health_endpoint() -> String {
    DEFAULT_HEALTH_ENDPOINT.to_string()
}

fn default_file_field() -> String {
    DEFAULT_FILE_FIELD.to_string()
}

fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

fn default_notice_ms() -> u32 {
    DEFAULT_NOTICE_MS
}

fn default_max_upload_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_allowed_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "bmp", "tiff"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_log_level() -> log::Level {
    log::Level::Info
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            detect_endpoint: default_detect_endpoint(),
            health_endpoint: default_health_endpoint(),
            file_field: default_file_field(),
            timeout_ms: default_timeout_ms(),
            notice_ms: default_notice_ms(),
            max_upload_bytes: default_max_upload_bytes(),
            allowed_extensions: default_allowed_extensions(),
            log_level: default_log_level(),
        }
    }
}

/// Raw values baked in at build time, typically from `option_env!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOverrides<'a> {
    pub detect_endpoint: Option<&'a str>,
    pub health_endpoint: Option<&'a str>,
    pub timeout_ms: Option<&'a str>,
    pub notice_ms: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

impl ClientConfig {
    /// Applies every valid override. Invalid ones keep the current value
    /// and are returned so the caller can report them once logging is up.
    pub fn with_overrides(mut self, overrides: ConfigOverrides<'_>) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();

        if let Some(raw) = overrides.detect_endpoint {
            match non_empty("WEEDSCAN_DETECT_URL", raw) {
                Ok(value) => self.detect_endpoint = value,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = overrides.health_endpoint {
            match non_empty("WEEDSCAN_HEALTH_URL", raw) {
                Ok(value) => self.health_endpoint = value,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = overrides.timeout_ms {
            match positive("WEEDSCAN_TIMEOUT_MS", raw) {
                Ok(value) => self.timeout_ms = value,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = overrides.notice_ms {
            match positive("WEEDSCAN_NOTICE_MS", raw) {
                Ok(value) => self.notice_ms = value,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = overrides.log_level {
            match raw.trim().parse::<log::Level>() {
                Ok(level) => self.log_level = level,
                Err(_) => errors.push(ConfigError::LogLevel(raw.to_string())),
            }
        }

        (self, errors)
    }

    pub fn timeout_secs(&self) -> u64 {
        (self.timeout_ms as u64).div_ceil(1000)
    }
}

fn non_empty(name: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ConfigError::Empty { name })
    } else {
        Ok(trimmed.to_string())
    }
}

fn positive(name: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::NotPositive {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();

        assert_eq!(config.detect_endpoint, "/detect");
        assert_eq!(config.file_field, "file");
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.allowed_extensions, vec!["png", "jpg", "jpeg", "bmp", "tiff"]);
        assert_eq!(config.timeout_secs(), 30);
    }

    #[test]
    fn test_valid_overrides_apply() {
        let (config, errors) = ClientConfig::default().with_overrides(ConfigOverrides {
            detect_endpoint: Some(" http://localhost:5000/detect "),
            timeout_ms: Some("1500"),
            log_level: Some("debug"),
            ..Default::default()
        });

        assert!(errors.is_empty());
        assert_eq!(config.detect_endpoint, "http://localhost:5000/detect");
        assert_eq!(config.timeout_ms, 1500);
        assert_eq!(config.timeout_secs(), 2);
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.health_endpoint, "/health");
    }

    #[test]
    fn test_invalid_overrides_keep_defaults() {
        let (config, errors) = ClientConfig::default().with_overrides(ConfigOverrides {
            detect_endpoint: Some("   "),
            timeout_ms: Some("0"),
            notice_ms: Some("soon"),
            log_level: Some("loud"),
            ..Default::default()
        });

        assert_eq!(config, ClientConfig::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], ConfigError::Empty { name: "WEEDSCAN_DETECT_URL" });
        assert_eq!(errors[3], ConfigError::LogLevel("loud".into()));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"detect_endpoint": "/api/detect", "timeout_ms": 5000}"#).unwrap();

        assert_eq!(config.detect_endpoint, "/api/detect");
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.file_field, "file");
        assert_eq!(config.log_level, log::Level::Info);
    }
}
