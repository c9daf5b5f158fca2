use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::speech::VoiceSettings;

/// Bounds of the artificial "thinking" pause, inclusive, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinkingDelayConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ThinkingDelayConfig {
    fn default() -> Self {
        Self {
            min_ms: 800,
            max_ms: 2000,
        }
    }
}

impl ThinkingDelayConfig {
    /// A fixed delay. `fixed(0)` disables the pause entirely.
    pub fn fixed(ms: u64) -> Self {
        Self { min_ms: ms, max_ms: ms }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevoConfig {
    pub thinking: ThinkingDelayConfig,
    /// `None` leaves capture open until a transcript arrives.
    pub capture_timeout_ms: Option<u64>,
    /// `None` keeps the whole session history.
    pub max_messages: Option<usize>,
    pub voice: VoiceSettings,
}

impl Default for LevoConfig {
    fn default() -> Self {
        Self {
            thinking: ThinkingDelayConfig::default(),
            capture_timeout_ms: Some(15_000),
            max_messages: None,
            voice: VoiceSettings::default(),
        }
    }
}

impl LevoConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thinking.min_ms > self.thinking.max_ms {
            return Err(ConfigError::Invalid(format!(
                "thinking.min_ms ({}) exceeds thinking.max_ms ({})",
                self.thinking.min_ms, self.thinking.max_ms
            )));
        }
        if self.max_messages == Some(0) {
            return Err(ConfigError::Invalid("max_messages must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn capture_timeout(&self) -> Option<Duration> {
        self.capture_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = LevoConfig::from_json_str(r#"{ "thinking": { "max_ms": 900 } }"#).unwrap();
        assert_eq!(config.thinking.min_ms, 800);
        assert_eq!(config.thinking.max_ms, 900);
        assert_eq!(config.capture_timeout_ms, Some(15_000));
        assert_eq!(config.max_messages, None);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = LevoConfig::from_json_str(r#"{ "thinking": { "min_ms": 50, "max_ms": 10 } }"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = LevoConfig::from_json_str(r#"{ "max_messages": 0 }"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }
}
