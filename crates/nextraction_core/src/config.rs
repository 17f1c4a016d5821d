use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid console config: {0}")]
    Parse(String),
}

/// Front-end settings, fixed at build or page-load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub api_base: String,
    pub stats_interval_ms: u32,
    pub health_interval_ms: u32,
    pub progress_tick_ms: u32,
    pub progress_step: u8,
    pub progress_hide_delay_ms: u32,
    pub row_stagger_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub chat_client_path: String,
    /// Unset keeps requests unbounded, matching the browser default.
    pub request_timeout_ms: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000/api".to_string(),
            stats_interval_ms: 30_000,
            health_interval_ms: 10_000,
            progress_tick_ms: 100,
            progress_step: 5,
            progress_hide_delay_ms: 2_000,
            row_stagger_ms: 100,
            counter_duration_ms: 1_000,
            counter_steps: 60,
            chat_client_path: "../chat/index.html".to_string(),
            request_timeout_ms: None,
        }
    }
}

impl ConsoleConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: ConsoleConfig =
            ron::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validated()
    }

    /// Interval between count-up animation frames.
    pub fn counter_tick_ms(&self) -> u32 {
        (self.counter_duration_ms / self.counter_steps.max(1)).max(1)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Parse("api_base must not be empty".into()));
        }
        if self.progress_step == 0 || self.progress_step > 100 {
            return Err(ConfigError::Parse(
                "progress_step must be between 1 and 100".into(),
            ));
        }
        if self.counter_steps == 0 {
            return Err(ConfigError::Parse("counter_steps must be positive".into()));
        }
        Ok(self)
    }
}
