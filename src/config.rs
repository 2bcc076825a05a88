//! Engine configuration
//!
//! Lives in the same JSON document as other device settings; unknown keys are
//! ignored.

use std::path::PathBuf;

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use crate::{
    effect::{DEFAULT_FPS, EffectContext},
    error::ConfigError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Ticks per second; effect timings are converted with this rate
    pub fps: u16,
    /// Directory animation names are resolved against
    pub animation_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            animation_dir: PathBuf::from("animations"),
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        if config.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(config)
    }

    /// Time between two ticks
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }

    /// Effect context with a fresh sound level
    pub fn context(&self) -> EffectContext {
        EffectContext::new(self.fps, self.animation_dir.clone())
    }
}
