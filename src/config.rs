use serde::{Deserialize, Serialize};

use crate::ai::ScoringMode;
use crate::error::EngineError;

pub const DEFAULT_BOARD_SIZE: usize = 8;
const MIN_BOARD_SIZE: usize = 4;

/// Engine configuration, loadable from TOML.
///
/// ```toml
/// size = 10
/// scoring = "legacy"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board side length.
    pub size: usize,
    /// How the AI builds its candidate set.
    pub scoring: ScoringMode,
    /// Fixed AI seed. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            scoring: ScoringMode::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        let config: EngineConfig =
            toml::from_str(text).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        validate_size(self.size)
    }
}

/// The four-disc opening needs an even side of at least 4.
pub fn validate_size(size: usize) -> Result<(), EngineError> {
    if size < MIN_BOARD_SIZE || size % 2 != 0 {
        return Err(EngineError::InvalidSize(size));
    }
    Ok(())
}
