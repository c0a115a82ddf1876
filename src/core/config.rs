//! Game configuration types.
//!
//! A game is configured once at construction:
//! - Board shape and icon variety (`rows`, `cols`, `icon_count`)
//! - Optional `random_seed` for reproducible layouts
//! - `ScoringRules`: reward, penalty and completion bonus magnitudes
//! - `Timing`: how long failure feedback stays on screen
//!
//! Configurations can be built in code or loaded from TOML:
//!
//! ```
//! use rust_onet::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("rows = 4\ncols = 6\nicon_count = 5\nrandom_seed = 3").unwrap();
//! assert_eq!(config.rows, 4);
//! assert_eq!(config.random_seed, Some(3));
//! assert_eq!(config.scoring.match_reward, 10);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Score magnitudes applied by the outcome policy.
///
/// Values are magnitudes; the policy decides the sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Added for every cleared pair.
    pub match_reward: i64,
    /// Subtracted for every mismatched or blocked pick.
    pub mismatch_penalty: i64,
    /// Added once when the last pair is cleared.
    pub completion_bonus: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            match_reward: 10,
            mismatch_penalty: 1,
            completion_bonus: 50,
        }
    }
}

/// Deferred-action durations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// How long a failed pair stays selected before the selection resets.
    pub settle_delay_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self { settle_delay_ms: 600 }
    }
}

impl Timing {
    /// Settle delay as a `Duration`.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board height in cells.
    pub rows: usize,

    /// Board width in cells.
    pub cols: usize,

    /// Number of distinct icons the layout draws from.
    pub icon_count: u16,

    /// Seed for the layout. `None` draws one from the OS.
    pub random_seed: Option<u64>,

    /// Score magnitudes.
    pub scoring: ScoringRules,

    /// Deferred-action durations.
    pub timing: Timing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            icon_count: 8,
            random_seed: None,
            scoring: ScoringRules::default(),
            timing: Timing::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with default scoring and timing.
    pub fn new(rows: usize, cols: usize, icon_count: u16) -> Self {
        Self {
            rows,
            cols,
            icon_count,
            ..Self::default()
        }
    }

    /// Fix the layout seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Replace the scoring rules.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replace the timing rules.
    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "rows and cols must be > 0".into(),
            ));
        }
        if self.cell_count() % 2 != 0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "rows * cols must be even, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.icon_count < 1 {
            return Err(ConfigError::InvalidConfiguration(
                "icon_count must be >= 1".into(),
            ));
        }
        let scoring = &self.scoring;
        if scoring.match_reward < 0 || scoring.mismatch_penalty < 0 || scoring.completion_bonus < 0 {
            return Err(ConfigError::InvalidConfiguration(
                "scoring values are magnitudes and must be >= 0".into(),
            ));
        }
        Ok(())
    }
}
