use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

/// Largest board accepted, in cells
pub const MAX_CELLS: usize = 1 << 22;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of board rows
    pub rows: usize,
    /// Number of board columns
    pub cols: usize,
    /// Generations per second while running
    pub update_rate_hz: u32,
    /// Redraws per second
    pub draw_rate_hz: u32,
    /// Chance of a cell being alive after a randomize
    pub alive_probability: f64,
    /// Sleep between loop iterations, caps CPU usage
    pub frame_sleep_ms: u64,
    /// Start from a random board instead of an empty one
    pub random_start: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 80,
            update_rate_hz: 10,
            draw_rate_hz: 30,
            alive_probability: 0.1,
            frame_sleep_ms: 5,
            random_start: false,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Parse a TOML document; keys that are missing keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let reason = if self.rows == 0 || self.cols == 0 {
            Some(format!(
                "board must be at least 1x1, got {}x{}",
                self.rows, self.cols
            ))
        } else if self
            .rows
            .checked_mul(self.cols)
            .is_none_or(|cells| cells > MAX_CELLS)
        {
            Some(format!(
                "board of {}x{} exceeds the limit of {} cells",
                self.rows, self.cols, MAX_CELLS
            ))
        } else if self.update_rate_hz == 0 {
            Some("update_rate_hz must be at least 1".to_owned())
        } else if self.draw_rate_hz == 0 {
            Some("draw_rate_hz must be at least 1".to_owned())
        } else if !(0.0..=1.0).contains(&self.alive_probability) {
            Some(format!(
                "alive_probability must be within [0, 1], got {}",
                self.alive_probability
            ))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ConfigError::Invalid { reason }),
            None => Ok(()),
        }
    }
}
