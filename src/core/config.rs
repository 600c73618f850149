//! Game configuration.
//!
//! A `GameConfig` is built once (defaults, builder methods or a TOML file)
//! and passed explicitly to the board, engine and session constructors.
//! Nothing in the crate reads configuration from global state.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::position::GridShape;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid rows (default: 4).
    pub rows: usize,

    /// Grid columns (default: 4).
    pub cols: usize,

    /// Probability that a spawned tile is a 4 rather than a 2 (default: 0.5).
    pub four_probability: f64,

    /// Width of one cell in pixels. Only affects pixel positions.
    pub tile_width: f32,

    /// Height of one cell in pixels. Only affects pixel positions.
    pub tile_height: f32,

    /// Pixels a sliding tile advances per animation tick.
    pub velocity: f32,

    /// Seed for the session RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            four_probability: 0.5,
            tile_width: 200.0,
            tile_height: 200.0,
            velocity: 20.0,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the pixel size of one cell.
    #[must_use]
    pub fn with_tile_size(mut self, width: f32, height: f32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    /// Set the animation velocity in pixels per tick.
    #[must_use]
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.rows, self.cols)
    }

    /// Check every field against the engine's preconditions.
    ///
    /// The grid must hold at least the two opening tiles.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells >= 2 => {}
            Some(_) => {
                return Err(EngineError::InvalidConfig(
                    "grid must have room for the two opening tiles".to_string(),
                ))
            }
            None => {
                return Err(EngineError::InvalidConfig(format!(
                    "grid {}x{} is too large",
                    self.rows, self.cols
                )))
            }
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        if !(self.tile_width > 0.0 && self.tile_height > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "tile size must be positive, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        if !(self.velocity > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "velocity must be positive, got {}",
                self.velocity
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> EngineResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::from_toml_str`], but a document without a `seed`
    /// key gets `fallback_seed` instead of the default seed.
    pub fn from_toml_str_seeded(contents: &str, fallback_seed: u64) -> EngineResult<Self> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e: toml::de::Error| EngineError::InvalidConfig(e.to_string()))?;
        let has_seed = table.contains_key("seed");
        let mut config: Self = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| EngineError::InvalidConfig(e.to_string()))?;
        if !has_seed {
            config.seed = fallback_seed;
        }
        config.validate()?;
        Ok(config)
    }
}
