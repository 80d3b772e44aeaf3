use crate::game::constants::{FRAME_MS, INTERIOR_CELL_COUNT, MOVE_SPEED, STARTING_LENGTH};
use crate::game::error::GameError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
  pub speed: f64,
  pub starting_length: usize,
  pub frame_ms: u64,
  pub seed: Option<u64>,
  pub headless_ticks: Option<u64>,
}

impl Default for GameConfig {
  fn default() -> Self {
    Self {
      speed: MOVE_SPEED,
      starting_length: STARTING_LENGTH,
      frame_ms: FRAME_MS,
      seed: None,
      headless_ticks: None,
    }
  }
}

impl GameConfig {
  pub fn from_env() -> Result<Self, GameError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
    let defaults = Self::default();
    let config = Self {
      speed: lookup("SNAKE_SPEED")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(defaults.speed),
      starting_length: lookup("SNAKE_STARTING_LENGTH")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(defaults.starting_length),
      frame_ms: lookup("SNAKE_FRAME_MS")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(defaults.frame_ms),
      seed: lookup("SNAKE_SEED").and_then(|value| value.trim().parse().ok()),
      headless_ticks: lookup("SNAKE_HEADLESS_TICKS").and_then(|value| value.trim().parse().ok()),
    };
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), GameError> {
    if !self.speed.is_finite() || self.speed <= 0.0 {
      return Err(GameError::Configuration(format!(
        "speed must be a positive number, got {}",
        self.speed
      )));
    }
    if self.starting_length == 0 || self.starting_length >= INTERIOR_CELL_COUNT {
      return Err(GameError::Configuration(format!(
        "starting length must be between 1 and {}, got {}",
        INTERIOR_CELL_COUNT - 1,
        self.starting_length
      )));
    }
    if self.frame_ms == 0 {
      return Err(GameError::Configuration("frame interval must be at least 1ms".to_string()));
    }
    Ok(())
  }

  pub fn frame_interval(&self) -> Duration {
    Duration::from_millis(self.frame_ms)
  }

  /// Fixed step used when no wall clock drives the loop.
  pub fn frame_seconds(&self) -> f64 {
    self.frame_ms as f64 / 1000.0
  }
}
