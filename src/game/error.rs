use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
  /// A startup setting or a required collaborator is unusable.
  Configuration(String),
  /// Every interior cell is occupied, so there is nowhere to put the food.
  Exhausted,
}

impl fmt::Display for GameError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GameError::Configuration(reason) => write!(f, "invalid configuration: {reason}"),
      GameError::Exhausted => f.write_str("no free cell left for food placement"),
    }
  }
}

impl std::error::Error for GameError {}
