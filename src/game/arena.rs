use super::constants::{SPAWN_CELL, SPAWN_STEP};
use super::error::GameError;
use super::food::relocate;
use super::grid::{is_outside_bounds, rotate};
use super::motion::Head;
use super::scene::Scene;
use super::snake::Chain;
use super::types::{ArenaSnapshot, Cell, Direction, HeadSnapshot, SegmentSnapshot};
use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

pub type ScoreObserver = Box<dyn FnMut(u32)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TickOutcome {
  Moving,
  Arrived,
  Grew,
  Died,
}

impl TickOutcome {
  pub fn is_arrival(self) -> bool {
    !matches!(self, TickOutcome::Moving)
  }
}

/// Owns every piece of mutable game state: head, chain, food, score and the
/// steering latch. Death is handled here as a full reset, never surfaced.
pub struct Arena<S: Scene> {
  speed: f64,
  starting_length: usize,
  head: Head,
  chain: Chain,
  food: Cell,
  score: u32,
  pending: Direction,
  rng: StdRng,
  scene: S,
  score_observer: Option<ScoreObserver>,
}

impl<S: Scene> Arena<S> {
  pub fn new(config: &GameConfig, scene: S) -> Result<Self, GameError> {
    config.validate()?;
    let rng = match config.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };

    let mut arena = Self {
      speed: config.speed,
      starting_length: config.starting_length,
      head: Head::new(SPAWN_CELL, SPAWN_STEP),
      chain: Chain::new(),
      food: SPAWN_CELL,
      score: 0,
      pending: Direction::Forward,
      rng,
      scene,
      score_observer: None,
    };
    arena.populate()?;
    Ok(arena)
  }

  pub fn set_score_observer(&mut self, observer: impl FnMut(u32) + 'static) {
    self.score_observer = Some(Box::new(observer));
  }

  pub fn score(&self) -> u32 {
    self.score
  }

  #[cfg(test)]
  pub fn food(&self) -> Cell {
    self.food
  }

  #[cfg(test)]
  pub fn head(&self) -> &Head {
    &self.head
  }

  pub fn chain(&self) -> &Chain {
    &self.chain
  }

  pub fn scene(&self) -> &S {
    &self.scene
  }

  #[cfg(test)]
  pub fn pending(&self) -> Direction {
    self.pending
  }

  /// Latches a turn for the next arrival. Later calls overwrite earlier ones.
  pub fn steer(&mut self, direction: Direction) {
    self.pending = direction;
  }

  pub fn tick(&mut self, elapsed: f64) -> Result<TickOutcome, GameError> {
    let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
    let arrived = self.head.advance(self.speed, elapsed);
    self.chain.advance_all(self.speed, elapsed);
    if !arrived {
      return Ok(TickOutcome::Moving);
    }
    self.arrive()
  }

  fn arrive(&mut self) -> Result<TickOutcome, GameError> {
    let head_cell = self.head.cell();
    if self.chain.occupies(head_cell) || is_outside_bounds(head_cell) {
      self.die()?;
      return Ok(TickOutcome::Died);
    }

    let turn = std::mem::take(&mut self.pending);
    self.head.orientation = rotate(self.head.orientation, turn);
    self.chain.cascade_targets(head_cell);
    self.head.retarget();

    if head_cell != self.food {
      return Ok(TickOutcome::Arrived);
    }

    // The new tail repeats the current tail's target, so the occupied set is
    // already final. Food goes first so a failed placement leaves the chain alone.
    self.food = self.place_food()?;
    self.chain.append_segment(head_cell, &mut self.scene);
    self.change_score(self.score + 1);
    tracing::debug!(score = self.score, length = self.chain.len(), "snake grew");
    Ok(TickOutcome::Grew)
  }

  fn die(&mut self) -> Result<(), GameError> {
    let head_cell = self.head.cell();
    tracing::debug!(
      score = self.score,
      x = head_cell.x,
      y = head_cell.y,
      z = head_cell.z,
      "snake died"
    );
    self.chain.clear(&mut self.scene);
    self.head = Head::new(SPAWN_CELL, SPAWN_STEP);
    self.change_score(0);
    self.populate()?;
    tracing::debug!(length = self.chain.len(), "snake respawned");
    Ok(())
  }

  fn populate(&mut self) -> Result<(), GameError> {
    self.pending = Direction::Forward;
    let head_cell = self.head.cell();
    for _ in 0..self.starting_length {
      self.chain.append_segment(head_cell, &mut self.scene);
    }
    self.food = self.place_food()?;
    Ok(())
  }

  fn place_food(&mut self) -> Result<Cell, GameError> {
    match relocate(self.chain.occupied_cells(), &mut self.rng) {
      Ok(cell) => Ok(cell),
      Err(error) => {
        tracing::warn!(length = self.chain.len(), "no free cell left for food");
        Err(error)
      }
    }
  }

  fn change_score(&mut self, score: u32) {
    if self.score == score {
      return;
    }
    self.score = score;
    if let Some(observer) = self.score_observer.as_mut() {
      observer(score);
    }
  }

  pub fn snapshot(&self) -> ArenaSnapshot {
    ArenaSnapshot {
      score: self.score,
      head: HeadSnapshot {
        position: self.head.position,
        target: self.head.target,
        yaw: self.head.orientation.yaw_degrees(),
        pitch: self.head.orientation.pitch_degrees(),
        roll: self.head.orientation.roll_degrees(),
      },
      segments: self
        .chain
        .segments()
        .iter()
        .map(|segment| SegmentSnapshot {
          handle: segment.handle,
          position: segment.position,
          target: segment.target,
        })
        .collect(),
      food: self.food,
      pending: self.pending,
    }
  }
}
