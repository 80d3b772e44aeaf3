use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl Cell {
  pub const fn new(x: i32, y: i32, z: i32) -> Self {
    Self { x, y, z }
  }

  pub fn offset(self, step: Cell) -> Cell {
    Cell {
      x: self.x + step.x,
      y: self.y + step.y,
      z: self.z + step.z,
    }
  }
}

impl From<Cell> for Point {
  fn from(cell: Cell) -> Self {
    Point {
      x: cell.x as f64,
      y: cell.y as f64,
      z: cell.z as f64,
    }
  }
}

/// A buffered steering request. `Forward` is both the default and the
/// "keep going straight" value the buffer falls back to after each arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
  #[default]
  Forward,
}

/// Facing stored as quarter turns so rotations never drift. Kept in Euler
/// readback form: pitch is never a half turn, and roll is zero whenever pitch
/// points straight up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
  pub yaw: u8,
  pub pitch: u8,
  pub roll: u8,
}

impl Orientation {
  pub fn yaw_degrees(self) -> i32 {
    self.yaw as i32 * 90
  }

  pub fn pitch_degrees(self) -> i32 {
    self.pitch as i32 * 90
  }

  pub fn roll_degrees(self) -> i32 {
    self.roll as i32 * 90
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VisualHandle(pub u32);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadSnapshot {
  pub position: Point,
  pub target: Cell,
  pub yaw: i32,
  pub pitch: i32,
  pub roll: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSnapshot {
  pub handle: VisualHandle,
  pub position: Point,
  pub target: Cell,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaSnapshot {
  pub score: u32,
  pub head: HeadSnapshot,
  pub segments: Vec<SegmentSnapshot>,
  pub food: Cell,
  pub pending: Direction,
}
