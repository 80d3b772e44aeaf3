use super::types::Cell;

pub const GRID_MIN: i32 = 0;
pub const GRID_MAX: i32 = 9;
pub const GROUND_Y: i32 = 1;
pub const INTERIOR_MIN: i32 = 1;
pub const INTERIOR_MAX: i32 = 9;
pub const INTERIOR_CELL_COUNT: usize =
  ((INTERIOR_MAX - INTERIOR_MIN + 1) * (INTERIOR_MAX - INTERIOR_MIN + 1) * (INTERIOR_MAX - INTERIOR_MIN + 1))
    as usize;

pub const STARTING_LENGTH: usize = 5;
pub const MOVE_SPEED: f64 = 1.8;
pub const FRAME_MS: u64 = 16;

pub const SPAWN_CELL: Cell = Cell::new(2, 1, 2);
pub const SPAWN_STEP: Cell = Cell::new(0, 0, 1);
