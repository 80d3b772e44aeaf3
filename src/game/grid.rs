use super::constants::{GRID_MAX, GRID_MIN, GROUND_Y, INTERIOR_MAX, INTERIOR_MIN};
use super::types::{Cell, Direction, Orientation};

const QUARTER_SIN: [i32; 4] = [0, 1, 0, -1];
const QUARTER_COS: [i32; 4] = [1, 0, -1, 0];

/// The floor on `y` sits one unit above the `x`/`z` floor.
pub fn is_outside_bounds(cell: Cell) -> bool {
    !(GRID_MIN..=GRID_MAX).contains(&cell.x)
        || !(GROUND_Y..=GRID_MAX).contains(&cell.y)
        || !(GRID_MIN..=GRID_MAX).contains(&cell.z)
}

pub fn rotate(orientation: Orientation, direction: Direction) -> Orientation {
    let (pitch_delta, yaw_delta) = match direction {
        Direction::Up => (-1, 0),
        Direction::Down => (1, 0),
        Direction::Left => (0, -1),
        Direction::Right => (0, 1),
        Direction::Forward => (0, 0),
    };
    canonical(
        orientation.yaw as i32 + yaw_delta,
        orientation.pitch as i32 + pitch_delta,
        orientation.roll as i32,
    )
}

/// Rewrites a raw (yaw, pitch, roll) triple the way Euler angles read back:
/// pitch stays within a quarter turn of level, and at straight up or down
/// the roll folds into yaw.
fn canonical(yaw: i32, pitch: i32, roll: i32) -> Orientation {
    let (yaw, pitch, roll) = match quarter_turns(pitch) {
        2 => (yaw + 2, 0, roll + 2),
        1 => (yaw - roll, 1, 0),
        3 => (yaw + roll, 3, 0),
        _ => (yaw, 0, roll),
    };
    Orientation {
        yaw: quarter_turns(yaw),
        pitch: pitch as u8,
        roll: quarter_turns(roll),
    }
}

fn quarter_turns(turns: i32) -> u8 {
    turns.rem_euclid(4) as u8
}

impl Orientation {
    /// Unit step along the facing, with yaw about +y applied after pitch about +x.
    /// Roll spins about the facing and never moves it.
    pub fn forward(self) -> Cell {
        let yaw = self.yaw as usize % 4;
        let pitch = self.pitch as usize % 4;
        Cell {
            x: QUARTER_SIN[yaw] * QUARTER_COS[pitch],
            y: -QUARTER_SIN[pitch],
            z: QUARTER_COS[yaw] * QUARTER_COS[pitch],
        }
    }
}

pub fn interior_cells() -> impl Iterator<Item = Cell> {
    (INTERIOR_MIN..=INTERIOR_MAX).flat_map(|x| {
        (INTERIOR_MIN..=INTERIOR_MAX)
            .flat_map(move |y| (INTERIOR_MIN..=INTERIOR_MAX).map(move |z| Cell::new(x, y, z)))
    })
}
