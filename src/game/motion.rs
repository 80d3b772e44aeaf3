use super::math::{move_towards, round_to_cell};
use super::types::{Cell, Orientation, Point};

#[derive(Debug, Clone)]
pub struct Head {
    pub position: Point,
    pub target: Cell,
    pub orientation: Orientation,
}

impl Head {
    pub fn new(cell: Cell, step: Cell) -> Self {
        Self {
            position: Point::from(cell),
            target: cell.offset(step),
            orientation: Orientation::default(),
        }
    }

    pub fn cell(&self) -> Cell {
        round_to_cell(self.position)
    }

    pub fn at_target(&self) -> bool {
        self.position == Point::from(self.target)
    }

    /// Returns true only on the tick the head lands on its target. The step is
    /// clamped to the remaining distance so the landing is exact.
    pub fn advance(&mut self, speed: f64, elapsed: f64) -> bool {
        if self.at_target() {
            return false;
        }
        self.position = move_towards(self.position, Point::from(self.target), speed * elapsed);
        self.at_target()
    }

    pub fn retarget(&mut self) {
        self.target = self.cell().offset(self.orientation.forward());
    }
}
