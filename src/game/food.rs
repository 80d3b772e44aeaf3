use super::error::GameError;
use super::grid::interior_cells;
use super::types::Cell;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

pub fn free_cells(occupied: impl IntoIterator<Item = Cell>) -> Vec<Cell> {
    let occupied: HashSet<Cell> = occupied.into_iter().collect();
    interior_cells()
        .filter(|cell| !occupied.contains(cell))
        .collect()
}

pub fn relocate<R: Rng + ?Sized>(
    occupied: impl IntoIterator<Item = Cell>,
    rng: &mut R,
) -> Result<Cell, GameError> {
    let candidates = free_cells(occupied);
    candidates.choose(rng).copied().ok_or(GameError::Exhausted)
}
