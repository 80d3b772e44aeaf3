use super::math::move_towards;
use super::scene::Scene;
use super::types::{Cell, Point, VisualHandle};

#[derive(Debug, Clone)]
pub struct Segment {
    pub handle: VisualHandle,
    pub position: Point,
    pub target: Cell,
}

/// Body segments ordered head to tail. Each segment chases the cell its
/// predecessor held one arrival earlier.
#[derive(Debug, Default)]
pub struct Chain {
    segments: Vec<Segment>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().map(|segment| segment.target)
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied_cells().any(|occupied| occupied == cell)
    }

    /// Walks tail to head so each target is read before it is overwritten.
    pub fn cascade_targets(&mut self, head_cell: Cell) {
        for index in (1..self.segments.len()).rev() {
            self.segments[index].target = self.segments[index - 1].target;
        }
        if let Some(first) = self.segments.first_mut() {
            first.target = head_cell;
        }
    }

    pub fn append_segment(&mut self, head_cell: Cell, scene: &mut impl Scene) {
        let (position, target) = match self.segments.last() {
            Some(tail) => (tail.position, tail.target),
            None => (Point::from(head_cell), head_cell),
        };
        let handle = scene.spawn_segment(position);
        self.segments.push(Segment {
            handle,
            position,
            target,
        });
    }

    pub fn advance_all(&mut self, speed: f64, elapsed: f64) {
        let max_step = speed * elapsed;
        for segment in &mut self.segments {
            segment.position = move_towards(segment.position, Point::from(segment.target), max_step);
        }
    }

    pub fn clear(&mut self, scene: &mut impl Scene) {
        for segment in self.segments.drain(..) {
            scene.despawn_segment(segment.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::math::distance;
    use crate::game::scene::HandleLedger;

    fn make_chain(targets: &[Cell], ledger: &mut HandleLedger) -> Chain {
        let mut chain = Chain::new();
        for target in targets {
            let position = Point::from(*target);
            chain.segments.push(Segment {
                handle: ledger.spawn_segment(position),
                position,
                target: *target,
            });
        }
        chain
    }

    fn targets(chain: &Chain) -> Vec<Cell> {
        chain.occupied_cells().collect()
    }

    #[test]
    fn cascade_shifts_targets_toward_tail() {
        let mut ledger = HandleLedger::new();
        let cells = [
            Cell::new(5, 1, 4),
            Cell::new(5, 1, 3),
            Cell::new(5, 1, 2),
            Cell::new(4, 1, 2),
        ];
        let mut chain = make_chain(&cells, &mut ledger);

        chain.cascade_targets(Cell::new(5, 1, 5));

        assert_eq!(
            targets(&chain),
            vec![
                Cell::new(5, 1, 5),
                Cell::new(5, 1, 4),
                Cell::new(5, 1, 3),
                Cell::new(5, 1, 2),
            ]
        );
        assert!(!chain.occupies(Cell::new(4, 1, 2)));
    }

    #[test]
    fn cascade_on_empty_chain_is_a_no_op() {
        let mut chain = Chain::new();
        chain.cascade_targets(Cell::new(1, 1, 1));
        assert!(chain.is_empty());
    }

    #[test]
    fn first_segment_spawns_on_head_cell() {
        let mut ledger = HandleLedger::new();
        let mut chain = Chain::new();
        chain.append_segment(Cell::new(2, 1, 2), &mut ledger);

        let segment = &chain.segments()[0];
        assert_eq!(segment.target, Cell::new(2, 1, 2));
        assert_eq!(segment.position, Point::from(Cell::new(2, 1, 2)));
        assert_eq!(ledger.live_count(), 1);
    }

    #[test]
    fn appended_segment_starts_at_tail_render_position() {
        let mut ledger = HandleLedger::new();
        let mut chain = make_chain(&[Cell::new(3, 1, 3), Cell::new(3, 1, 2)], &mut ledger);
        chain.segments[1].position = Point {
            x: 3.0,
            y: 1.0,
            z: 1.35,
        };
        let tail_position = chain.segments[1].position;

        chain.append_segment(Cell::new(3, 1, 4), &mut ledger);

        assert_eq!(chain.len(), 3);
        let added = chain.segments().last().expect("added segment");
        assert_eq!(added.position, tail_position);
        assert_eq!(added.target, Cell::new(3, 1, 2));
        assert_eq!(ledger.live_count(), 3);
    }

    #[test]
    fn advance_never_exceeds_step_or_overshoots() {
        let mut ledger = HandleLedger::new();
        let mut chain = make_chain(&[Cell::new(1, 1, 1), Cell::new(1, 1, 1)], &mut ledger);
        chain.segments[0].target = Cell::new(1, 1, 3);
        chain.segments[1].target = Cell::new(1, 2, 1);
        let speed = 1.8;
        let elapsed = 0.2;

        for _ in 0..20 {
            let before: Vec<Point> = chain.segments().iter().map(|s| s.position).collect();
            chain.advance_all(speed, elapsed);
            for (segment, previous) in chain.segments().iter().zip(before) {
                assert!(distance(segment.position, previous) <= speed * elapsed + 1e-12);
                let travelled = distance(previous, Point::from(segment.target));
                let remaining = distance(segment.position, Point::from(segment.target));
                assert!(remaining <= travelled);
            }
        }

        assert_eq!(chain.segments()[0].position, Point::from(Cell::new(1, 1, 3)));
        assert_eq!(chain.segments()[1].position, Point::from(Cell::new(1, 2, 1)));
    }

    #[test]
    fn clear_releases_every_handle() {
        let mut ledger = HandleLedger::new();
        let mut chain = make_chain(&[Cell::new(1, 1, 1), Cell::new(1, 1, 2)], &mut ledger);
        chain.append_segment(Cell::new(1, 1, 3), &mut ledger);
        assert_eq!(ledger.live_count(), 3);

        chain.clear(&mut ledger);

        assert!(chain.is_empty());
        assert_eq!(ledger.live_count(), 0);
    }
}
