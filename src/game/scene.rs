use super::types::{Point, VisualHandle};
use std::collections::HashSet;

/// Receives visual create/destroy requests for body segments. Drawing is the
/// implementor's business; the game only asks for handles and gives them back.
pub trait Scene {
    fn spawn_segment(&mut self, position: Point) -> VisualHandle;
    fn despawn_segment(&mut self, handle: VisualHandle);
}

#[derive(Debug, Default)]
pub struct HandleLedger {
    next_handle: u32,
    live: HashSet<VisualHandle>,
}

impl HandleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[cfg(test)]
    pub fn is_live(&self, handle: VisualHandle) -> bool {
        self.live.contains(&handle)
    }
}

impl Scene for HandleLedger {
    fn spawn_segment(&mut self, position: Point) -> VisualHandle {
        let handle = VisualHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        self.live.insert(handle);
        tracing::trace!(handle = handle.0, x = position.x, y = position.y, z = position.z, "segment spawned");
        handle
    }

    fn despawn_segment(&mut self, handle: VisualHandle) {
        if !self.live.remove(&handle) {
            tracing::warn!(handle = handle.0, "despawn requested for unknown segment");
            return;
        }
        tracing::trace!(handle = handle.0, "segment despawned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_tracks_live_handles() {
        let mut ledger = HandleLedger::new();
        let origin = Point {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        let first = ledger.spawn_segment(origin);
        let second = ledger.spawn_segment(origin);
        assert_ne!(first, second);
        assert_eq!(ledger.live_count(), 2);

        ledger.despawn_segment(first);
        assert!(!ledger.is_live(first));
        assert!(ledger.is_live(second));
        assert_eq!(ledger.live_count(), 1);

        ledger.despawn_segment(first);
        assert_eq!(ledger.live_count(), 1);
    }
}
