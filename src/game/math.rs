use super::types::{Cell, Point};

pub fn length(point: Point) -> f64 {
  (point.x * point.x + point.y * point.y + point.z * point.z).sqrt()
}

pub fn sub(a: Point, b: Point) -> Point {
  Point {
    x: a.x - b.x,
    y: a.y - b.y,
    z: a.z - b.z,
  }
}

#[cfg(test)]
pub fn distance(a: Point, b: Point) -> f64 {
  length(sub(a, b))
}

/// Moves `current` toward `target` by at most `max_step`. Lands exactly on
/// `target` when the remaining distance fits in the step.
pub fn move_towards(current: Point, target: Point, max_step: f64) -> Point {
  let delta = sub(target, current);
  let remaining = length(delta);
  if remaining <= max_step || remaining == 0.0 {
    return target;
  }
  if max_step <= 0.0 || !max_step.is_finite() {
    return current;
  }
  let scale = max_step / remaining;
  Point {
    x: current.x + delta.x * scale,
    y: current.y + delta.y * scale,
    z: current.z + delta.z * scale,
  }
}

pub fn round_to_cell(point: Point) -> Cell {
  Cell {
    x: point.x.round() as i32,
    y: point.y.round() as i32,
    z: point.z.round() as i32,
  }
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
  value.min(max).max(min)
}
