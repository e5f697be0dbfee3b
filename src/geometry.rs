use super::model::*;

/// Squared straight-line distance. Orders cells the same way the true distance does.
pub fn distance_sq(a: Point, b: Point) -> i32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// A target can be acted on from its own cell or one of its four neighbours.
pub fn reachable(from: Point, target: Point) -> bool {
    distance_sq(from, target) <= 1
}

pub fn in_bounds(point: Point, width: usize, height: usize) -> bool {
    point.x >= 0 && point.y >= 0 && (point.x as usize) < width && (point.y as usize) < height
}

pub fn clamp(point: Point, width: usize, height: usize) -> Point {
    Point::new(
        point.x.clamp(0, width as i32 - 1),
        point.y.clamp(0, height as i32 - 1),
    )
}

/// Each non-lead robot gets its own side of a reference point:
/// 1 goes west, 2 north, 3 east and 4 south.
pub fn shift_by_id(id: usize, point: Point) -> Point {
    match id {
        1 => Point::new(point.x - 1, point.y),
        2 => Point::new(point.x, point.y - 1),
        3 => Point::new(point.x + 1, point.y),
        4 => Point::new(point.x, point.y + 1),
        _ => point,
    }
}
