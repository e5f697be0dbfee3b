use super::geometry::{self, manhattan};
use super::model::*;

/// Robots travel this many cells per turn.
pub const MOVE_RANGE: i32 = 4;

/// Move intent towards `target`.
///
/// A target one cell out of range is approached via the side of it we can reach
/// this turn, so the robot can dig it on the next one.
pub fn move_toward(from: Point, target: Point, width: usize, height: usize) -> Command {
    if let Some(closer) = approach(from, target, width, height) {
        return Command::Move(closer);
    }
    Command::Move(target)
}

fn approach(from: Point, target: Point, width: usize, height: usize) -> Option<Point> {
    if target.x <= 0 || manhattan(from, target) != MOVE_RANGE + 1 { return None }

    let sides = [
        Point::new(target.x + 1, target.y), // east
        Point::new(target.x, target.y - 1), // north
        Point::new(target.x, target.y + 1), // south
        Point::new(target.x - 1, target.y), // west
    ];
    sides.into_iter().find(|&side| {
        geometry::in_bounds(side, width, height) && manhattan(from, side) == MOVE_RANGE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_targets_are_moved_to_directly() {
        let command = move_toward(Point::new(0, 5), Point::new(12, 5), 30, 15);
        assert_eq!(command, Command::Move(Point::new(12, 5)));
    }

    #[test]
    fn target_just_out_of_range_is_approached_from_nearest_side() {
        // Coming from the west, the west side is the one in range.
        let command = move_toward(Point::new(5, 5), Point::new(10, 5), 30, 15);
        assert_eq!(command, Command::Move(Point::new(9, 5)));

        // Coming from the east, the east side wins.
        let command = move_toward(Point::new(15, 5), Point::new(10, 5), 30, 15);
        assert_eq!(command, Command::Move(Point::new(11, 5)));

        // Diagonal approach prefers north over west.
        let command = move_toward(Point::new(7, 3), Point::new(10, 5), 30, 15);
        assert_eq!(command, Command::Move(Point::new(10, 4)));
    }

    #[test]
    fn home_column_is_never_approached_sideways() {
        let command = move_toward(Point::new(5, 5), Point::new(0, 5), 30, 15);
        assert_eq!(command, Command::Move(Point::new(0, 5)));
    }

    #[test]
    fn sides_off_the_map_are_skipped() {
        let command = move_toward(Point::new(24, 14), Point::new(29, 14), 30, 15);
        assert_eq!(command, Command::Move(Point::new(28, 14)));
    }
}
