use tracing::debug;

use super::model::*;

/// Cells reserved for a trap. Never released once added.
#[derive(Clone,Debug)]
pub struct ForbiddenSet {
    cells: Vec<Point>,
    weight: i64,
}
impl ForbiddenSet {
    /// `weight` must exceed any claim count a cell can reach.
    pub fn new(weight: i64) -> Self {
        Self {
            cells: Vec::new(),
            weight,
        }
    }

    pub fn forbid(&mut self, point: Point) {
        debug!(x = point.x, y = point.y, "forbidding cell");
        self.cells.push(point);
    }

    pub fn is_forbidden(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    pub fn weight_at(&self, point: Point) -> i64 {
        self.cells.iter().filter(|&&cell| cell == point).count() as i64 * self.weight
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
