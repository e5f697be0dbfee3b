use tracing::debug;

use super::model::*;

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub struct Claim {
    pub point: Point,
    pub agent: usize,
}

/// Which robot intends to dig where. Several robots may claim the same cell.
#[derive(Clone,Debug,Default)]
pub struct ClaimTable {
    claims: Vec<Claim>,
}
impl ClaimTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, point: Point, agent: usize) {
        debug!(agent, x = point.x, y = point.y, "taking cell");
        self.claims.push(Claim { point, agent });
    }

    pub fn release_all(&mut self, agent: usize) {
        let before = self.claims.len();
        self.claims.retain(|claim| claim.agent != agent);
        let released = before - self.claims.len();
        if released > 0 {
            debug!(agent, released, "freeing cells");
        }
    }

    pub fn count_at(&self, point: Point) -> usize {
        self.claims.iter().filter(|claim| claim.point == point).count()
    }

    /// The oldest outstanding claim of this robot.
    pub fn claim_of(&self, agent: usize) -> Option<Point> {
        self.claims.iter().find(|claim| claim.agent == agent).map(|claim| claim.point)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
