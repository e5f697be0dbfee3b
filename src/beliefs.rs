use super::claims::ClaimTable;
use super::forbidden::ForbiddenSet;
use super::geometry;
use super::inputs::*;
use super::model::*;

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub struct Cell {
    pub point: Point,
    /// Last observed amount of ore, `None` until a radar has seen the cell.
    pub ore: Option<u32>,
    pub hole: bool,
}

/// Last known state of every cell of the map.
///
/// Cells are stored column by column (x ascending, then y ascending) and every
/// query walks them in that order, so the first of several equally good
/// candidates always wins.
#[derive(Clone,Debug)]
pub struct BeliefMap {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}
impl BeliefMap {
    pub fn new(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell {
                    point: Point::new(x as i32, y as i32),
                    ore: None,
                    hole: false,
                });
            }
        }
        Self { width, height, cells }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if geometry::in_bounds(point, self.width, self.height) {
            Some(point.x as usize * self.height + point.y as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.index(point).map(|index| &self.cells[index])
    }

    pub fn ore_at(&self, point: Point) -> Option<u32> {
        self.cell(point).and_then(|cell| cell.ore)
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        geometry::in_bounds(point, self.width, self.height)
    }

    /// Fogged cells keep their last known amount. Holes are never filled back in.
    pub fn refresh(&mut self, snapshot: &Snapshot) {
        let width = self.width.min(snapshot.width);
        let height = self.height.min(snapshot.height);
        for y in 0..height {
            for x in 0..width {
                let observed = snapshot.cell_at(x, y);
                let cell = &mut self.cells[x * self.height + y];
                if let Some(ore) = observed.ore {
                    cell.ore = Some(ore);
                }
                cell.hole |= observed.hole;
            }
        }
    }

    /// Set a single cell directly, as if freshly observed.
    pub fn observe(&mut self, point: Point, ore: Option<u32>, hole: bool) {
        if let Some(index) = self.index(point) {
            let cell = &mut self.cells[index];
            if ore.is_some() {
                cell.ore = ore;
            }
            cell.hole |= hole;
        }
    }

    /// Cells where a radar has seen ore.
    pub fn known_resources(&self) -> impl Iterator<Item=&Cell> {
        self.cells.iter().filter(|cell| cell.ore.map_or(false, |ore| ore > 0))
    }

    pub fn has_known_resources(&self) -> bool {
        self.known_resources().next().is_some()
    }

    /// Ore left over once every claimant has taken its unit. Forbidden cells are
    /// pushed far below zero.
    fn spare_ore(&self, cell: &Cell, claims: &ClaimTable, forbidden: &ForbiddenSet) -> i64 {
        match cell.ore {
            Some(ore) => ore as i64 - claims.count_at(cell.point) as i64 - forbidden.weight_at(cell.point),
            None => -1,
        }
    }

    pub fn unclaimed_resources<'a>(&'a self, claims: &'a ClaimTable, forbidden: &'a ForbiddenSet) -> impl Iterator<Item=&'a Cell> + 'a {
        self.cells.iter().filter(move |cell| self.spare_ore(cell, claims, forbidden) > 0)
    }

    pub fn nearest_unclaimed_resource(&self, origin: Point, claims: &ClaimTable, forbidden: &ForbiddenSet) -> Option<Point> {
        self.unclaimed_resources(claims, forbidden)
            .min_by_key(|cell| geometry::distance_sq(origin, cell.point))
            .map(|cell| cell.point)
    }

    /// Closest untouched cell of unknown content at or beyond `min_x`.
    pub fn nearest_unexplored(&self, origin: Point, min_x: i32, claims: &ClaimTable, forbidden: &ForbiddenSet) -> Option<Point> {
        self.cells.iter()
            .filter(|cell| {
                cell.ore.is_none()
                    && !cell.hole
                    && cell.point.x >= min_x
                    && claims.count_at(cell.point) == 0
                    && !forbidden.is_forbidden(cell.point)
            })
            .min_by_key(|cell| geometry::manhattan(origin, cell.point))
            .map(|cell| cell.point)
    }

    /// Trap sites: more than one unit, so that after the trap takes one the rest
    /// still shows up on the enemy radar.
    pub fn mineable_places(&self, min_x: i32, claims: &ClaimTable, forbidden: &ForbiddenSet) -> Vec<Point> {
        self.cells.iter()
            .filter(|cell| {
                cell.point.x > min_x
                    && cell.ore.map_or(false, |ore| ore > 1)
                    && claims.count_at(cell.point) == 0
                    && !forbidden.is_forbidden(cell.point)
            })
            .map(|cell| cell.point)
            .collect()
    }
}
