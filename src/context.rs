use super::beliefs::BeliefMap;
use super::claims::ClaimTable;
use super::config::Config;
use super::forbidden::ForbiddenSet;
use super::model::*;

/// Team-wide state every robot reads and writes while deciding its move.
pub struct Context {
    pub config: Config,
    pub beliefs: BeliefMap,
    pub claims: ClaimTable,
    pub forbidden: ForbiddenSet,
    /// Radar sites not yet handed to the scout.
    pub waypoints: Vec<Point>,
    pub radar_cooldown: i32,
    pub trap_cooldown: i32,
}
impl Context {
    pub fn new(config: Config, width: usize, height: usize) -> Self {
        Self {
            beliefs: BeliefMap::new(width, height),
            claims: ClaimTable::new(),
            forbidden: ForbiddenSet::new(config.forbidden_weight),
            waypoints: config.waypoints.clone(),
            radar_cooldown: 0,
            trap_cooldown: 0,
            config,
        }
    }

    pub fn nearest_unclaimed_resource(&self, origin: Point) -> Option<Point> {
        self.beliefs.nearest_unclaimed_resource(origin, &self.claims, &self.forbidden)
    }

    pub fn nearest_unexplored(&self, origin: Point) -> Option<Point> {
        self.beliefs.nearest_unexplored(origin, self.config.min_explore_x, &self.claims, &self.forbidden)
    }

    pub fn mineable_places(&self) -> Vec<Point> {
        self.beliefs.mineable_places(self.config.min_mineable_x, &self.claims, &self.forbidden)
    }

    pub fn can_request_radar(&self) -> bool {
        !self.config.respect_cooldowns || self.radar_cooldown <= 0
    }

    pub fn can_request_trap(&self) -> bool {
        !self.config.respect_cooldowns || self.trap_cooldown <= 0
    }
}
