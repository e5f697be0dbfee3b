use tracing::debug;

use super::context::Context;
use super::geometry;
use super::harvesting;
use super::model::*;
use super::movement;
use super::sabotage;
use super::scouting;

/// Side effects of one robot's decision on the rest of the team.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum Broadcast {
    /// A new radar is on its way: diggers parked waiting for ore go back to work.
    ReleaseWaiters,
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub struct Decision {
    pub command: Command,
    pub broadcast: Option<Broadcast>,
}
impl From<Command> for Decision {
    fn from(command: Command) -> Self {
        Self { command, broadcast: None }
    }
}

#[derive(Clone,Debug)]
pub struct Agent {
    pub id: usize,
    /// Id the referee uses for this robot, once seen.
    pub entity_id: Option<i32>,
    pub position: Point,
    pub item: Item,
    pub role: Role,
    pub target: Point,
    /// Roster index of the robot whose target we fall back on.
    pub leader: Option<usize>,
}
impl Agent {
    /// Robot 0 starts as the scout; the others escort it.
    pub fn new(id: usize, initial_target: Point) -> Self {
        Self {
            id,
            entity_id: None,
            position: Point::DEAD,
            item: Item::Nothing,
            role: if id == 0 { Role::Scout(ScoutMode::Idle) } else { Role::Digger(DiggerMode::EscortWait) },
            target: initial_target,
            leader: if id == 0 { None } else { Some(0) },
        }
    }

    pub fn is_dead(&self) -> bool {
        self.position == Point::DEAD
    }

    pub fn at_home(&self) -> bool {
        self.position.x == 0
    }

    pub fn home(&self) -> Point {
        Point::new(0, self.position.y)
    }

    pub fn target_reachable(&self) -> bool {
        geometry::reachable(self.position, self.target)
    }

    pub fn on_target(&self) -> bool {
        self.position == self.target
    }

    pub fn set_role(&mut self, role: Role) {
        debug!(agent = self.id, from = %self.role, to = %role, "changing role");
        self.role = role;
    }

    pub fn reset_mode(&mut self) {
        match self.role {
            Role::Scout(_) => self.role = Role::Scout(ScoutMode::Idle),
            Role::Digger(_) => self.role = Role::Digger(DiggerMode::Idle),
            Role::Saboteur => {},
        }
    }

    pub fn set_digger_mode(&mut self, mode: DiggerMode) {
        if let Role::Digger(_) = self.role {
            self.role = Role::Digger(mode);
        }
    }

    pub fn move_to_target(&self, ctx: &Context) -> Command {
        movement::move_toward(self.position, self.target, ctx.beliefs.width, ctx.beliefs.height)
    }

    /// Keep the vein we already hold or claim the nearest spare one.
    pub fn acquire_resource(&mut self, ctx: &mut Context) -> bool {
        if let Some(held) = ctx.claims.claim_of(self.id) {
            debug!(agent = self.id, x = held.x, y = held.y, "staying at vein");
            self.target = held;
            return true;
        }
        match ctx.nearest_unclaimed_resource(self.position) {
            Some(vein) => {
                debug!(
                    agent = self.id, x = vein.x, y = vein.y,
                    claimants = ctx.claims.count_at(vein),
                    "got closest vein");
                self.target = vein;
                ctx.claims.claim(vein, self.id);
                true
            },
            None => false,
        }
    }

    /// Nothing known to dig: stand on our own side of the leader's target.
    pub fn backup_target(&mut self, ctx: &Context, leader_target: Option<Point>) {
        let shifted = leader_target
            .filter(|target| target.x > 0)
            .map(|target| geometry::shift_by_id(self.id, target))
            .filter(|&shifted| ctx.beliefs.in_bounds(shifted));
        match shifted {
            Some(shifted) => {
                self.set_digger_mode(DiggerMode::Exploring);
                self.target = shifted;
            },
            None => self.target = ctx.config.backup_target,
        }
    }

    /// Our current target shifted by id, or a radar site / the centre if that leaves the map.
    pub fn shifted_target(&mut self, ctx: &Context) -> Point {
        let shifted = geometry::shift_by_id(self.id, self.target);
        if shifted.x > 0 && ctx.beliefs.in_bounds(shifted) {
            return shifted;
        }
        match ctx.waypoints.last() {
            Some(&waypoint) => waypoint,
            None => {
                self.reset_mode();
                ctx.config.central_target
            },
        }
    }

    /// Pick what to dig next after finishing the current cell.
    pub fn explore_next(&mut self, ctx: &mut Context) {
        let unexplored = ctx.nearest_unexplored(self.position);
        debug!(agent = self.id, ?unexplored, "nearest unknown");

        if ctx.beliefs.has_known_resources() && self.acquire_resource(ctx) {
            self.reset_mode();
            return;
        }
        let next = match unexplored {
            Some(cell) => cell,
            None => self.shifted_target(ctx),
        };
        self.target = next;
        ctx.claims.claim(next, self.id);
    }

    /// Decide this turn's command. Dead robots wait and touch nothing.
    pub fn decide(&mut self, ctx: &mut Context, leader_target: Option<Point>) -> Decision {
        if self.is_dead() {
            return Command::Wait.into();
        }
        match self.role {
            Role::Scout(mode) => scouting::decide(self, mode, ctx),
            Role::Digger(mode) => harvesting::decide(self, mode, ctx, leader_target).into(),
            Role::Saboteur => sabotage::decide(self, ctx).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn context() -> Context {
        Context::new(Config::default(), 30, 15)
    }

    fn digger_at(id: usize, x: i32, y: i32) -> Agent {
        let mut agent = Agent::new(id, Point::new(12, 6));
        agent.position = Point::new(x, y);
        agent.role = Role::Digger(DiggerMode::Idle);
        agent
    }

    #[test]
    fn dead_robot_waits_without_touching_tables() {
        let mut ctx = context();
        ctx.beliefs.observe(Point::new(3, 3), Some(2), false);
        let mut agent = digger_at(2, 0, 0);
        agent.position = Point::DEAD;

        let decision = agent.decide(&mut ctx, Some(Point::new(5, 5)));
        assert_eq!(decision.command, Command::Wait);
        assert!(ctx.claims.is_empty());
        assert!(ctx.forbidden.is_empty());
    }

    #[test]
    fn acquire_keeps_existing_claim() {
        let mut ctx = context();
        ctx.beliefs.observe(Point::new(3, 3), Some(2), false);
        ctx.beliefs.observe(Point::new(20, 3), Some(2), false);
        ctx.claims.claim(Point::new(20, 3), 1);

        let mut agent = digger_at(1, 0, 3);
        assert!(agent.acquire_resource(&mut ctx));
        assert_eq!(agent.target, Point::new(20, 3));
        assert_eq!(ctx.claims.len(), 1);
    }

    #[test]
    fn acquire_claims_nearest_vein() {
        let mut ctx = context();
        ctx.beliefs.observe(Point::new(3, 3), Some(2), false);
        ctx.beliefs.observe(Point::new(20, 3), Some(2), false);

        let mut agent = digger_at(1, 0, 3);
        assert!(agent.acquire_resource(&mut ctx));
        assert_eq!(agent.target, Point::new(3, 3));
        assert_eq!(ctx.claims.count_at(Point::new(3, 3)), 1);
    }

    #[test]
    fn backup_target_surrounds_the_leader() {
        let ctx = context();
        let mut agent = digger_at(2, 0, 3);
        agent.backup_target(&ctx, Some(Point::new(5, 5)));
        assert_eq!(agent.target, Point::new(5, 4));
        assert_eq!(agent.role, Role::Digger(DiggerMode::Exploring));

        let mut agent = digger_at(2, 0, 3);
        agent.backup_target(&ctx, None);
        assert_eq!(agent.target, Point::new(15, 6));
        assert_eq!(agent.role, Role::Digger(DiggerMode::Idle));

        // Shifting north off the top edge is not usable.
        let mut agent = digger_at(2, 0, 3);
        agent.backup_target(&ctx, Some(Point::new(9, 0)));
        assert_eq!(agent.target, Point::new(15, 6));
    }

    #[test]
    fn shifted_target_falls_back_to_radar_site_then_centre() {
        let mut ctx = context();
        let mut agent = digger_at(3, 20, 5);
        agent.target = Point::new(29, 5);
        assert_eq!(agent.shifted_target(&ctx), Point::new(5, 5));

        ctx.waypoints.clear();
        agent.role = Role::Digger(DiggerMode::Exploring);
        assert_eq!(agent.shifted_target(&ctx), Point::new(14, 7));
        assert_eq!(agent.role, Role::Digger(DiggerMode::Idle));

        agent.target = Point::new(20, 5);
        assert_eq!(agent.shifted_target(&ctx), Point::new(21, 5));
    }

    #[test]
    fn explore_next_claims_unknown_cell_when_no_ore_known() {
        let mut ctx = context();
        let mut agent = digger_at(1, 8, 5);
        agent.explore_next(&mut ctx);
        assert_eq!(agent.target, Point::new(8, 5));
        assert_eq!(ctx.claims.claim_of(1), Some(Point::new(8, 5)));
    }

    #[test]
    fn explore_next_prefers_known_ore() {
        let mut ctx = context();
        ctx.beliefs.observe(Point::new(15, 5), Some(1), false);
        let mut agent = digger_at(1, 8, 5);
        agent.role = Role::Digger(DiggerMode::Exploring);
        agent.explore_next(&mut ctx);
        assert_eq!(agent.target, Point::new(15, 5));
        assert_eq!(agent.role, Role::Digger(DiggerMode::Idle));
    }
}
