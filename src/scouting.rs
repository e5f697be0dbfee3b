use tracing::{debug,info};

use super::agent::*;
use super::context::Context;
use super::geometry;
use super::model::*;

/// The scout fetches radars and plants them on the predetermined sites.
pub fn decide(agent: &mut Agent, mode: ScoutMode, ctx: &mut Context) -> Decision {
    if mode == ScoutMode::ReturnAfterScout {
        // One chance to dig beside the new radar, then back to shuttling
        agent.reset_mode();
        if agent.item == Item::Nothing {
            if let Some(vein) = vein_in_reach(agent, ctx) {
                ctx.claims.claim(vein, agent.id);
                agent.target = agent.home();
                return Command::Dig(vein).into();
            }
        }
    }

    debug!(agent = agent.id, x = agent.position.x, y = agent.position.y, item = ?agent.item, "scout status");
    match agent.item {
        Item::Nothing => shuttle(agent, ctx),
        Item::Radar | Item::Trap => plant(agent, ctx).into(),
        Item::Ore => {
            agent.target = agent.home();
            Command::Move(agent.target).into()
        },
    }
}

/// Nearest spare vein, if it can be dug from where we stand.
fn vein_in_reach(agent: &Agent, ctx: &Context) -> Option<Point> {
    ctx.nearest_unclaimed_resource(agent.position)
        .filter(|&vein| geometry::reachable(agent.position, vein))
}

fn shuttle(agent: &mut Agent, ctx: &mut Context) -> Decision {
    if ctx.waypoints.is_empty() {
        return become_digger(agent, ctx).into();
    }
    if !agent.at_home() {
        agent.target = agent.home();
        return Command::Move(agent.target).into();
    }
    if !ctx.can_request_radar() {
        return Command::Wait.into();
    }
    if let Some(site) = ctx.waypoints.pop() {
        info!(agent = agent.id, x = site.x, y = site.y, remaining = ctx.waypoints.len(), "requesting radar");
        agent.target = site;
    }
    Decision {
        command: Command::RequestRadar,
        broadcast: Some(Broadcast::ReleaseWaiters),
    }
}

fn plant(agent: &mut Agent, ctx: &mut Context) -> Command {
    // Never plant on our own base column
    if agent.target.x <= 0 {
        agent.target = ctx.waypoints.pop().unwrap_or(ctx.config.central_target);
        debug!(agent = agent.id, x = agent.target.x, y = agent.target.y, "radar had no site");
    }
    if !agent.target_reachable() {
        return agent.move_to_target(ctx);
    }

    let site = agent.target;
    agent.role = Role::Scout(ScoutMode::ReturnAfterScout);
    ctx.claims.release_all(agent.id);
    Command::Dig(site)
}

/// Out of radar sites: the scout joins the diggers for good.
fn become_digger(agent: &mut Agent, ctx: &mut Context) -> Command {
    info!(agent = agent.id, "no radar sites left, scout becomes digger");
    agent.set_role(Role::Digger(DiggerMode::Idle));
    agent.acquire_resource(ctx);
    agent.move_to_target(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn context() -> Context {
        Context::new(Config::default(), 30, 15)
    }

    fn scout_at(x: i32, y: i32, item: Item) -> Agent {
        let mut agent = Agent::new(0, Point::new(12, 6));
        agent.position = Point::new(x, y);
        agent.item = item;
        agent
    }

    #[test]
    fn requests_radar_and_pops_one_site() {
        let mut ctx = context();
        let mut scout = scout_at(0, 7, Item::Nothing);

        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::RequestRadar);
        assert_eq!(decision.broadcast, Some(Broadcast::ReleaseWaiters));
        assert_eq!(scout.target, Point::new(5, 5));
        assert_eq!(ctx.waypoints.len(), 10);
    }

    #[test]
    fn becomes_digger_for_good_when_sites_run_out() {
        let mut ctx = context();
        ctx.waypoints.clear();
        ctx.beliefs.observe(Point::new(6, 7), Some(2), false);
        let mut scout = scout_at(0, 7, Item::Nothing);

        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::Move(Point::new(6, 7)));
        assert!(scout.role.is_digger());

        for _ in 0..3 {
            let decision = scout.decide(&mut ctx, None);
            assert_ne!(decision.command, Command::RequestRadar);
            assert!(scout.role.is_digger());
        }
    }

    #[test]
    fn empty_scout_away_from_home_returns() {
        let mut ctx = context();
        let mut scout = scout_at(9, 4, Item::Nothing);
        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::Move(Point::new(0, 4)));
    }

    #[test]
    fn carries_radar_to_site_then_plants_it() {
        let mut ctx = context();
        let mut scout = scout_at(1, 5, Item::Radar);
        scout.target = Point::new(5, 5);

        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::Move(Point::new(5, 5)));

        scout.position = Point::new(4, 5);
        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::Dig(Point::new(5, 5)));
        assert_eq!(scout.role, Role::Scout(ScoutMode::ReturnAfterScout));
    }

    #[test]
    fn digs_a_nearby_vein_after_planting() {
        let mut ctx = context();
        ctx.beliefs.observe(Point::new(4, 6), Some(2), false);
        let mut scout = scout_at(4, 5, Item::Nothing);
        scout.role = Role::Scout(ScoutMode::ReturnAfterScout);
        scout.target = Point::new(5, 5);

        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::Dig(Point::new(4, 6)));
        assert_eq!(scout.role, Role::Scout(ScoutMode::Idle));
        assert_eq!(scout.target, Point::new(0, 5));
        assert_eq!(ctx.claims.claim_of(0), Some(Point::new(4, 6)));

        // Next turn it carries the ore straight home.
        scout.item = Item::Ore;
        scout.position = Point::new(1, 6);
        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::Move(Point::new(0, 6)));
    }

    #[test]
    fn out_of_reach_vein_is_left_unclaimed_after_planting() {
        let mut ctx = context();
        ctx.beliefs.observe(Point::new(7, 7), Some(1), false);
        let mut scout = scout_at(4, 5, Item::Nothing);
        scout.role = Role::Scout(ScoutMode::ReturnAfterScout);
        scout.target = Point::new(5, 5);

        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::Move(Point::new(0, 5)));
        assert_eq!(scout.role, Role::Scout(ScoutMode::Idle));
        assert!(ctx.claims.is_empty());
    }

    #[test]
    fn second_radar_goes_to_the_next_site() {
        let mut ctx = context();
        let mut scout = scout_at(0, 5, Item::Nothing);

        assert_eq!(scout.decide(&mut ctx, None).command, Command::RequestRadar);
        assert_eq!(scout.target, Point::new(5, 5));

        scout.item = Item::Radar;
        scout.position = Point::new(4, 5);
        assert_eq!(scout.decide(&mut ctx, None).command, Command::Dig(Point::new(5, 5)));

        // No ore known anywhere: walk home empty handed.
        scout.item = Item::Nothing;
        assert_eq!(scout.decide(&mut ctx, None).command, Command::Move(Point::new(0, 5)));
        assert_eq!(scout.role, Role::Scout(ScoutMode::Idle));

        scout.position = Point::new(0, 5);
        assert_eq!(scout.decide(&mut ctx, None).command, Command::RequestRadar);
        let site = scout.target;
        assert_eq!(site, Point::new(10, 9));

        scout.item = Item::Radar;
        assert_eq!(scout.decide(&mut ctx, None).command, Command::Move(site));
        assert_eq!(scout.target, site);

        scout.position = Point::new(9, 9);
        assert_eq!(scout.decide(&mut ctx, None).command, Command::Dig(site));
    }

    #[test]
    fn radar_is_never_planted_at_home() {
        let mut ctx = context();
        let mut scout = scout_at(1, 5, Item::Radar);
        scout.target = Point::new(0, 5);

        assert_eq!(scout.decide(&mut ctx, None).command, Command::Move(Point::new(5, 5)));
        assert_eq!(ctx.waypoints.len(), 10);
    }

    #[test]
    fn waits_for_cooldown_when_respecting_it() {
        let mut config = Config::default();
        config.respect_cooldowns = true;
        let mut ctx = Context::new(config, 30, 15);
        ctx.radar_cooldown = 3;
        let mut scout = scout_at(0, 7, Item::Nothing);

        let decision = scout.decide(&mut ctx, None);
        assert_eq!(decision.command, Command::Wait);
        assert_eq!(ctx.waypoints.len(), 11);
    }
}
