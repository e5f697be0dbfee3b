use tracing::info;

use super::agent::Agent;
use super::context::Context;
use super::geometry::{self, manhattan};
use super::model::*;

/// The saboteur ferries traps from home to reserved veins, then rejoins the diggers
/// once no trap site is left.
pub fn decide(agent: &mut Agent, ctx: &mut Context) -> Command {
    if agent.item != Item::Trap {
        if agent.at_home() {
            if !ctx.can_request_trap() {
                return Command::Wait;
            }
            return Command::RequestTrap;
        }
        return Command::Move(agent.home());
    }

    if !agent.target_reachable() {
        return agent.move_to_target(ctx);
    }

    // Still worth trapping: enough ore left for the enemy radar to see
    if ctx.beliefs.ore_at(agent.target).map_or(false, |ore| ore > 1) {
        let trap = agent.target;
        let places = places_by_distance(agent, ctx);
        match places.first() {
            Some(&next) => reserve(agent, ctx, next),
            None => retire(agent, ctx),
        }
        return Command::Dig(trap);
    }

    // Someone got there first; pick another site.
    let places = places_by_distance(agent, ctx);
    let Some(&first) = places.first() else {
        retire(agent, ctx);
        // Get rid of the trap right where we stand
        let dump = geometry::clamp(Point::new(agent.position.x - 1, agent.position.y), ctx.beliefs.width, ctx.beliefs.height);
        return Command::Dig(dump);
    };
    reserve(agent, ctx, first);
    if !agent.target_reachable() {
        return agent.move_to_target(ctx);
    }
    let trap = agent.target;
    match places.get(1) {
        Some(&next) => reserve(agent, ctx, next),
        None => agent.set_role(Role::Digger(DiggerMode::Idle)),
    }
    Command::Dig(trap)
}

/// Mineable places nearest first; equal distances keep map order.
fn places_by_distance(agent: &Agent, ctx: &Context) -> Vec<Point> {
    let mut places = ctx.mineable_places();
    places.sort_by_key(|&place| manhattan(agent.position, place));
    places
}

fn reserve(agent: &mut Agent, ctx: &mut Context, site: Point) {
    info!(agent = agent.id, x = site.x, y = site.y, "reserving trap site");
    ctx.forbidden.forbid(site);
    agent.target = site;
}

fn retire(agent: &mut Agent, ctx: &mut Context) {
    agent.set_role(Role::Digger(DiggerMode::Idle));
    agent.acquire_resource(ctx);
}
