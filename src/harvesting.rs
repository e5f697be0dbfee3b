use tracing::debug;

use super::agent::Agent;
use super::context::Context;
use super::geometry;
use super::model::*;

/// Diggers mine known veins, or dig blind around the leader while nothing is known.
pub fn decide(agent: &mut Agent, mode: DiggerMode, ctx: &mut Context, leader_target: Option<Point>) -> Command {
    match mode {
        DiggerMode::ResourceWait => {
            if agent.acquire_resource(ctx) {
                agent.reset_mode();
                return Command::Move(agent.target);
            }
            return Command::Wait;
        },
        DiggerMode::EscortWait => return escort(agent, ctx, leader_target),
        DiggerMode::Idle | DiggerMode::Exploring => {},
    }

    if agent.item == Item::Nothing {
        if agent.at_home() || agent.target.x == 0 {
            acquire_or_backup(agent, ctx, leader_target);
            if agent.at_home() {
                return act_on_target(agent, ctx);
            }
        }
        if ctx.beliefs.ore_at(agent.target) == Some(0) {
            debug!(agent = agent.id, x = agent.target.x, y = agent.target.y, "target depleted");
            ctx.claims.release_all(agent.id);
            agent.explore_next(ctx);
        }
        if !agent.target_reachable() {
            return agent.move_to_target(ctx);
        }
        let dig = agent.target;
        ctx.claims.release_all(agent.id);
        agent.explore_next(ctx);
        return Command::Dig(dig);
    }

    if agent.at_home() {
        acquire_or_backup(agent, ctx, leader_target);
        return act_on_target(agent, ctx);
    }

    // Carrying: take it home, giving up on any blind digging
    agent.target = agent.home();
    if mode == DiggerMode::Exploring {
        agent.reset_mode();
    }
    Command::Move(agent.target)
}

/// Head for our side of the scout's radar site and park there until ore shows up.
fn escort(agent: &mut Agent, ctx: &Context, leader_target: Option<Point>) -> Command {
    if agent.on_target() {
        debug!(agent = agent.id, "escort arrived, waiting for ore");
        agent.set_digger_mode(DiggerMode::ResourceWait);
        return Command::Wait;
    }
    let staging = leader_target
        .filter(|target| target.x > 0)
        .map(|target| geometry::shift_by_id(agent.id, target))
        .filter(|&staging| ctx.beliefs.in_bounds(staging));
    if let Some(staging) = staging {
        agent.target = staging;
    }
    if agent.on_target() {
        agent.set_digger_mode(DiggerMode::ResourceWait);
        return Command::Wait;
    }
    agent.move_to_target(ctx)
}

fn acquire_or_backup(agent: &mut Agent, ctx: &mut Context, leader_target: Option<Point>) {
    if agent.acquire_resource(ctx) {
        agent.reset_mode();
    } else {
        agent.backup_target(ctx, leader_target);
    }
}

fn act_on_target(agent: &Agent, ctx: &Context) -> Command {
    if agent.target_reachable() {
        Command::Dig(agent.target)
    } else {
        agent.move_to_target(ctx)
    }
}
