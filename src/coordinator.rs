use tracing::{debug,info,warn};

use super::agent::*;
use super::config::Config;
use super::context::Context;
use super::geometry::manhattan;
use super::inputs::*;
use super::model::*;

/// Runs the team: refreshes what we know, settles disputes over veins, keeps a
/// scout alive, then lets every robot decide in id order.
pub struct Coordinator {
    pub context: Context,
    pub agents: Vec<Agent>,
    pub turn: u32,
    saboteur_designated: bool,
}
impl Coordinator {
    pub fn new(config: Config, width: usize, height: usize) -> Self {
        let agents = (0..NUM_AGENTS).map(|id| Agent::new(id, config.initial_target)).collect();
        Self {
            context: Context::new(config, width, height),
            agents,
            turn: 0,
            saboteur_designated: false,
        }
    }

    /// One command per robot, in id order.
    pub fn act(&mut self, snapshot: &Snapshot) -> Vec<Command> {
        self.turn += 1;
        self.observe(snapshot);
        self.resolve_conflicts();
        self.ensure_scout();

        let remaining = self.context.waypoints.len();
        if self.context.config.sabotage && self.context.config.sabotage_window.contains(&remaining) {
            self.designate_saboteur();
        }

        let commands = self.decide_all();
        debug!(turn = self.turn, claims = self.context.claims.len(), forbidden = self.context.forbidden.len(), "turn decided");
        commands
    }

    pub fn observe(&mut self, snapshot: &Snapshot) {
        let ctx = &mut self.context;
        ctx.beliefs.refresh(snapshot);
        ctx.radar_cooldown = snapshot.radar_cooldown;
        ctx.trap_cooldown = snapshot.trap_cooldown;

        let mut robots = snapshot.my_robots();
        for agent in self.agents.iter_mut() {
            match robots.next() {
                Some(entity) => {
                    agent.entity_id = Some(entity.id);
                    agent.position = entity.position;
                    agent.item = entity.item;
                },
                None => {
                    agent.position = Point::DEAD;
                    agent.item = Item::Nothing;
                },
            }
            if agent.is_dead() {
                ctx.claims.release_all(agent.id);
            }
        }
    }

    /// Sort out veins with more claimants than units left.
    ///
    /// Diggers still heading for such a vein are sent to the closest spare one,
    /// first in id order, until the count fits. Anyone else just drops the claim.
    pub fn resolve_conflicts(&mut self) {
        let ctx = &mut self.context;
        // A scout only holds a vein for the turn it digs it
        for agent in self.agents.iter().filter(|agent| agent.role.is_scout()) {
            ctx.claims.release_all(agent.id);
        }

        let unclaimed: Vec<Point> = ctx.beliefs
            .unclaimed_resources(&ctx.claims, &ctx.forbidden)
            .map(|cell| cell.point)
            .collect();

        for agent in self.agents.iter_mut() {
            if agent.is_dead() { continue }
            let Some(claimed) = ctx.claims.claim_of(agent.id) else { continue };
            let Some(ore) = ctx.beliefs.ore_at(claimed) else { continue };
            let contestants = ctx.claims.count_at(claimed);
            if contestants <= ore as usize { continue }

            if !agent.role.is_digger() || agent.target != claimed {
                info!(agent = agent.id, at = %claimed, ore, contestants, "dropping claim on oversubscribed vein");
                ctx.claims.release_all(agent.id);
                continue;
            }

            let position = agent.position;
            if let Some(&closest) = unclaimed.iter().min_by_key(|&&cell| manhattan(cell, position)) {
                info!(agent = agent.id, from = %agent.target, to = %closest, ore, contestants, "redirecting because of conflict");
                ctx.claims.release_all(agent.id);
                agent.reset_mode();
                agent.target = closest;
            }
        }
    }

    pub fn scout_is_dead(&self) -> bool {
        self.agents.iter().any(|agent| agent.role.is_scout() && agent.is_dead())
    }

    pub fn ensure_scout(&mut self) {
        if !self.scout_is_dead() { return }

        match self.agents.iter().position(|agent| !agent.is_dead()) {
            Some(index) => {
                let id = self.agents[index].id;
                warn!(agent = id, "scout lost, promoting replacement");
                self.set_scout(id);
            },
            None => warn!("scout lost and no robot left to replace it"),
        }
    }

    pub fn set_scout(&mut self, scout: usize) {
        for agent in self.agents.iter_mut() {
            if agent.id == scout {
                self.context.claims.release_all(agent.id);
                agent.set_role(Role::Scout(ScoutMode::Idle));
                agent.leader = None;
            } else {
                if agent.role.is_scout() {
                    agent.set_role(Role::Digger(DiggerMode::Idle));
                }
                agent.leader = Some(scout);
            }
        }
    }

    /// Turn one digger into a saboteur, once per match.
    pub fn designate_saboteur(&mut self) -> bool {
        if self.saboteur_designated { return false }

        let ctx = &mut self.context;
        let places = ctx.mineable_places();
        let mut candidates: Vec<&mut Agent> = self.agents.iter_mut()
            .filter(|agent| {
                !agent.is_dead()
                    && agent.role.is_digger()
                    && matches!(agent.item, Item::Nothing | Item::Ore)
            })
            .collect();
        if candidates.is_empty() {
            debug!("no saboteur candidates");
            return false;
        }
        let Some(&site) = places.first() else {
            debug!("no mineable places");
            return false;
        };

        candidates.sort_by_key(|agent| agent.position.x);
        let saboteur = &mut candidates[0];
        info!(agent = saboteur.id, x = site.x, y = site.y, "designating saboteur");
        ctx.claims.release_all(saboteur.id);
        saboteur.set_role(Role::Saboteur);
        saboteur.target = site;
        ctx.forbidden.forbid(site);
        self.saboteur_designated = true;
        true
    }

    fn decide_all(&mut self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(self.agents.len());
        for index in 0..self.agents.len() {
            let leader_target = self.leader_target(index);
            let decision = self.agents[index].decide(&mut self.context, leader_target);
            if let Some(broadcast) = decision.broadcast {
                self.apply(broadcast);
            }
            commands.push(decision.command);
        }
        commands
    }

    /// A dead leader has nothing to offer.
    fn leader_target(&self, index: usize) -> Option<Point> {
        self.agents[index].leader
            .and_then(|leader| self.agents.get(leader))
            .filter(|leader| !leader.is_dead())
            .map(|leader| leader.target)
    }

    fn apply(&mut self, broadcast: Broadcast) {
        match broadcast {
            Broadcast::ReleaseWaiters => {
                for agent in self.agents.iter_mut() {
                    if agent.role == Role::Digger(DiggerMode::ResourceWait) {
                        debug!(agent = agent.id, "resetting wait for ore");
                        agent.reset_mode();
                    }
                }
            },
        }
    }
}
