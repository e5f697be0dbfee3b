//! Bot for a five-robot ore mining contest.
//!
//! Each turn the [`coordinator::Coordinator`] folds the referee's snapshot into
//! a [`beliefs::BeliefMap`], settles disputes recorded in the
//! [`claims::ClaimTable`], keeps one robot scouting and asks every robot, in id
//! order, for exactly one command.

pub mod agent;
pub mod beliefs;
pub mod claims;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod error;
pub mod forbidden;
pub mod geometry;
pub mod harvesting;
pub mod inputs;
pub mod interface;
pub mod model;
pub mod movement;
pub mod sabotage;
pub mod scouting;
