//! Tunables for the bot.
//!
//! Defaults are the values the bot plays with. A few switches can be flipped
//! through environment variables when running locally:
//! - `ORE_SABOTAGE` -- promote one digger to plant traps (default `false`)
//! - `ORE_RESPECT_COOLDOWNS` -- only request items when the cooldown is over (default `false`)
//! - `ORE_ANNOTATE_ROLES` -- append the role name to each command line (default `false`)

use std::env::VarError;
use std::ops::RangeInclusive;

use super::error::ConfigError;
use super::model::*;

#[derive(Clone,Debug)]
pub struct Config {
    /// Radar sites, popped from the back: the last entry is placed first.
    pub waypoints: Vec<Point>,
    /// Where every robot heads before anything is known.
    pub initial_target: Point,
    /// Backup target for diggers when the leader has nothing usable.
    pub backup_target: Point,
    /// Fallback when a shifted target leaves the map and no radar site is left.
    pub central_target: Point,
    /// Blind exploration never picks cells left of this column.
    pub min_explore_x: i32,
    /// Traps are only planted strictly right of this column.
    pub min_mineable_x: i32,
    /// Claim-count penalty per forbid of a cell.
    pub forbidden_weight: i64,
    pub sabotage: bool,
    /// Remaining radar sites during which a saboteur may be designated.
    pub sabotage_window: RangeInclusive<usize>,
    pub respect_cooldowns: bool,
    pub annotate_roles: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            waypoints: vec![
                Point::new(29, 11),
                Point::new(23, 12),
                Point::new(23, 3),
                Point::new(1, 10),
                Point::new(19, 8),
                Point::new(15, 12),
                Point::new(9, 0),
                Point::new(14, 4),
                Point::new(6, 13),
                Point::new(10, 9),
                Point::new(5, 5),
            ],
            initial_target: Point::new(12, 6),
            backup_target: Point::new(15, 6),
            central_target: Point::new(14, 7),
            min_explore_x: 7,
            min_mineable_x: 10,
            forbidden_weight: 20,
            sabotage: false,
            sabotage_window: 5..=7,
            respect_cooldowns: false,
            annotate_roles: false,
        }
    }
}
impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = env_flag("ORE_SABOTAGE")? {
            config.sabotage = value;
        }
        if let Some(value) = env_flag("ORE_RESPECT_COOLDOWNS")? {
            config.respect_cooldowns = value;
        }
        if let Some(value) = env_flag("ORE_ANNOTATE_ROLES")? {
            config.annotate_roles = value;
        }
        Ok(config)
    }
}

fn env_flag(name: &'static str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_flag(name, &value).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => Err(ConfigError::Invalid {
            name,
            reason: format!("not valid unicode: {value:?}"),
        }),
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}
