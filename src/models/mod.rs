//! Data structures for the rotation: players, units, matches, schedule, config.

mod config;
mod game;
mod player;
mod schedule;

pub use config::{ConfigError, ScheduleConfig, ScheduleMode, MAX_COUNT, MIN_PLAYERS_PER_GENDER};
pub use game::{Lineup, ScheduledMatch};
pub use player::{Gender, Player, PlayerId, Unit, NEVER_PLAYED};
pub use schedule::{GenerateError, PlayStats, Schedule, ScheduleError};
