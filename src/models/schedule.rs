//! Schedule (the generated match list) and the errors generation can raise.

use crate::models::config::{ConfigError, ScheduleMode};
use crate::models::game::ScheduledMatch;
use crate::models::player::{Gender, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raised mid-generation when a gender has fewer than four joined players.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    NotEnoughEligible { match_number: usize, gender: Gender },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::NotEnoughEligible {
                match_number,
                gender,
            } => write!(
                f,
                "Match {}: fewer than 4 {} players have joined",
                match_number, gender
            ),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Anything that stops `generate`. No partial schedule is ever returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GenerateError {
    Config(ConfigError),
    Schedule(ScheduleError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Config(e) => write!(f, "{}", e),
            GenerateError::Schedule(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Config(e) => Some(e),
            GenerateError::Schedule(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        GenerateError::Config(e)
    }
}

impl From<ScheduleError> for GenerateError {
    fn from(e: ScheduleError) -> Self {
        GenerateError::Schedule(e)
    }
}

/// Result of one generation run. Owned by the caller; regenerating means
/// calling `generate` again.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub mode: ScheduleMode,
    /// Roster sizes including late joiners (balanced mode).
    pub total_males: usize,
    pub total_females: usize,
    pub matches: Vec<ScheduledMatch>,
}

impl Schedule {
    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Match at 0-based `index`.
    pub fn get(&self, index: usize) -> Option<&ScheduledMatch> {
        self.matches.get(index)
    }
}

/// Cumulative appearances per player; index `id - 1` holds player `id`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayStats {
    pub male_counts: Vec<u32>,
    pub female_counts: Vec<u32>,
}

impl PlayStats {
    /// Counts of one gender, indexed by `id - 1`.
    pub fn counts(&self, gender: Gender) -> &[u32] {
        match gender {
            Gender::Male => &self.male_counts,
            Gender::Female => &self.female_counts,
        }
    }

    /// Appearances of the player with 1-based `id`, or 0 if out of range.
    pub fn count(&self, gender: Gender, id: PlayerId) -> u32 {
        id.checked_sub(1)
            .and_then(|i| self.counts(gender).get(i).copied())
            .unwrap_or(0)
    }
}
