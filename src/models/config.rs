//! Generation inputs (roster sizes, match count, mode, late joiners) and their validation.

use crate::models::player::Gender;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum base roster per gender: one match needs four of each.
pub const MIN_PLAYERS_PER_GENDER: usize = 4;

/// Upper bound on players per gender and on matches.
pub const MAX_COUNT: usize = 1000;

/// How players are rotated through matches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleMode {
    /// Even play counts, fewest repeated teammates. Supports late joiners.
    #[default]
    Balanced,
    /// Adjacent players form fixed pairs that always play together.
    FixedPairs,
    /// Every match drawn at random.
    Random,
}

impl fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleMode::Balanced => write!(f, "balanced"),
            ScheduleMode::FixedPairs => write!(f, "fixed_pairs"),
            ScheduleMode::Random => write!(f, "random"),
        }
    }
}

impl FromStr for ScheduleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balanced" => Ok(ScheduleMode::Balanced),
            "fixed_pairs" | "fixed-pairs" => Ok(ScheduleMode::FixedPairs),
            "random" => Ok(ScheduleMode::Random),
            other => Err(format!(
                "unknown mode '{}' (expected balanced, fixed_pairs or random)",
                other
            )),
        }
    }
}

/// Errors raised before any match is generated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Base roster of one gender is below [`MIN_PLAYERS_PER_GENDER`].
    TooFewPlayers { gender: Gender, count: usize },
    /// Match count is zero.
    NoMatches,
    /// A player total or the match count exceeds [`MAX_COUNT`].
    TooLarge { what: &'static str, value: usize },
    /// Late joiners were requested with a start match of 0 (matches are 1-based).
    InvalidLateStart,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewPlayers { gender, count } => write!(
                f,
                "Need at least {} {} players (got {})",
                MIN_PLAYERS_PER_GENDER, gender, count
            ),
            ConfigError::NoMatches => write!(f, "Match count must be at least 1"),
            ConfigError::TooLarge { what, value } => {
                write!(f, "Too many {} ({} > {})", what, value, MAX_COUNT)
            }
            ConfigError::InvalidLateStart => {
                write!(f, "Late joiners' start match must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn default_late_start_match() -> usize {
    1
}

/// Everything one `generate` call needs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub male_count: usize,
    pub female_count: usize,
    pub match_count: usize,
    #[serde(default)]
    pub mode: ScheduleMode,
    /// Extra males joining mid-schedule (balanced mode only).
    #[serde(default)]
    pub late_male_count: usize,
    /// Extra females joining mid-schedule (balanced mode only).
    #[serde(default)]
    pub late_female_count: usize,
    /// 1-based match from which late joiners are eligible.
    #[serde(default = "default_late_start_match")]
    pub late_start_match: usize,
}

impl ScheduleConfig {
    /// Config without late joiners.
    pub fn new(male_count: usize, female_count: usize, match_count: usize, mode: ScheduleMode) -> Self {
        Self {
            male_count,
            female_count,
            match_count,
            mode,
            late_male_count: 0,
            late_female_count: 0,
            late_start_match: default_late_start_match(),
        }
    }

    /// Add late joiners eligible from the 1-based `start_match` on.
    pub fn with_late_joiners(mut self, males: usize, females: usize, start_match: usize) -> Self {
        self.late_male_count = males;
        self.late_female_count = females;
        self.late_start_match = start_match;
        self
    }

    fn uses_late_joiners(&self) -> bool {
        self.mode == ScheduleMode::Balanced
    }

    /// Males known to the generation call. Late joiners count only in balanced mode.
    pub fn total_males(&self) -> usize {
        if self.uses_late_joiners() {
            self.male_count + self.late_male_count
        } else {
            self.male_count
        }
    }

    /// Females known to the generation call. Late joiners count only in balanced mode.
    pub fn total_females(&self) -> usize {
        if self.uses_late_joiners() {
            self.female_count + self.late_female_count
        } else {
            self.female_count
        }
    }

    /// [`Self::total_males`] or [`Self::total_females`] by gender.
    pub fn total(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.total_males(),
            Gender::Female => self.total_females(),
        }
    }

    /// 0-based match index at which late joiners become eligible.
    pub fn late_start_index(&self) -> usize {
        self.late_start_match.saturating_sub(1)
    }

    /// Check roster sizes, match count, and upper bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.male_count < MIN_PLAYERS_PER_GENDER {
            return Err(ConfigError::TooFewPlayers {
                gender: Gender::Male,
                count: self.male_count,
            });
        }
        if self.female_count < MIN_PLAYERS_PER_GENDER {
            return Err(ConfigError::TooFewPlayers {
                gender: Gender::Female,
                count: self.female_count,
            });
        }
        if self.match_count < 1 {
            return Err(ConfigError::NoMatches);
        }
        let limits = [
            ("males", self.total_males()),
            ("females", self.total_females()),
            ("matches", self.match_count),
        ];
        for (what, value) in limits {
            if value > MAX_COUNT {
                return Err(ConfigError::TooLarge { what, value });
            }
        }
        let has_late = self.late_male_count > 0 || self.late_female_count > 0;
        if self.uses_late_joiners() && has_late && self.late_start_match == 0 {
            return Err(ConfigError::InvalidLateStart);
        }
        Ok(())
    }
}
