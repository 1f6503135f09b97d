//! Player, Gender, and Unit (fixed-pair mode) data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a player, 1-based and local to its gender (as shown to users).
pub type PlayerId = usize;

/// Every team holds two males and two females; ids are numbered per gender.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// `last_played` for a player who has never played. Chosen so the first
/// gap `match_index - last_played` is already positive at match 0.
pub const NEVER_PLAYED: i64 = -2;

/// Per-player rotation state during one balanced-mode generation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub play_count: u32,
    /// Match index (0-based) of the last appearance, or [`NEVER_PLAYED`].
    pub last_played: i64,
    /// First match index (0-based) at which this player may be selected.
    pub start_index: usize,
}

impl Player {
    /// Original roster member, eligible from the first match.
    pub fn new() -> Self {
        Self::joining_at(0)
    }

    /// Late joiner, eligible from `start_index` (0-based) on.
    pub fn joining_at(start_index: usize) -> Self {
        Self {
            play_count: 0,
            last_played: NEVER_PLAYED,
            start_index,
        }
    }

    /// Whether the player has joined by `match_index`.
    pub fn is_eligible(&self, match_index: usize) -> bool {
        match_index >= self.start_index
    }

    /// Record an appearance in the match at `match_index`.
    pub fn record_play(&mut self, match_index: usize) {
        self.play_count += 1;
        self.last_played = match_index as i64;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-pair mode's selectable group: two adjacent players, or a lone
/// leftover when the roster is odd. Members are 0-based indices.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unit {
    pub members: Vec<usize>,
    pub play_count: u32,
}

impl Unit {
    /// Group `0..n` into units by adjacent index: {0,1}, {2,3}, ... with an
    /// odd last player alone.
    pub fn form_units(n: usize) -> Vec<Unit> {
        (0..n)
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|members| Unit {
                members: members.to_vec(),
                play_count: 0,
            })
            .collect()
    }

    /// Whether the 0-based `index` is a member.
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }
}
