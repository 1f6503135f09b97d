//! Match record and the male/female lineups it is made of.

use crate::models::player::{Gender, PlayerId};
use serde::{Deserialize, Serialize};

/// Player ids of both genders, e.g. one team or the waiting bench.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub males: Vec<PlayerId>,
    pub females: Vec<PlayerId>,
}

impl Lineup {
    /// Lineup from 1-based ids.
    pub fn new(males: Vec<PlayerId>, females: Vec<PlayerId>) -> Self {
        Self { males, females }
    }

    /// Build from 0-based internal indices, converting to 1-based ids.
    pub fn from_indices(males: &[usize], females: &[usize]) -> Self {
        Self {
            males: males.iter().map(|&i| i + 1).collect(),
            females: females.iter().map(|&i| i + 1).collect(),
        }
    }

    /// Ids of one gender.
    pub fn ids(&self, gender: Gender) -> &[PlayerId] {
        match gender {
            Gender::Male => &self.males,
            Gender::Female => &self.females,
        }
    }

    /// True when some numeric id is used by both a male and a female.
    pub fn has_id_collision(&self) -> bool {
        self.males.iter().any(|m| self.females.contains(m))
    }

    /// True when nobody of either gender is listed.
    pub fn is_empty(&self) -> bool {
        self.males.is_empty() && self.females.is_empty()
    }
}

/// A single scheduled match: two teams plus everyone sitting out.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    /// 1-based position in the schedule.
    pub number: usize,
    pub team1: Lineup,
    pub team2: Lineup,
    /// Eligible players not on either team.
    pub waiting: Lineup,
}

impl ScheduledMatch {
    /// Every id of `gender` in this match: team 1, team 2, then waiting.
    pub fn all_ids(&self, gender: Gender) -> impl Iterator<Item = PlayerId> + '_ {
        self.team1
            .ids(gender)
            .iter()
            .chain(self.team2.ids(gender))
            .chain(self.waiting.ids(gender))
            .copied()
    }

    /// Whether `id` of `gender` is on either team.
    pub fn is_playing(&self, gender: Gender, id: PlayerId) -> bool {
        self.team1.ids(gender).contains(&id) || self.team2.ids(gender).contains(&id)
    }
}
