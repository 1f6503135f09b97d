//! Balanced mode: split four males and four females into two teams.
//!
//! 3 male partitions x 3 female partitions x {straight, swapped} = 18
//! candidates, scored by repeated-teammate count plus a large penalty for
//! each team where a male and a female share a numeric id. The first
//! candidate with the strictly lowest cost wins.

use crate::logic::pair_history::PairHistory;

/// Added once per team whose male and female halves share an index.
pub const COLLISION_PENALTY: u32 = 10_000;

/// The three ways to split positions 0..4 into two unordered pairs.
const PARTITIONS: [[[usize; 2]; 2]; 3] = [
    [[0, 1], [2, 3]],
    [[0, 2], [1, 3]],
    [[0, 3], [1, 2]],
];

/// One team: two male and two female indices (0-based).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TeamPairs {
    pub males: [usize; 2],
    pub females: [usize; 2],
}

impl TeamPairs {
    pub fn has_collision(&self) -> bool {
        self.males.iter().any(|m| self.females.contains(m))
    }
}

/// Chosen split and its cost.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TeamSplit {
    pub team1: TeamPairs,
    pub team2: TeamPairs,
    pub cost: u32,
}

impl TeamSplit {
    pub fn has_collision(&self) -> bool {
        self.team1.has_collision() || self.team2.has_collision()
    }
}

fn pick(selected: &[usize; 4], positions: [usize; 2]) -> [usize; 2] {
    [selected[positions[0]], selected[positions[1]]]
}

fn collision_cost(team: &TeamPairs) -> u32 {
    if team.has_collision() {
        COLLISION_PENALTY
    } else {
        0
    }
}

fn evaluate(
    males: &[usize; 4],
    females: &[usize; 4],
    male_history: &PairHistory,
    female_history: &PairHistory,
    male_partition: &[[usize; 2]; 2],
    female_partition: &[[usize; 2]; 2],
    swapped: bool,
) -> TeamSplit {
    let male_a = pick(males, male_partition[0]);
    let male_b = pick(males, male_partition[1]);
    let female_a = pick(females, female_partition[0]);
    let female_b = pick(females, female_partition[1]);
    let (first, second) = if swapped {
        (female_b, female_a)
    } else {
        (female_a, female_b)
    };

    let team1 = TeamPairs {
        males: male_a,
        females: first,
    };
    let team2 = TeamPairs {
        males: male_b,
        females: second,
    };
    // Repetition cost does not depend on which female pair joins which male pair.
    let cost = male_history.pair_cost(male_a)
        + male_history.pair_cost(male_b)
        + female_history.pair_cost(female_a)
        + female_history.pair_cost(female_b)
        + collision_cost(&team1)
        + collision_cost(&team2);
    TeamSplit { team1, team2, cost }
}

/// Lowest-cost split of the selected players; ties go to the earliest candidate.
pub fn best_split(
    males: &[usize; 4],
    females: &[usize; 4],
    male_history: &PairHistory,
    female_history: &PairHistory,
) -> TeamSplit {
    let mut best = evaluate(
        males,
        females,
        male_history,
        female_history,
        &PARTITIONS[0],
        &PARTITIONS[0],
        false,
    );

    for male_partition in &PARTITIONS {
        for female_partition in &PARTITIONS {
            for swapped in [false, true] {
                let candidate = evaluate(
                    males,
                    females,
                    male_history,
                    female_history,
                    male_partition,
                    female_partition,
                    swapped,
                );
                if candidate.cost < best.cost {
                    best = candidate;
                }
            }
        }
    }

    best
}
