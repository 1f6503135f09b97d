//! Scheduling logic: selection, team splitting, the three modes, stats.

mod balanced;
mod fixed_pairs;
mod generate;
mod pair_history;
mod random;
mod selection;
mod stats;
mod team_split;

pub use balanced::{generate_balanced, BalancedGenerator};
pub use fixed_pairs::{assign_units, generate_fixed_pairs, FixedPairGenerator};
pub use generate::{generate, generate_with_rng};
pub use pair_history::PairHistory;
pub use random::{draw_random_match, generate_random, random_match, MAX_SHUFFLE_ATTEMPTS};
pub use selection::{priority, select_four, NOT_JOINED_PRIORITY, PLAYERS_PER_MATCH, PLAY_COUNT_WEIGHT};
pub use stats::snapshot;
pub use team_split::{best_split, TeamPairs, TeamSplit, COLLISION_PENALTY};
