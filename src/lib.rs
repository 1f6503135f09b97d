//! Soft volleyball rotation: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{
    assign_units, best_split, draw_random_match, generate, generate_balanced,
    generate_fixed_pairs, generate_random, generate_with_rng, priority, random_match, select_four, snapshot, BalancedGenerator,
    FixedPairGenerator, PairHistory, TeamPairs, TeamSplit, COLLISION_PENALTY,
    MAX_SHUFFLE_ATTEMPTS, NOT_JOINED_PRIORITY, PLAYERS_PER_MATCH, PLAY_COUNT_WEIGHT,
};
pub use models::{
    ConfigError, Gender, GenerateError, Lineup, PlayStats, Player, PlayerId, Schedule,
    ScheduleConfig, ScheduleError, ScheduleMode, ScheduledMatch, Unit, MAX_COUNT,
    MIN_PLAYERS_PER_GENDER, NEVER_PLAYED,
};
