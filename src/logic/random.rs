//! Random mode: every match is an independent shuffle of the full roster.

use crate::models::{Lineup, ScheduleConfig, ScheduledMatch};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffles tried per match before accepting a split with an id collision.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 20;

fn sorted_ids(indices: &[usize]) -> Vec<usize> {
    let mut ids: Vec<usize> = indices.iter().map(|&i| i + 1).collect();
    ids.sort_unstable();
    ids
}

/// One shuffled split: teams from positions [0,1] and [2,3], the rest waiting.
fn shuffled_split<R: Rng + ?Sized>(
    males: &mut [usize],
    females: &mut [usize],
    rng: &mut R,
) -> (Lineup, Lineup, Lineup) {
    males.shuffle(rng);
    females.shuffle(rng);
    let team1 = Lineup::new(sorted_ids(&males[0..2]), sorted_ids(&females[0..2]));
    let team2 = Lineup::new(sorted_ids(&males[2..4]), sorted_ids(&females[2..4]));
    let waiting = Lineup::new(sorted_ids(&males[4..]), sorted_ids(&females[4..]));
    (team1, team2, waiting)
}

/// Build the match at 0-based `match_index`.
pub fn random_match<R: Rng + ?Sized>(
    male_count: usize,
    female_count: usize,
    match_index: usize,
    rng: &mut R,
) -> ScheduledMatch {
    draw_random_match(male_count, female_count, match_index, rng).0
}

/// Like [`random_match`], also returning how many shuffles were drawn
/// (1..=[`MAX_SHUFFLE_ATTEMPTS`]).
pub fn draw_random_match<R: Rng + ?Sized>(
    male_count: usize,
    female_count: usize,
    match_index: usize,
    rng: &mut R,
) -> (ScheduledMatch, usize) {
    let mut males: Vec<usize> = (0..male_count).collect();
    let mut females: Vec<usize> = (0..female_count).collect();

    let mut split = shuffled_split(&mut males, &mut females, rng);
    let mut attempts = 1;
    while split.0.has_id_collision() || split.1.has_id_collision() {
        if attempts == MAX_SHUFFLE_ATTEMPTS {
            log::warn!(
                "Match {}: no collision-free split in {} shuffles, keeping the last one",
                match_index + 1,
                MAX_SHUFFLE_ATTEMPTS
            );
            break;
        }
        split = shuffled_split(&mut males, &mut females, rng);
        attempts += 1;
    }

    let (team1, team2, waiting) = split;
    log::debug!(
        "Match {} (random): {} attempt(s)",
        match_index + 1,
        attempts
    );
    let game = ScheduledMatch {
        number: match_index + 1,
        team1,
        team2,
        waiting,
    };
    (game, attempts)
}

/// Generate all `config.match_count` matches in random mode. Late joiners are ignored.
pub fn generate_random<R: Rng + ?Sized>(
    config: &ScheduleConfig,
    rng: &mut R,
) -> Vec<ScheduledMatch> {
    (0..config.match_count)
        .map(|m| random_match(config.male_count, config.female_count, m, &mut *rng))
        .collect()
}
