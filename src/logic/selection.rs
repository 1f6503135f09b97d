//! Balanced mode: who plays next.
//!
//! Priority = `play_count * 100 + (match_index - last_played)`, lower first.
//! Play count dominates. Among equal counts the gap term decides (a smaller
//! gap since the last appearance ranks first), then the lower index.

use crate::models::{Gender, Player, ScheduleError};

/// Weight of one appearance in the priority score.
pub const PLAY_COUNT_WEIGHT: i64 = 100;

/// Priority of a player who has not joined yet. Above anything the formula reaches.
pub const NOT_JOINED_PRIORITY: i64 = 1_000_000;

/// Players needed per gender per match.
pub const PLAYERS_PER_MATCH: usize = 4;

/// Priority of `player` at 0-based `match_index`.
pub fn priority(player: &Player, match_index: usize) -> i64 {
    if !player.is_eligible(match_index) {
        return NOT_JOINED_PRIORITY;
    }
    player.play_count as i64 * PLAY_COUNT_WEIGHT + (match_index as i64 - player.last_played)
}

/// The four most eligible players (0-based indices) in priority order.
///
/// Fails when fewer than four players of `gender` have joined by `match_index`.
pub fn select_four(
    players: &[Player],
    match_index: usize,
    gender: Gender,
) -> Result<[usize; PLAYERS_PER_MATCH], ScheduleError> {
    let not_enough = ScheduleError::NotEnoughEligible {
        match_number: match_index + 1,
        gender,
    };

    let mut ranked: Vec<(usize, i64)> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (i, priority(p, match_index)))
        .collect();
    // Stable: equal priorities keep index order.
    ranked.sort_by_key(|&(_, prio)| prio);

    match ranked.get(PLAYERS_PER_MATCH - 1) {
        Some(&(_, fourth)) if fourth < NOT_JOINED_PRIORITY => {}
        _ => return Err(not_enough),
    }

    let mut selected = [0; PLAYERS_PER_MATCH];
    for (slot, &(index, _)) in selected.iter_mut().zip(&ranked) {
        *slot = index;
    }
    Ok(selected)
}
