//! Cumulative appearance counts over a prefix of a schedule.

use crate::models::{Gender, PlayStats, PlayerId, Schedule, ScheduledMatch};

fn tally(counts: &mut [u32], ids: &[PlayerId]) {
    for &id in ids {
        // Out-of-range ids are skipped.
        if let Some(slot) = id.checked_sub(1).and_then(|i| counts.get_mut(i)) {
            *slot += 1;
        }
    }
}

/// Appearances per player in matches `0..=upto` (0-based, clamped to the
/// schedule length). `None` for an empty schedule.
pub fn snapshot(
    matches: &[ScheduledMatch],
    upto: usize,
    total_males: usize,
    total_females: usize,
) -> Option<PlayStats> {
    if matches.is_empty() {
        return None;
    }

    let mut stats = PlayStats {
        male_counts: vec![0; total_males],
        female_counts: vec![0; total_females],
    };
    let limit = upto.saturating_add(1).min(matches.len());
    for m in &matches[..limit] {
        for team in [&m.team1, &m.team2] {
            tally(&mut stats.male_counts, team.ids(Gender::Male));
            tally(&mut stats.female_counts, team.ids(Gender::Female));
        }
    }
    Some(stats)
}

impl Schedule {
    /// Appearances up to and including the match at 0-based `upto`.
    pub fn snapshot(&self, upto: usize) -> Option<PlayStats> {
        snapshot(&self.matches, upto, self.total_males, self.total_females)
    }
}
