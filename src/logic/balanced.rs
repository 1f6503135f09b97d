//! Balanced mode: even play counts, fewest repeated teammates, late joiners.

use crate::logic::pair_history::PairHistory;
use crate::logic::selection::select_four;
use crate::logic::team_split::best_split;
use crate::models::{Gender, Lineup, Player, ScheduleConfig, ScheduleError, ScheduledMatch};

/// Rotation state for one gender. Lives for a single generation call.
struct Roster {
    gender: Gender,
    players: Vec<Player>,
    history: PairHistory,
}

impl Roster {
    fn new(gender: Gender, base: usize, late: usize, late_start_index: usize) -> Self {
        let players = (0..base)
            .map(|_| Player::new())
            .chain((0..late).map(|_| Player::joining_at(late_start_index)))
            .collect::<Vec<_>>();
        let history = PairHistory::new(players.len());
        Self {
            gender,
            players,
            history,
        }
    }

    fn select(&self, match_index: usize) -> Result<[usize; 4], ScheduleError> {
        select_four(&self.players, match_index, self.gender)
    }

    fn record(&mut self, match_index: usize, pairs: [[usize; 2]; 2]) {
        for pair in pairs {
            for i in pair {
                self.players[i].record_play(match_index);
            }
            self.history.increment(pair[0], pair[1]);
        }
    }

    /// Joined players not in `selected`, 0-based ascending.
    fn waiting(&self, match_index: usize, selected: &[usize; 4]) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(i, p)| p.is_eligible(match_index) && !selected.contains(i))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Explicit state of one balanced-mode run.
pub struct BalancedGenerator {
    males: Roster,
    females: Roster,
}

impl BalancedGenerator {
    pub fn new(config: &ScheduleConfig) -> Self {
        let start = config.late_start_index();
        Self {
            males: Roster::new(Gender::Male, config.male_count, config.late_male_count, start),
            females: Roster::new(
                Gender::Female,
                config.female_count,
                config.late_female_count,
                start,
            ),
        }
    }

    /// Produce the match at 0-based `match_index`. Must be called with
    /// strictly increasing indices.
    pub fn next_match(&mut self, match_index: usize) -> Result<ScheduledMatch, ScheduleError> {
        let males = self.males.select(match_index)?;
        let females = self.females.select(match_index)?;

        let split = best_split(&males, &females, &self.males.history, &self.females.history);
        if split.has_collision() {
            log::warn!(
                "Match {}: every team split pairs a male and female with the same number",
                match_index + 1
            );
        }

        self.males
            .record(match_index, [split.team1.males, split.team2.males]);
        self.females
            .record(match_index, [split.team1.females, split.team2.females]);

        let waiting_males = self.males.waiting(match_index, &males);
        let waiting_females = self.females.waiting(match_index, &females);

        log::debug!(
            "Match {} (balanced): males {:?}, females {:?}, cost {}",
            match_index + 1,
            males,
            females,
            split.cost
        );

        Ok(ScheduledMatch {
            number: match_index + 1,
            team1: Lineup::from_indices(&split.team1.males, &split.team1.females),
            team2: Lineup::from_indices(&split.team2.males, &split.team2.females),
            waiting: Lineup::from_indices(&waiting_males, &waiting_females),
        })
    }

    /// Teammate count of two males (0-based).
    pub fn male_pair_count(&self, a: usize, b: usize) -> u32 {
        self.males.history.count(a, b)
    }

    /// Teammate count of two females (0-based).
    pub fn female_pair_count(&self, a: usize, b: usize) -> u32 {
        self.females.history.count(a, b)
    }

    pub fn play_counts(&self, gender: Gender) -> Vec<u32> {
        let roster = match gender {
            Gender::Male => &self.males,
            Gender::Female => &self.females,
        };
        roster.players.iter().map(|p| p.play_count).collect()
    }
}

/// Generate all `config.match_count` matches in balanced mode.
pub fn generate_balanced(config: &ScheduleConfig) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    let mut generator = BalancedGenerator::new(config);
    (0..config.match_count)
        .map(|m| generator.next_match(m))
        .collect()
}
