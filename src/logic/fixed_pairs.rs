//! Fixed-pair mode: adjacent players form units that always play together.
//!
//! Each match the two least-played units of each gender meet. Straight
//! assignment (male unit 1 with female unit 1) is kept unless it puts equal
//! numbers on one team and swapping the female units would not.

use crate::models::{Gender, Lineup, ScheduleConfig, ScheduledMatch, Unit};

/// Units of one gender and their play counts.
struct UnitRoster {
    gender: Gender,
    size: usize,
    units: Vec<Unit>,
}

impl UnitRoster {
    fn new(gender: Gender, size: usize) -> Self {
        Self {
            gender,
            size,
            units: Unit::form_units(size),
        }
    }

    /// Indices of the two least-played units, ties by unit order. Counts are bumped.
    fn take_two(&mut self) -> [usize; 2] {
        let mut order: Vec<usize> = (0..self.units.len()).collect();
        order.sort_by_key(|&u| self.units[u].play_count);
        let chosen = [order[0], order[1]];
        for &u in &chosen {
            self.units[u].play_count += 1;
        }
        chosen
    }

    fn members(&self, unit: usize) -> &[usize] {
        &self.units[unit].members
    }

    fn waiting(&self, chosen: &[usize; 2]) -> Vec<usize> {
        (0..self.size)
            .filter(|&i| !chosen.iter().any(|&u| self.units[u].contains(i)))
            .collect()
    }
}

fn team(males: &[usize], females: &[usize]) -> Lineup {
    Lineup::from_indices(males, females)
}

fn assignment_collides(team1: &Lineup, team2: &Lineup) -> bool {
    team1.has_id_collision() || team2.has_id_collision()
}

/// Teams for two male and two female units (0-based members).
///
/// Straight (m1+f1, m2+f2) unless it collides and the swap (m1+f2, m2+f1)
/// does not. Units from [`Unit::form_units`] never collide both ways; the
/// straight fallback only applies to other groupings.
pub fn assign_units(m1: &[usize], m2: &[usize], f1: &[usize], f2: &[usize]) -> (Lineup, Lineup) {
    let straight = (team(m1, f1), team(m2, f2));
    if !assignment_collides(&straight.0, &straight.1) {
        return straight;
    }
    let swapped = (team(m1, f2), team(m2, f1));
    if assignment_collides(&swapped.0, &swapped.1) {
        straight
    } else {
        swapped
    }
}

/// Explicit state of one fixed-pair run.
pub struct FixedPairGenerator {
    males: UnitRoster,
    females: UnitRoster,
}

impl FixedPairGenerator {
    /// Form units from the base rosters; late joiners are not used here.
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            males: UnitRoster::new(Gender::Male, config.male_count),
            females: UnitRoster::new(Gender::Female, config.female_count),
        }
    }

    /// Produce the match at 0-based `match_index`, bumping the chosen units' counts.
    pub fn next_match(&mut self, match_index: usize) -> ScheduledMatch {
        let male_units = self.males.take_two();
        let female_units = self.females.take_two();

        let m1 = self.males.members(male_units[0]);
        let m2 = self.males.members(male_units[1]);
        let f1 = self.females.members(female_units[0]);
        let f2 = self.females.members(female_units[1]);

        let (team1, team2) = assign_units(m1, m2, f1, f2);
        if assignment_collides(&team1, &team2) {
            log::warn!(
                "Match {}: both unit assignments pair a male and female with the same number",
                match_index + 1
            );
        }

        log::debug!(
            "Match {} (fixed pairs): {} units {:?}, {} units {:?}",
            match_index + 1,
            self.males.gender,
            male_units,
            self.females.gender,
            female_units
        );

        ScheduledMatch {
            number: match_index + 1,
            team1,
            team2,
            waiting: Lineup::from_indices(
                &self.males.waiting(&male_units),
                &self.females.waiting(&female_units),
            ),
        }
    }

    /// Play count per unit, in unit order.
    pub fn unit_play_counts(&self, gender: Gender) -> Vec<u32> {
        let roster = match gender {
            Gender::Male => &self.males,
            Gender::Female => &self.females,
        };
        roster.units.iter().map(|u| u.play_count).collect()
    }
}

/// Generate all `config.match_count` matches in fixed-pair mode.
pub fn generate_fixed_pairs(config: &ScheduleConfig) -> Vec<ScheduledMatch> {
    let mut generator = FixedPairGenerator::new(config);
    (0..config.match_count)
        .map(|m| generator.next_match(m))
        .collect()
}
