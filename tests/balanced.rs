//! Integration tests for balanced mode: selection, team split, late joiners.

use softvolley_rotation::{
    generate, priority, select_four, BalancedGenerator, Gender, GenerateError, Player,
    ScheduleConfig, ScheduleError, ScheduleMode, NOT_JOINED_PRIORITY,
};

fn balanced(males: usize, females: usize, matches: usize) -> ScheduleConfig {
    ScheduleConfig::new(males, females, matches, ScheduleMode::Balanced)
}

fn sorted(mut ids: Vec<usize>) -> Vec<usize> {
    ids.sort_unstable();
    ids
}

#[test]
fn minimum_roster_single_match_selects_everyone() {
    let schedule = generate(&balanced(4, 4, 1)).unwrap();
    assert_eq!(schedule.len(), 1);
    let m = &schedule.matches[0];
    assert_eq!(m.number, 1);
    assert!(m.waiting.is_empty());
    assert_eq!(sorted(m.all_ids(Gender::Male).collect()), vec![1, 2, 3, 4]);
    assert_eq!(sorted(m.all_ids(Gender::Female).collect()), vec![1, 2, 3, 4]);
}

#[test]
fn first_match_avoids_same_numbers_on_a_team() {
    let schedule = generate(&balanced(4, 4, 1)).unwrap();
    let m = &schedule.matches[0];
    // Straight {1,2}+{1,2} collides; the swapped assignment is the first clean one.
    assert_eq!(m.team1.males, vec![1, 2]);
    assert_eq!(m.team1.females, vec![3, 4]);
    assert_eq!(m.team2.males, vec![3, 4]);
    assert_eq!(m.team2.females, vec![1, 2]);
    assert!(!m.team1.has_id_collision());
    assert!(!m.team2.has_id_collision());
}

#[test]
fn four_by_four_rotates_through_every_pairing() {
    let schedule = generate(&balanced(4, 4, 3)).unwrap();
    let mut male_pairs: Vec<Vec<usize>> = schedule
        .matches
        .iter()
        .flat_map(|m| [sorted(m.team1.males.clone()), sorted(m.team2.males.clone())])
        .collect();
    male_pairs.sort();
    male_pairs.dedup();
    assert_eq!(male_pairs.len(), 6, "each of the 6 male pairs should appear once");

    let mut female_pairs: Vec<Vec<usize>> = schedule
        .matches
        .iter()
        .flat_map(|m| [sorted(m.team1.females.clone()), sorted(m.team2.females.clone())])
        .collect();
    female_pairs.sort();
    female_pairs.dedup();
    assert_eq!(female_pairs.len(), 6);
}

#[test]
fn play_counts_never_spread_more_than_one() {
    let config = balanced(9, 6, 40);
    let schedule = generate(&config).unwrap();
    for upto in 0..schedule.len() {
        let stats = schedule.snapshot(upto).unwrap();
        for gender in [Gender::Male, Gender::Female] {
            let counts = stats.counts(gender);
            let max = counts.iter().max().unwrap();
            let min = counts.iter().min().unwrap();
            assert!(max - min <= 1, "match {}: {} counts {:?}", upto + 1, gender, counts);
        }
    }
}

#[test]
fn every_player_appears_exactly_once_per_match() {
    let schedule = generate(&balanced(7, 5, 15)).unwrap();
    for m in &schedule.matches {
        assert_eq!(sorted(m.all_ids(Gender::Male).collect()), (1..=7).collect::<Vec<_>>());
        assert_eq!(sorted(m.all_ids(Gender::Female).collect()), (1..=5).collect::<Vec<_>>());
        assert_eq!(m.team1.males.len(), 2);
        assert_eq!(m.team2.females.len(), 2);
    }
}

#[test]
fn pair_history_is_symmetric_and_counts_each_pair_once() {
    let config = balanced(6, 5, 20);
    let mut generator = BalancedGenerator::new(&config);
    for m in 0..config.match_count {
        generator.next_match(m).unwrap();
    }
    let mut male_total = 0;
    for i in 0..6 {
        assert_eq!(generator.male_pair_count(i, i), 0);
        for j in 0..6 {
            assert_eq!(generator.male_pair_count(i, j), generator.male_pair_count(j, i));
            if i < j {
                male_total += generator.male_pair_count(i, j);
            }
        }
    }
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(generator.female_pair_count(i, j), generator.female_pair_count(j, i));
        }
    }
    // Two same-gender pairs per match.
    assert_eq!(male_total, 2 * config.match_count as u32);
    assert_eq!(generator.play_counts(Gender::Male).iter().sum::<u32>(), 4 * 20);
}

#[test]
fn late_joiner_absent_before_start_and_present_after() {
    let config = balanced(4, 4, 5).with_late_joiners(1, 0, 3);
    let schedule = generate(&config).unwrap();
    assert_eq!(schedule.total_males, 5);
    assert_eq!(schedule.total_females, 4);
    for m in &schedule.matches {
        let seen = m.all_ids(Gender::Male).any(|id| id == 5);
        if m.number < 3 {
            assert!(!seen, "late male listed in match {}", m.number);
        } else {
            assert!(seen, "late male missing from match {}", m.number);
        }
    }
    // Fewest appearances when joining, so the late male plays at once.
    assert!(schedule.matches[2].is_playing(Gender::Male, 5));
}

#[test]
fn late_joiner_does_not_appear_in_waiting_before_start() {
    let config = balanced(5, 6, 6).with_late_joiners(2, 2, 4);
    let schedule = generate(&config).unwrap();
    for m in schedule.matches.iter().take(3) {
        assert!(m.all_ids(Gender::Male).all(|id| id <= 5));
        assert!(m.all_ids(Gender::Female).all(|id| id <= 6));
    }
    for m in schedule.matches.iter().skip(3) {
        assert_eq!(m.all_ids(Gender::Male).count(), 7);
        assert_eq!(m.all_ids(Gender::Female).count(), 8);
    }
}

#[test]
fn balanced_is_deterministic() {
    let config = balanced(8, 7, 25).with_late_joiners(1, 1, 10);
    assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
}

#[test]
fn priority_prefers_fewer_plays_then_longer_wait() {
    let fresh = Player::new();
    assert_eq!(priority(&fresh, 0), 2);

    let mut played = Player::new();
    played.record_play(0);
    assert_eq!(priority(&played, 3), 100 + 3);

    let late = Player::joining_at(4);
    assert_eq!(priority(&late, 3), NOT_JOINED_PRIORITY);
    assert_eq!(priority(&late, 4), 6);
}

#[test]
fn select_four_breaks_ties_by_index() {
    let mut players = vec![Player::new(); 6];
    players[1].record_play(0);
    let selected = select_four(&players, 1, Gender::Male).unwrap();
    assert_eq!(selected, [0, 2, 3, 4]);
}

#[test]
fn select_four_fails_without_four_joined_players() {
    let players = vec![
        Player::new(),
        Player::new(),
        Player::new(),
        Player::joining_at(2),
        Player::joining_at(2),
    ];
    assert_eq!(
        select_four(&players, 0, Gender::Female),
        Err(ScheduleError::NotEnoughEligible {
            match_number: 1,
            gender: Gender::Female
        })
    );
    assert!(select_four(&players, 2, Gender::Female).is_ok());
}

#[test]
fn too_few_males_is_a_config_error() {
    assert!(matches!(
        generate(&balanced(3, 6, 1)),
        Err(GenerateError::Config(_))
    ));
}
