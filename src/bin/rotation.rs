//! Terminal front end: generate a schedule and print it with appearance counts.
//! Run with: cargo run --bin rotation -- --males 6 --females 6 --matches 5
//! Every option can also come from env (ROTATION_MALES, ROTATION_MODE, ...).
//! Log level via RUST_LOG (default info).

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use softvolley_rotation::{
    generate, generate_with_rng, Gender, Lineup, PlayStats, PlayerId, Schedule, ScheduleConfig,
    ScheduleMode, ScheduledMatch,
};
use std::io;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "rotation")]
#[command(about = "Mixed 2v2 team rotation: even play time, few repeated pairs", long_about = None)]
struct Args {
    /// Number of male players (at least 4)
    #[arg(long, env = "ROTATION_MALES", default_value_t = 6)]
    males: usize,

    /// Number of female players (at least 4)
    #[arg(long, env = "ROTATION_FEMALES", default_value_t = 6)]
    females: usize,

    /// Number of matches to schedule
    #[arg(long, env = "ROTATION_MATCHES", default_value_t = 5)]
    matches: usize,

    /// balanced, fixed_pairs or random
    #[arg(long, env = "ROTATION_MODE", default_value_t = ScheduleMode::Balanced)]
    mode: ScheduleMode,

    /// Males joining later (balanced mode only)
    #[arg(long, env = "ROTATION_LATE_MALES", default_value_t = 0)]
    late_males: usize,

    /// Females joining later (balanced mode only)
    #[arg(long, env = "ROTATION_LATE_FEMALES", default_value_t = 0)]
    late_females: usize,

    /// First match (1-based) late joiners can play
    #[arg(long, env = "ROTATION_LATE_START", default_value_t = 1)]
    late_start: usize,

    /// Seed for random mode (reproducible output)
    #[arg(long, env = "ROTATION_SEED")]
    seed: Option<u64>,

    /// Show only this match (1-based), with counts up to it
    #[arg(long = "match")]
    show_match: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn config(&self) -> ScheduleConfig {
        ScheduleConfig::new(self.males, self.females, self.matches, self.mode).with_late_joiners(
            self.late_males,
            self.late_females,
            self.late_start,
        )
    }
}

/// One CSV row per match; ids joined by spaces.
#[derive(Serialize)]
struct CsvRow {
    match_number: usize,
    team1_males: String,
    team1_females: String,
    team2_males: String,
    team2_females: String,
    waiting_males: String,
    waiting_females: String,
}

fn join_ids(ids: &[PlayerId]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" ")
}

impl From<&ScheduledMatch> for CsvRow {
    fn from(m: &ScheduledMatch) -> Self {
        Self {
            match_number: m.number,
            team1_males: join_ids(&m.team1.males),
            team1_females: join_ids(&m.team1.females),
            team2_males: join_ids(&m.team2.males),
            team2_females: join_ids(&m.team2.females),
            waiting_males: join_ids(&m.waiting.males),
            waiting_females: join_ids(&m.waiting.females),
        }
    }
}

fn format_side(lineup: &Lineup, gender: Gender, stats: &PlayStats) -> String {
    let prefix = match gender {
        Gender::Male => "M",
        Gender::Female => "F",
    };
    lineup
        .ids(gender)
        .iter()
        .map(|&id| format!("{}{}({})", prefix, id, stats.count(gender, id)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_lineup(lineup: &Lineup, stats: &PlayStats) -> String {
    format!(
        "{} | {}",
        format_side(lineup, Gender::Male, stats),
        format_side(lineup, Gender::Female, stats)
    )
}

fn print_match(schedule: &Schedule, index: usize) {
    let (Some(m), Some(stats)) = (schedule.get(index), schedule.snapshot(index)) else {
        return;
    };
    println!("Match {} of {}", m.number, schedule.len());
    println!("  Team A:  {}", format_lineup(&m.team1, &stats));
    println!("  Team B:  {}", format_lineup(&m.team2, &stats));
    if !m.waiting.is_empty() {
        println!("  Waiting: {}", format_lineup(&m.waiting, &stats));
    }
}

fn write_csv(matches: &[ScheduledMatch]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    for m in matches {
        writer.serialize(CsvRow::from(m))?;
    }
    writer.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config();
    let schedule = match args.seed {
        Some(seed) => generate_with_rng(&config, &mut StdRng::seed_from_u64(seed))?,
        None => generate(&config)?,
    };

    let selected: &[ScheduledMatch] = match args.show_match {
        Some(n) => {
            let index = n.checked_sub(1).filter(|&i| i < schedule.len()).ok_or_else(|| {
                format!("Match {} out of range (1..={})", n, schedule.len())
            })?;
            &schedule.matches[index..=index]
        }
        None => &schedule.matches,
    };

    match args.format {
        OutputFormat::Text => {
            for m in selected {
                print_match(&schedule, m.number - 1);
                println!();
            }
        }
        OutputFormat::Json => {
            if args.show_match.is_some() {
                println!("{}", serde_json::to_string_pretty(selected)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            }
        }
        OutputFormat::Csv => write_csv(selected)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    log::info!(
        "Scheduling {} match(es), mode {}, {} males / {} females",
        args.matches,
        args.mode,
        args.males,
        args.females
    );

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
