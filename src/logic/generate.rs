//! Entry point: validate the config and run the chosen mode.

use crate::logic::balanced::generate_balanced;
use crate::logic::fixed_pairs::generate_fixed_pairs;
use crate::logic::random::generate_random;
use crate::models::{GenerateError, Schedule, ScheduleConfig, ScheduleMode};
use rand::Rng;

/// Generate a full schedule. Random mode draws from the thread RNG.
pub fn generate(config: &ScheduleConfig) -> Result<Schedule, GenerateError> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generate a full schedule, drawing random mode's shuffles from `rng`.
///
/// Balanced and fixed-pair modes never touch `rng`, so the same config
/// always yields the same schedule.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &ScheduleConfig,
    rng: &mut R,
) -> Result<Schedule, GenerateError> {
    config.validate()?;

    let matches = match config.mode {
        ScheduleMode::Balanced => generate_balanced(config)?,
        ScheduleMode::FixedPairs => generate_fixed_pairs(config),
        ScheduleMode::Random => generate_random(config, rng),
    };

    log::info!(
        "Generated {} {} match(es) for {} males / {} females",
        matches.len(),
        config.mode,
        config.total_males(),
        config.total_females()
    );

    Ok(Schedule {
        mode: config.mode,
        total_males: config.total_males(),
        total_females: config.total_females(),
        matches,
    })
}
