//! Fixed game rules: timing, decay rates, starting values.
//!
//! None of these are configurable. Changing them changes the difficulty of
//! the game, which is deliberately not a tunable.

use archipelago_types::{GameState, Meter, Meters, Phase};

/// Real-time milliseconds between two ticks.
pub const TICK_INTERVAL_MS: u64 = 3_000;

/// Clock value a day starts at (06:00).
pub const DAY_START_MINUTES: u32 = 360;

/// Last clock value that still belongs to the current day (24:00).
pub const DAY_END_MINUTES: u32 = 1_440;

/// In-game minutes that pass per tick.
pub const MINUTES_PER_TICK: u32 = 10;

/// Lower bound of every meter.
pub const METER_MIN: f64 = 0.0;

/// Upper bound of every meter.
pub const METER_MAX: f64 = 100.0;

/// Value every meter starts at.
pub const STARTING_METER: f64 = 50.0;

/// Money a new session starts with.
pub const STARTING_MONEY: i64 = 100;

/// Day a new session starts on.
pub const STARTING_DAY: u32 = 1;

/// Amount a meter loses on every tick.
pub const fn decay_rate(meter: Meter) -> f64 {
    match meter {
        Meter::Hunger => 1.0,
        Meter::Sleep | Meter::Hygiene => 0.5,
        Meter::Happiness => 0.3,
    }
}

/// The state a fresh session starts from.
pub fn initial_state() -> GameState {
    GameState {
        day: STARTING_DAY,
        time: DAY_START_MINUTES,
        meters: Meters::uniform(STARTING_METER),
        money: STARTING_MONEY,
        phase: Phase::Onboarding,
        player_name: String::new(),
        avatar_index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_defaults() {
        let state = initial_state();
        assert_eq!(state.day, 1);
        assert_eq!(state.time, 360);
        assert_eq!(state.money, 100);
        assert_eq!(state.phase, Phase::Onboarding);
        assert!(state.player_name.is_empty());
        assert_eq!(state.avatar_index, 0);
        for meter in Meter::ALL {
            assert!((state.meters.get(meter) - 50.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn hunger_decays_fastest_and_happiness_slowest() {
        assert!(decay_rate(Meter::Hunger) > decay_rate(Meter::Sleep));
        assert!(decay_rate(Meter::Sleep) > decay_rate(Meter::Happiness));
    }
}
