//! Activity resolution: the fixed effect table for player actions.
//!
//! | kind  | meter     | gain | money | minutes |
//! |-------|-----------|------|-------|---------|
//! | Eat   | hunger    | +30  | -10   | 0       |
//! | Sleep | sleep     | +40  | 0     | +240    |
//! | Clean | hygiene   | +40  | 0     | 0       |
//! | Play  | happiness | +20  | 0     | 0       |
//!
//! Effects apply immediately. Meter gains are capped at 100 while the money
//! cost is always charged, so eating on a full stomach still costs money.
//! Money has no floor. Sleeping skips clock time without the day rollover the
//! tick path applies; the next tick rolls the day over instead.

use archipelago_types::{ActivityKind, GameState, Meter};
use tracing::debug;

use crate::clock::GameClock;
use crate::game_over::check_game_over;
use crate::vitals;

/// What a single activity does to the game state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityEffect {
    /// The meter the activity restores.
    pub meter: Meter,
    /// How much the meter is raised (before capping).
    pub gain: f64,
    /// Change to money. Negative values are costs.
    pub money_delta: i64,
    /// In-game minutes the activity takes.
    pub minutes: u32,
}

/// Look up the effect of an activity.
pub const fn effect_of(kind: ActivityKind) -> ActivityEffect {
    match kind {
        ActivityKind::Eat => ActivityEffect {
            meter: Meter::Hunger,
            gain: 30.0,
            money_delta: -10,
            minutes: 0,
        },
        ActivityKind::Sleep => ActivityEffect {
            meter: Meter::Sleep,
            gain: 40.0,
            money_delta: 0,
            minutes: 240,
        },
        ActivityKind::Clean => ActivityEffect {
            meter: Meter::Hygiene,
            gain: 40.0,
            money_delta: 0,
            minutes: 0,
        },
        ActivityKind::Play => ActivityEffect {
            meter: Meter::Happiness,
            gain: 20.0,
            money_delta: 0,
            minutes: 0,
        },
    }
}

/// Apply an activity and return the next state.
///
/// Outside [`archipelago_types::Phase::Playing`] the state is returned
/// unchanged.
pub fn apply_activity(state: &GameState, kind: ActivityKind) -> GameState {
    if !state.phase.is_playing() {
        debug!(activity = %kind, phase = %state.phase, "activity ignored outside play");
        return state.clone();
    }

    let effect = effect_of(kind);
    let mut next = state.clone();
    next.meters = vitals::restore(&state.meters, effect.meter, effect.gain);
    next.money = state.money.saturating_add(effect.money_delta);
    if effect.minutes > 0 {
        GameClock::of(state).skip(effect.minutes).store(&mut next);
    }

    check_game_over(next)
}

/// Apply an activity given by name.
///
/// Unknown names are a no-op, not an error.
pub fn apply_named_activity(state: &GameState, name: &str) -> GameState {
    match ActivityKind::parse(name) {
        Some(kind) => apply_activity(state, kind),
        None => {
            debug!(name, "unknown activity ignored");
            state.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use archipelago_types::Phase;

    use super::*;
    use crate::rules::initial_state;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    fn playing() -> GameState {
        GameState {
            phase: Phase::Playing,
            player_name: String::from("Ucup"),
            ..initial_state()
        }
    }

    #[test]
    fn eat_restores_hunger_and_costs_money() {
        let state = apply_activity(&playing(), ActivityKind::Eat);
        assert!(approx(state.meters.hunger, 80.0));
        assert_eq!(state.money, 90);
        assert_eq!(state.time, 360);
    }

    #[test]
    fn sleep_restores_and_skips_four_hours() {
        let state = apply_activity(&playing(), ActivityKind::Sleep);
        assert!(approx(state.meters.sleep, 90.0));
        assert_eq!(state.time, 600);
        assert_eq!(state.day, 1);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn clean_and_play_touch_their_meters() {
        let state = apply_activity(&playing(), ActivityKind::Clean);
        assert!(approx(state.meters.hygiene, 90.0));
        let state = apply_activity(&state, ActivityKind::Play);
        assert!(approx(state.meters.happiness, 70.0));
        assert_eq!(state.money, 100);
    }

    #[test]
    fn eating_on_full_stomach_still_costs_money() {
        let mut state = playing();
        state.meters.hunger = 100.0;
        for expected_money in [90, 80, 70] {
            state = apply_activity(&state, ActivityKind::Eat);
            assert!(approx(state.meters.hunger, 100.0));
            assert_eq!(state.money, expected_money);
        }
    }

    #[test]
    fn money_can_go_negative() {
        let mut state = playing();
        state.money = 5;
        let state = apply_activity(&state, ActivityKind::Eat);
        assert_eq!(state.money, -5);
    }

    #[test]
    fn late_sleep_leaves_clock_past_midnight() {
        let mut state = playing();
        state.time = 1400;
        let state = apply_activity(&state, ActivityKind::Sleep);
        assert_eq!(state.time, 1640);
        assert_eq!(state.day, 1);
    }

    #[test]
    fn activities_do_nothing_outside_play() {
        let onboarding = initial_state();
        for kind in ActivityKind::ALL {
            assert_eq!(apply_activity(&onboarding, kind), onboarding);
        }

        let over = GameState {
            phase: Phase::GameOver,
            ..playing()
        };
        for kind in ActivityKind::ALL {
            assert_eq!(apply_activity(&over, kind), over);
        }
    }

    #[test]
    fn unknown_activity_name_is_a_noop() {
        let state = playing();
        assert_eq!(apply_named_activity(&state, "dance"), state);
        let fed = apply_named_activity(&state, "EAT");
        assert_eq!(fed.money, 90);
    }
}
