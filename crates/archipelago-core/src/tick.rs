//! The tick transition: one firing of the periodic clock and decay update.
//!
//! Each tick runs three steps in order:
//!
//! 1. **Clock** -- advance ten in-game minutes, rolling over to the next
//!    morning when the time would pass 24:00.
//! 2. **Decay** -- erode each meter by its fixed rate, floored at zero.
//! 3. **Check** -- latch game over if any meter is now depleted.
//!
//! [`apply_tick`] is pure. Scheduling the tick and installing its result is
//! the session's job.

use archipelago_types::{GameState, Meter};
use tracing::debug;

use crate::clock::GameClock;
use crate::game_over::{check_game_over, depleted_meter};
use crate::vitals;

/// Summary of a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// The state after the tick.
    pub state: GameState,
    /// Whether the tick rolled the clock into a new day.
    pub rolled_over: bool,
    /// The meter that ended the game on this tick, if any.
    pub ended_by: Option<Meter>,
}

/// Run one tick against a state and return the outcome.
///
/// Outside [`archipelago_types::Phase::Playing`] the state is returned
/// unchanged and nothing is reported.
pub fn apply_tick(state: &GameState) -> TickOutcome {
    if !state.phase.is_playing() {
        return TickOutcome {
            state: state.clone(),
            rolled_over: false,
            ended_by: None,
        };
    }

    let mut next = state.clone();

    // 1. Clock
    let advance = GameClock::of(state).advance_tick();
    advance.clock.store(&mut next);

    // 2. Decay
    next.meters = vitals::decay(&state.meters);

    // 3. Check
    let next = check_game_over(next);
    let ended_by = if next.phase.is_terminal() {
        depleted_meter(&next.meters)
    } else {
        None
    };

    debug!(
        day = next.day,
        time = next.time,
        rolled_over = advance.rolled_over,
        "tick applied"
    );

    TickOutcome {
        state: next,
        rolled_over: advance.rolled_over,
        ended_by,
    }
}

#[cfg(test)]
mod tests {
    use archipelago_types::{Meters, Phase};

    use super::*;
    use crate::rules::{decay_rate, initial_state};

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
    fn tick_advances_clock_and_decays() {
        let outcome = apply_tick(&playing());
        assert_eq!(outcome.state.time, 370);
        assert_eq!(outcome.state.day, 1);
        assert!(!outcome.rolled_over);
        for meter in Meter::ALL {
            assert!(approx(
                outcome.state.meters.get(meter),
                50.0 - decay_rate(meter)
            ));
        }
        assert_eq!(outcome.state.phase, Phase::Playing);
        assert_eq!(outcome.ended_by, None);
    }

    #[test]
    fn tick_at_1430_reaches_midnight_on_same_day() {
        let mut state = playing();
        state.time = 1430;
        let outcome = apply_tick(&state);
        assert_eq!(outcome.state.time, 1440);
        assert_eq!(outcome.state.day, 1);
        assert!(!outcome.rolled_over);
    }

    #[test]
    fn tick_at_1440_rolls_into_next_day() {
        let mut state = playing();
        state.time = 1440;
        let outcome = apply_tick(&state);
        assert_eq!(outcome.state.time, 360);
        assert_eq!(outcome.state.day, 2);
        assert!(outcome.rolled_over);
    }

    #[test]
    fn money_is_untouched_by_ticks() {
        let outcome = apply_tick(&playing());
        assert_eq!(outcome.state.money, 100);
    }

    #[test]
    fn fifty_ticks_starve_the_player() {
        let mut state = playing();
        let mut ended_on = None;
        for tick in 1..=60_u32 {
            let outcome = apply_tick(&state);
            state = outcome.state;
            if let Some(meter) = outcome.ended_by {
                ended_on = Some((tick, meter));
                break;
            }
        }
        assert_eq!(ended_on, Some((50, Meter::Hunger)));
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.day, 1);
    }

    #[test]
    fn ticks_are_ignored_once_the_game_is_over() {
        let state = GameState {
            phase: Phase::GameOver,
            meters: Meters::uniform(0.0),
            ..playing()
        };
        let outcome = apply_tick(&state);
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.ended_by, None);
    }

    #[test]
    fn ticks_are_ignored_during_onboarding() {
        let state = initial_state();
        let outcome = apply_tick(&state);
        assert_eq!(outcome.state, state);
    }
}
