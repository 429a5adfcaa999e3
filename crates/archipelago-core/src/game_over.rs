//! Game-over detection.
//!
//! The game ends as soon as any meter reaches zero. This module is the only
//! place that condition is written down; the tick path and the activity path
//! both funnel their results through [`check_game_over`].
//!
//! The transition is a one-way latch. Once a state is in
//! [`Phase::GameOver`] nothing here moves it back, even if a meter is later
//! raised above zero. Only a restart, which replaces the whole state, does.

use archipelago_types::{GameState, Meter, Meters, Phase};

use crate::rules::METER_MIN;

/// Return the first depleted meter in display order, if any.
pub fn depleted_meter(meters: &Meters) -> Option<Meter> {
    Meter::ALL
        .into_iter()
        .find(|meter| meters.get(*meter) <= METER_MIN)
}

/// Latch `Playing -> GameOver` when a meter is depleted.
///
/// States in any other phase are returned unchanged: onboarding never ends
/// the game and a finished game stays finished.
pub fn check_game_over(mut state: GameState) -> GameState {
    if state.phase == Phase::Playing && depleted_meter(&state.meters).is_some() {
        state.phase = Phase::GameOver;
    }
    state
}
