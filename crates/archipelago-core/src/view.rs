//! Derive the visible screen from a game state.
//!
//! Display values are computed here and nowhere else: the `HH:MM` clock,
//! meter percentages rounded to the nearest integer, and the greeting. The
//! underlying state keeps its fractional meters untouched.

use archipelago_types::{
    GameOverView, GameState, Meter, MeterReading, OnboardingView, Phase, PlayingView, View,
};

use crate::clock::format_clock;
use crate::game_over::depleted_meter;
use crate::onboarding::{AvatarRoster, can_start};
use crate::rules::{METER_MAX, METER_MIN};

/// Round a meter value to a whole percent for display.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn display_percent(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    // Clamped to [0, 100] first, so the cast cannot truncate or wrap.
    value.clamp(METER_MIN, METER_MAX).round() as u32
}

/// Build the view for a state.
pub fn build_view(state: &GameState, roster: &AvatarRoster, title: &str) -> View {
    match state.phase {
        Phase::Onboarding => View::Onboarding(OnboardingView {
            title: title.to_owned(),
            avatar_image: roster.image(state.avatar_index).to_owned(),
            avatar_position: state.avatar_index.saturating_add(1),
            avatar_count: roster.len(),
            player_name: state.player_name.clone(),
            can_start: can_start(&state.player_name),
        }),
        Phase::Playing => View::Playing(PlayingView {
            title: title.to_owned(),
            greeting: format!("Welcome, {}!", state.player_name),
            avatar_image: roster.image(state.avatar_index).to_owned(),
            day: state.day,
            clock: format_clock(state.time),
            meters: Meter::ALL
                .into_iter()
                .map(|meter| MeterReading {
                    meter,
                    percent: display_percent(state.meters.get(meter)),
                })
                .collect(),
            money: state.money,
        }),
        Phase::GameOver => View::GameOver(GameOverView {
            days_survived: state.day,
            cause: depleted_meter(&state.meters),
        }),
    }
}

#[cfg(test)]
mod tests {
    use archipelago_types::Meters;

    use super::*;
    use crate::rules::initial_state;

    const TITLE: &str = "Test Title";

    #[test]
    fn percentages_round_to_nearest() {
        assert_eq!(display_percent(49.7), 50);
        assert_eq!(display_percent(49.4), 49);
        assert_eq!(display_percent(0.5), 1);
        assert_eq!(display_percent(0.0), 0);
        assert_eq!(display_percent(100.0), 100);
        assert_eq!(display_percent(f64::NAN), 0);
    }

    #[test]
    fn onboarding_view_reports_position_and_guard() {
        let mut state = initial_state();
        state.avatar_index = 2;
        let view = build_view(&state, &AvatarRoster::default(), TITLE);
        let View::Onboarding(view) = view else {
            panic!("expected onboarding view");
        };
        assert_eq!(view.title, TITLE);
        assert_eq!(view.avatar_position, 3);
        assert_eq!(view.avatar_count, 4);
        assert_eq!(view.avatar_image, "images/avatar3.png");
        assert!(!view.can_start);
    }

    #[test]
    fn playing_view_formats_values() {
        let state = GameState {
            day: 2,
            time: 725,
            meters: Meters {
                hunger: 80.0,
                sleep: 49.5,
                hygiene: 12.25,
                happiness: 49.7,
            },
            money: 90,
            phase: Phase::Playing,
            player_name: String::from("Ucup"),
            avatar_index: 1,
        };
        let View::Playing(view) = build_view(&state, &AvatarRoster::default(), TITLE) else {
            panic!("expected playing view");
        };
        assert_eq!(view.greeting, "Welcome, Ucup!");
        assert_eq!(view.clock, "12:05");
        assert_eq!(view.day, 2);
        assert_eq!(view.money, 90);
        assert_eq!(view.avatar_image, "images/avatar2.png");
        let percents: Vec<u32> = view.meters.iter().map(|r| r.percent).collect();
        assert_eq!(percents, vec![80, 50, 12, 50]);
    }

    #[test]
    fn game_over_view_reports_current_day_and_cause() {
        let mut state = initial_state();
        state.phase = Phase::GameOver;
        state.day = 7;
        state.meters.happiness = 0.0;
        let view = build_view(&state, &AvatarRoster::default(), TITLE);
        assert_eq!(
            view,
            View::GameOver(GameOverView {
                days_survived: 7,
                cause: Some(Meter::Happiness),
            })
        );
    }
}
