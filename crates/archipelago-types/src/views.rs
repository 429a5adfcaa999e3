//! View models for the three mutually exclusive screens.
//!
//! A [`View`] is derived from the game state on demand and carries display
//! values only (formatted clock, rounded percentages). Front ends render
//! whichever variant they receive; being an enum, exactly one is ever active.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Meter;

/// The screen that should be visible for the current phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "view")]
#[ts(export, export_to = "bindings/")]
pub enum View {
    /// Avatar and name selection.
    Onboarding(OnboardingView),
    /// The running game.
    Playing(PlayingView),
    /// The game-over screen.
    GameOver(GameOverView),
}

/// Avatar and name selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OnboardingView {
    /// Game title.
    pub title: String,
    /// Image path of the selected avatar.
    pub avatar_image: String,
    /// 1-based position of the selected avatar, for the "i / N" counter.
    pub avatar_position: usize,
    /// Number of avatars in the roster.
    pub avatar_count: usize,
    /// Name typed so far.
    pub player_name: String,
    /// Whether the start control is enabled.
    pub can_start: bool,
}

/// One meter as shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MeterReading {
    /// Which meter this is.
    pub meter: Meter,
    /// Value rounded to the nearest whole percent.
    pub percent: u32,
}

/// The running game screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayingView {
    /// Game title.
    pub title: String,
    /// Greeting line including the player's name.
    pub greeting: String,
    /// Image path of the chosen avatar.
    pub avatar_image: String,
    /// Current in-game day.
    pub day: u32,
    /// Clock formatted as `HH:MM`.
    pub clock: String,
    /// Meter readings in display order.
    pub meters: Vec<MeterReading>,
    /// Current money.
    pub money: i64,
}

/// The game-over screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameOverView {
    /// Day on which the game ended.
    pub days_survived: u32,
    /// The meter that ran out, if one can be identified.
    pub cause: Option<Meter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_is_tagged_by_screen_name() {
        let view = View::GameOver(GameOverView {
            days_survived: 4,
            cause: Some(Meter::Hunger),
        });
        let json = serde_json::to_value(&view).unwrap_or_default();
        assert_eq!(json["view"], "GameOver");
        assert_eq!(json["days_survived"], 4);
        assert_eq!(json["cause"], "Hunger");
    }
}
