//! Core game state structs.
//!
//! These are plain data. The rules that move a [`GameState`] from one value
//! to the next live in `archipelago-core`; nothing here clamps or validates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Meter, Phase};

/// The four status meters, each expected to stay within `[0, 100]`.
///
/// Values are fractional (happiness decays by 0.3 per tick); views round
/// them for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Meters {
    /// Fullness.
    pub hunger: f64,
    /// Restedness.
    pub sleep: f64,
    /// Cleanliness.
    pub hygiene: f64,
    /// Mood.
    pub happiness: f64,
}

impl Meters {
    /// All four meters set to the same value.
    pub const fn uniform(value: f64) -> Self {
        Self {
            hunger: value,
            sleep: value,
            hygiene: value,
            happiness: value,
        }
    }

    /// Read a single meter.
    pub const fn get(&self, meter: Meter) -> f64 {
        match meter {
            Meter::Hunger => self.hunger,
            Meter::Sleep => self.sleep,
            Meter::Hygiene => self.hygiene,
            Meter::Happiness => self.happiness,
        }
    }

    /// Mutable access to a single meter.
    pub fn get_mut(&mut self, meter: Meter) -> &mut f64 {
        match meter {
            Meter::Hunger => &mut self.hunger,
            Meter::Sleep => &mut self.sleep,
            Meter::Hygiene => &mut self.hygiene,
            Meter::Happiness => &mut self.happiness,
        }
    }
}

/// The complete state of one game session.
///
/// Owned exclusively by the running session. Transition functions take a
/// reference and return the next value; the session installs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// In-game day, starting at 1.
    pub day: u32,
    /// In-game clock in minutes since midnight (360 = 06:00).
    pub time: u32,
    /// The four status meters.
    pub meters: Meters,
    /// Currency. Not clamped; eating with no money drives it negative.
    pub money: i64,
    /// Current lifecycle stage.
    pub phase: Phase,
    /// Name chosen during onboarding. Fixed once playing.
    pub player_name: String,
    /// Index into the avatar roster. Fixed once playing.
    pub avatar_index: usize,
}
