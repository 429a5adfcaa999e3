//! Enumeration types for the Archipelago game.
//!
//! Every enum here is closed: the set of phases, meters, and activities is
//! fixed by the game rules. Textual input (terminal commands, browser events)
//! is mapped onto these types through the `parse` helpers, which return
//! `None` for anything unrecognised instead of failing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Coarse lifecycle stage of a session.
///
/// Transitions only go forward: `Onboarding -> Playing -> GameOver`. The only
/// way back is a restart, which replaces the whole game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Phase {
    /// Picking an avatar and a name. The clock is stopped.
    Onboarding,
    /// The clock runs and activities are available.
    Playing,
    /// A meter ran out. Terminal until restart.
    GameOver,
}

impl Phase {
    /// Whether the clock and decay loop should be running in this phase.
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Whether this phase is terminal for the current session.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Onboarding => write!(f, "onboarding"),
            Self::Playing => write!(f, "playing"),
            Self::GameOver => write!(f, "game_over"),
        }
    }
}

// ---------------------------------------------------------------------------
// Meters
// ---------------------------------------------------------------------------

/// One of the four decaying status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Meter {
    /// Fullness. Drops fastest.
    Hunger,
    /// Restedness.
    Sleep,
    /// Cleanliness.
    Hygiene,
    /// Mood. Drops slowest.
    Happiness,
}

impl Meter {
    /// All meters in display order.
    pub const ALL: [Self; 4] = [Self::Hunger, Self::Sleep, Self::Hygiene, Self::Happiness];

    /// Human-readable label used by the views.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hunger => "Hunger",
            Self::Sleep => "Sleep",
            Self::Hygiene => "Hygiene",
            Self::Happiness => "Happiness",
        }
    }
}

impl core::fmt::Display for Meter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Hunger => write!(f, "hunger"),
            Self::Sleep => write!(f, "sleep"),
            Self::Hygiene => write!(f, "hygiene"),
            Self::Happiness => write!(f, "happiness"),
        }
    }
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

/// A discrete player-triggered action with a fixed effect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ActivityKind {
    /// Restores hunger, costs money.
    Eat,
    /// Restores sleep, skips clock time.
    Sleep,
    /// Restores hygiene.
    Clean,
    /// Restores happiness.
    Play,
}

impl ActivityKind {
    /// All activities in button order.
    pub const ALL: [Self; 4] = [Self::Eat, Self::Sleep, Self::Clean, Self::Play];

    /// Map a textual activity name onto a kind, ignoring ASCII case and
    /// surrounding whitespace.
    ///
    /// Returns `None` for unknown names; callers treat that as a no-op.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(name))
    }
}

impl core::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Eat => write!(f, "eat"),
            Self::Sleep => write!(f, "sleep"),
            Self::Clean => write!(f, "clean"),
            Self::Play => write!(f, "play"),
        }
    }
}

// ---------------------------------------------------------------------------
// Onboarding input
// ---------------------------------------------------------------------------

/// Direction for cycling through the avatar roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum CycleDirection {
    /// Previous avatar, wrapping from the first to the last.
    Left,
    /// Next avatar, wrapping from the last to the first.
    Right,
}
