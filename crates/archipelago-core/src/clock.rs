//! Game clock: in-game day and time of day.
//!
//! The clock is a small value type read from and written back to the
//! [`GameState`]. A tick moves it forward by [`MINUTES_PER_TICK`]; when that
//! would go past [`DAY_END_MINUTES`] the clock rolls over to
//! [`DAY_START_MINUTES`] of the next day instead.
//!
//! # Boundaries
//!
//! - Exactly 24:00 (`1440`) is still part of the current day. Only a value
//!   *beyond* it triggers a rollover, so `1430 -> 1440` keeps the day and
//!   `1440 -> 360` advances it.
//! - [`GameClock::skip`] moves the time without the rollover check. Sleeping
//!   uses it, so a late nap can leave the clock past 24:00 until the next
//!   tick rolls it over.

use archipelago_types::GameState;

use crate::rules::{DAY_END_MINUTES, DAY_START_MINUTES, MINUTES_PER_TICK};

/// Minutes in one hour, for formatting.
const MINUTES_PER_HOUR: u32 = 60;

/// Day counter plus clock minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    /// In-game day (1-based).
    day: u32,
    /// Minutes since midnight.
    minutes: u32,
}

/// Result of advancing the clock by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockAdvance {
    /// The clock after the tick.
    pub clock: GameClock,
    /// Whether the tick crossed into a new day.
    pub rolled_over: bool,
}

impl GameClock {
    /// Create a clock from explicit parts.
    pub const fn new(day: u32, minutes: u32) -> Self {
        Self { day, minutes }
    }

    /// Read the clock fields of a game state.
    pub const fn of(state: &GameState) -> Self {
        Self::new(state.day, state.time)
    }

    /// Write this clock back into a game state.
    pub const fn store(self, state: &mut GameState) {
        state.day = self.day;
        state.time = self.minutes;
    }

    /// Current day.
    pub const fn day(self) -> u32 {
        self.day
    }

    /// Current minutes since midnight.
    pub const fn minutes(self) -> u32 {
        self.minutes
    }

    /// Advance by one tick, rolling over to the next morning when the new
    /// time would exceed the end of the day.
    pub const fn advance_tick(self) -> ClockAdvance {
        let next = self.minutes.saturating_add(MINUTES_PER_TICK);
        if next > DAY_END_MINUTES {
            ClockAdvance {
                clock: Self::new(self.day.saturating_add(1), DAY_START_MINUTES),
                rolled_over: true,
            }
        } else {
            ClockAdvance {
                clock: Self::new(self.day, next),
                rolled_over: false,
            }
        }
    }

    /// Move the time forward without checking for a rollover.
    pub const fn skip(self, minutes: u32) -> Self {
        Self::new(self.day, self.minutes.saturating_add(minutes))
    }

    /// Clock formatted as zero-padded `HH:MM`.
    pub fn formatted(self) -> String {
        format_clock(self.minutes)
    }
}

/// Format minutes since midnight as zero-padded `HH:MM`.
///
/// Hours are not wrapped at 24, so a clock pushed past midnight by sleeping
/// shows e.g. `26:40` until the next tick rolls it over.
pub fn format_clock(minutes: u32) -> String {
    let hours = minutes.checked_div(MINUTES_PER_HOUR).unwrap_or(0);
    let mins = minutes.checked_rem(MINUTES_PER_HOUR).unwrap_or(0);
    format!("{hours:02}:{mins:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_adds_ten_minutes() {
        let advance = GameClock::new(1, 360).advance_tick();
        assert_eq!(advance.clock, GameClock::new(1, 370));
        assert!(!advance.rolled_over);
    }

    #[test]
    fn reaching_midnight_is_not_a_rollover() {
        let advance = GameClock::new(1, 1430).advance_tick();
        assert_eq!(advance.clock, GameClock::new(1, 1440));
        assert!(!advance.rolled_over);
    }

    #[test]
    fn passing_midnight_rolls_to_next_morning() {
        let advance = GameClock::new(1, 1440).advance_tick();
        assert_eq!(advance.clock, GameClock::new(2, 360));
        assert!(advance.rolled_over);
    }

    #[test]
    fn clock_past_midnight_rolls_on_next_tick() {
        // Where a late sleep leaves the clock.
        let advance = GameClock::new(3, 1600).advance_tick();
        assert_eq!(advance.clock, GameClock::new(4, 360));
        assert!(advance.rolled_over);
    }

    #[test]
    fn full_day_takes_109_ticks() {
        let mut clock = GameClock::new(1, 360);
        let mut ticks = 0_u32;
        loop {
            let advance = clock.advance_tick();
            clock = advance.clock;
            ticks += 1;
            if advance.rolled_over {
                break;
            }
        }
        // 108 ticks to go from 06:00 to 24:00, one more to roll over.
        assert_eq!(ticks, 109);
        assert_eq!(clock, GameClock::new(2, 360));
    }

    #[test]
    fn skip_does_not_roll_over() {
        let clock = GameClock::new(1, 1400).skip(240);
        assert_eq!(clock, GameClock::new(1, 1640));
    }

    #[test]
    fn day_counter_saturates() {
        let advance = GameClock::new(u32::MAX, 1440).advance_tick();
        assert_eq!(advance.clock.day(), u32::MAX);
        assert_eq!(advance.clock.minutes(), 360);
    }

    #[test]
    fn format_pads_hours_and_minutes() {
        assert_eq!(format_clock(360), "06:00");
        assert_eq!(format_clock(725), "12:05");
        assert_eq!(format_clock(1440), "24:00");
        assert_eq!(format_clock(1600), "26:40");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn clock_round_trips_through_state() {
        let mut state = crate::rules::initial_state();
        GameClock::new(5, 900).store(&mut state);
        assert_eq!(state.day, 5);
        assert_eq!(state.time, 900);
        assert_eq!(GameClock::of(&state).formatted(), "15:00");
    }
}
