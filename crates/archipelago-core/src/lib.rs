//! Game rules, tick schedule, and session orchestration for the Archipelago
//! game.
//!
//! This crate owns the time/decay/activity state machine. The rules are pure
//! functions over [`GameState`](archipelago_types::GameState); the
//! [`session::Session`] is the only place their results are installed.
//!
//! # Modules
//!
//! - [`activity`] -- Fixed effect table and the activity resolver.
//! - [`clock`] -- In-game day and time, rollover, `HH:MM` formatting.
//! - [`config`] -- Configuration loading from `archipelago-config.yaml`.
//! - [`game_over`] -- The single game-over check and its latch.
//! - [`onboarding`] -- Avatar roster, name entry, and the start guard.
//! - [`rules`] -- Fixed timing, decay rates, and starting values.
//! - [`schedule`] -- Cancellable repeating tick timer.
//! - [`session`] -- One game session: state, schedule, install step.
//! - [`tick`] -- The per-tick transition (clock, decay, check).
//! - [`view`] -- Derivation of the visible screen from the state.
//! - [`vitals`] -- Meter decay, restoration, and clamping.

pub mod activity;
pub mod clock;
pub mod config;
pub mod game_over;
pub mod onboarding;
pub mod rules;
pub mod schedule;
pub mod session;
pub mod tick;
pub mod view;
pub mod vitals;

pub use activity::{apply_activity, apply_named_activity};
pub use config::{ConfigError, GameConfig};
pub use game_over::check_game_over;
pub use onboarding::{AvatarRoster, OnboardingError};
pub use schedule::{ScheduleError, TickSchedule};
pub use session::{Session, SessionError};
pub use tick::{TickOutcome, apply_tick};
