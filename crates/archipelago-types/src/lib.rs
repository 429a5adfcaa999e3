//! Shared type definitions for the Archipelago game.
//!
//! This crate is the single source of truth for the data that crosses crate
//! boundaries: the game state, its enums, and the view models handed to front
//! ends. Types flow downstream to `TypeScript` via `ts-rs` so a browser front
//! end can render the same views as the terminal engine.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers (session identifiers)
//! - [`enums`] -- Phase, meter, activity, and cycle-direction enums
//! - [`structs`] -- The game state and its meters
//! - [`views`] -- View models for the onboarding, playing, and game-over screens

pub mod enums;
pub mod ids;
pub mod structs;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use enums::{ActivityKind, CycleDirection, Meter, Phase};
pub use ids::SessionId;
pub use structs::{GameState, Meters};
pub use views::{GameOverView, MeterReading, OnboardingView, PlayingView, View};
