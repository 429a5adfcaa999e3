//! A single game session: state, tick schedule, and the install step.
//!
//! [`Session`] owns exactly one [`GameState`]. Every change goes through the
//! pure transition functions ([`apply_tick`], [`apply_activity`], the
//! onboarding functions) and is then installed by the session. Installing is
//! the only place the state is replaced, and each install re-synchronises the
//! [`TickSchedule`] with the new phase:
//!
//! - entering [`Phase::Playing`] starts the schedule ([`Session::start`]
//!   starts it first and refuses to play without a runtime),
//! - any other phase cancels it on the spot.
//!
//! The session is driven from one task. Ticks and player commands are
//! awaited in the same loop, so they never interleave mid-update.
//!
//! [`apply_tick`]: crate::tick::apply_tick
//! [`apply_activity`]: crate::activity::apply_activity

use std::time::Duration;

use archipelago_types::{ActivityKind, CycleDirection, GameState, Phase, SessionId, View};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::activity;
use crate::onboarding::{self, AvatarRoster, OnboardingError};
use crate::rules::{TICK_INTERVAL_MS, initial_state};
use crate::schedule::{ScheduleError, TickSchedule};
use crate::tick::{self, TickOutcome};
use crate::view;

/// Errors raised when starting a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The onboarding rules refused the start.
    #[error(transparent)]
    Onboarding(#[from] OnboardingError),

    /// The tick schedule could not be started.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// One running game from onboarding until restart.
#[derive(Debug)]
pub struct Session {
    /// Identifier of the current session; replaced on restart.
    id: SessionId,

    /// Wall-clock time the current session was created.
    started_at: DateTime<Utc>,

    /// The game state. Only [`Session::install`] writes it.
    state: GameState,

    /// Periodic tick driver, running only while playing.
    schedule: TickSchedule,

    /// Selectable avatars.
    roster: AvatarRoster,

    /// Title shown on the screens.
    title: String,
}

impl Session {
    /// Create a session in onboarding with the standard tick period.
    pub fn new(roster: AvatarRoster, title: impl Into<String>) -> Self {
        Self::with_period(roster, title, Duration::from_millis(TICK_INTERVAL_MS))
    }

    /// Create a session with an explicit tick period.
    pub fn with_period(roster: AvatarRoster, title: impl Into<String>, period: Duration) -> Self {
        let session = Self {
            id: SessionId::new(),
            started_at: Utc::now(),
            state: initial_state(),
            schedule: TickSchedule::new(period),
            roster,
            title: title.into(),
        };
        info!(session = %session.id, "session created");
        session
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Identifier of the current session.
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Wall-clock creation time of the current session.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The current game state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The current phase.
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The avatar roster.
    pub const fn roster(&self) -> &AvatarRoster {
        &self.roster
    }

    /// The tick schedule, for inspecting whether it runs.
    pub const fn schedule(&self) -> &TickSchedule {
        &self.schedule
    }

    /// The screen that should be visible right now.
    pub fn view(&self) -> View {
        view::build_view(&self.state, &self.roster, &self.title)
    }

    // -----------------------------------------------------------------------
    // Onboarding
    // -----------------------------------------------------------------------

    /// Select the previous or next avatar.
    pub fn cycle_avatar(&mut self, direction: CycleDirection) {
        let next = onboarding::cycle_avatar(&self.state, &self.roster, direction);
        self.install(next);
    }

    /// Replace the player name.
    pub fn set_player_name(&mut self, name: &str) {
        let next = onboarding::set_player_name(&self.state, name);
        self.install(next);
    }

    /// Whether the start control is enabled.
    pub fn can_start(&self) -> bool {
        self.state.phase == Phase::Onboarding && onboarding::can_start(&self.state.player_name)
    }

    /// Leave onboarding and start the clock.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Onboarding`] if no name was entered or the
    /// game has already started, and [`SessionError::Schedule`] when no tokio
    /// runtime is available to drive the clock. The state is unchanged in
    /// either case.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let next = onboarding::start(&self.state)?;
        self.schedule.start()?;
        debug!(
            session = %self.id,
            period_ms = self.schedule.period().as_millis(),
            "tick schedule started"
        );
        info!(
            session = %self.id,
            player = next.player_name,
            avatar = next.avatar_index,
            "game started"
        );
        self.install(next);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Play
    // -----------------------------------------------------------------------

    /// Perform an activity. Ignored outside play.
    pub fn perform_activity(&mut self, kind: ActivityKind) {
        let next = activity::apply_activity(&self.state, kind);
        self.install(next);
    }

    /// Perform an activity given by name. Unknown names are ignored.
    pub fn perform_named_activity(&mut self, name: &str) {
        let next = activity::apply_named_activity(&self.state, name);
        self.install(next);
    }

    /// Wait until the schedule fires. Never resolves unless playing.
    pub async fn next_tick(&mut self) {
        self.schedule.next_tick().await;
    }

    /// Apply one tick and install the result.
    ///
    /// A tick that arrives outside play (e.g. one that resolved just before
    /// the game ended) changes nothing.
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = tick::apply_tick(&self.state);
        if outcome.rolled_over {
            info!(session = %self.id, day = outcome.state.day, "new day");
        }
        if let Some(meter) = outcome.ended_by {
            info!(
                session = %self.id,
                day = outcome.state.day,
                depleted = %meter,
                played_seconds = Utc::now().signed_duration_since(self.started_at).num_seconds(),
                "game over"
            );
        }
        self.install(outcome.state.clone());
        outcome
    }

    // -----------------------------------------------------------------------
    // Restart
    // -----------------------------------------------------------------------

    /// Discard the session and start over in onboarding.
    ///
    /// The schedule is cancelled before the state is replaced, so no tick
    /// from the old session can reach the new one.
    pub fn restart(&mut self) {
        self.schedule.cancel();
        let previous = self.id;
        self.id = SessionId::new();
        self.started_at = Utc::now();
        info!(previous = %previous, session = %self.id, "session restarted");
        self.install(initial_state());
    }

    // -----------------------------------------------------------------------
    // Install
    // -----------------------------------------------------------------------

    /// Replace the state and bring the schedule in line with its phase.
    fn install(&mut self, next: GameState) {
        let from = self.state.phase;
        self.state = next;
        let to = self.state.phase;
        if from != to {
            info!(session = %self.id, %from, %to, "phase changed");
        }

        match (to.is_playing(), self.schedule.is_running()) {
            (true, false) => match self.schedule.start() {
                Ok(()) => debug!(session = %self.id, "tick schedule started"),
                Err(e) => warn!(session = %self.id, error = %e, "tick schedule not started"),
            },
            (false, true) => {
                self.schedule.cancel();
                debug!(session = %self.id, "tick schedule cancelled");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(AvatarRoster::default(), "Test")
    }

    fn playing_session() -> Session {
        let mut session = session();
        session.set_player_name("Ucup");
        assert!(session.start().is_ok());
        session
    }

    #[tokio::test]
    async fn schedule_runs_only_while_playing() {
        let mut session = session();
        assert!(!session.schedule().is_running());

        session.set_player_name("Ucup");
        assert!(!session.schedule().is_running());

        assert!(session.start().is_ok());
        assert_eq!(session.phase(), Phase::Playing);
        assert!(session.schedule().is_running());
    }

    #[test]
    fn start_without_name_is_rejected() {
        let mut session = session();
        assert!(!session.can_start());
        assert_eq!(
            session.start(),
            Err(SessionError::Onboarding(OnboardingError::EmptyName))
        );
        assert_eq!(session.phase(), Phase::Onboarding);
        assert!(!session.schedule().is_running());
    }

    #[tokio::test]
    async fn sleep_from_fresh_state() {
        let mut session = playing_session();
        session.perform_activity(ActivityKind::Sleep);
        let state = session.state();
        assert!((state.meters.sleep - 90.0).abs() < 1e-9);
        assert_eq!(state.time, 600);
        assert_eq!(state.day, 1);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[tokio::test]
    async fn game_over_cancels_schedule() {
        let mut session = playing_session();
        for _ in 0..50 {
            let _ = session.on_tick();
        }
        assert_eq!(session.phase(), Phase::GameOver);
        assert!(!session.schedule().is_running());
    }

    #[tokio::test]
    async fn late_tick_after_game_over_changes_nothing() {
        let mut session = playing_session();
        for _ in 0..50 {
            let _ = session.on_tick();
        }
        let frozen = session.state().clone();
        let outcome = session.on_tick();
        assert_eq!(outcome.state, frozen);
        assert_eq!(session.state(), &frozen);
    }

    #[tokio::test]
    async fn restart_replaces_state_and_id() {
        let mut session = playing_session();
        session.perform_activity(ActivityKind::Eat);
        let old_id = session.id();
        let old_started_at = session.started_at();

        session.restart();
        assert_ne!(session.id(), old_id);
        assert!(session.started_at() >= old_started_at);
        assert_eq!(session.roster().len(), 4);
        assert_eq!(session.state(), &initial_state());
        assert!(!session.schedule().is_running());
    }

    #[test]
    fn start_outside_a_runtime_is_refused() {
        let mut session = session();
        session.set_player_name("Ucup");
        assert_eq!(
            session.start(),
            Err(SessionError::Schedule(ScheduleError::NoRuntime))
        );
        assert_eq!(session.phase(), Phase::Onboarding);
        assert!(!session.schedule().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_session_plays() {
        let mut session = Session::with_period(AvatarRoster::default(), "Test", Duration::ZERO);
        session.set_player_name("Ucup");
        assert!(session.start().is_ok());
        session.next_tick().await;
        let outcome = session.on_tick();
        assert_eq!(outcome.state.time, 370);
    }

    #[test]
    fn view_follows_phase() {
        let session = session();
        assert!(matches!(session.view(), View::Onboarding(_)));
    }
}
