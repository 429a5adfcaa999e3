//! Cancellable repeating tick timer.
//!
//! [`TickSchedule`] wraps a [`tokio::time::Interval`] that can be started and
//! cancelled explicitly. The schedule knows nothing about the game; the
//! session starts it on entering play and cancels it whenever the phase is
//! anything else.
//!
//! # Semantics
//!
//! - The first tick fires one full period after [`TickSchedule::start`], not
//!   immediately.
//! - [`TickSchedule::cancel`] drops the interval. Cancellation happens
//!   between fires: a tick that already resolved is handed to the caller, no
//!   further tick is produced.
//! - [`TickSchedule::next_tick`] on a cancelled schedule never resolves, so
//!   it can sit in a `select!` next to other event sources.
//! - A late tick (the loop was busy) is delayed rather than burst-fired, so
//!   a slow consumer never receives a backlog of catch-up ticks.
//! - A zero period is raised to [`MIN_PERIOD`]. Starting outside a tokio
//!   runtime fails with [`ScheduleError::NoRuntime`].

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Shortest accepted period between ticks.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Errors raised when starting a schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// No tokio runtime is available on the calling thread.
    #[error("tick schedule needs a running tokio runtime")]
    NoRuntime,
}

/// A repeating timer that can be started and cancelled.
#[derive(Debug)]
pub struct TickSchedule {
    /// Time between ticks.
    period: Duration,

    /// The live interval, present only while running.
    interval: Option<Interval>,

    /// Ticks delivered since the last start.
    fired: u64,
}

impl TickSchedule {
    /// Create a stopped schedule with the given period.
    ///
    /// Periods shorter than [`MIN_PERIOD`] are raised to it.
    pub const fn new(period: Duration) -> Self {
        let period = if period.is_zero() { MIN_PERIOD } else { period };
        Self {
            period,
            interval: None,
            fired: 0,
        }
    }

    /// Create a stopped schedule with a period in milliseconds.
    pub const fn from_millis(period_ms: u64) -> Self {
        Self::new(Duration::from_millis(period_ms))
    }

    /// Start ticking. The first tick fires one period from now.
    ///
    /// Starting a running schedule restarts it from now.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NoRuntime`] when called outside a tokio
    /// runtime. The schedule is left as it was.
    pub fn start(&mut self) -> Result<(), ScheduleError> {
        if Handle::try_current().is_err() {
            return Err(ScheduleError::NoRuntime);
        }
        let now = Instant::now();
        let first = now.checked_add(self.period).unwrap_or(now);
        let mut interval = tokio::time::interval_at(first, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        self.fired = 0;
        Ok(())
    }

    /// Stop ticking. No further tick is delivered until the next start.
    pub fn cancel(&mut self) {
        self.interval = None;
    }

    /// Whether the schedule is currently running.
    pub const fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// The configured period.
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Ticks delivered since the last start.
    pub const fn fired(&self) -> u64 {
        self.fired
    }

    /// Wait for the next tick.
    ///
    /// Never resolves while the schedule is cancelled. Cancel-safe: dropping
    /// the future before it resolves loses no tick.
    pub async fn next_tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
                self.fired = self.fired.saturating_add(1);
            }
            None => std::future::pending::<()>().await,
        }
    }
}
