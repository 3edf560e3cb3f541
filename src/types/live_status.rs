//! Status indicator and scheduler state.

use serde::Serialize;
use std::fmt;

/// Colour shown by the status strip while polling.
pub const ACTIVE_COLOR: &str = "#4caf50";

/// Colour shown by the status strip while paused or stopped.
pub const PAUSED_COLOR: &str = "#f44336";

/// What the status strip shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiveStatus {
  Active,
  Paused,
}

impl LiveStatus {
  pub fn color(self) -> &'static str {
    match self {
      LiveStatus::Active => ACTIVE_COLOR,
      LiveStatus::Paused => PAUSED_COLOR,
    }
  }
}

/// Scheduler state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchedulerState {
  /// No pending tick and no session data.
  Idle,
  /// A tick is pending or in flight.
  Running,
  /// Session data retained, no pending tick.
  Paused,
}

impl fmt::Display for SchedulerState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SchedulerState::Idle => write!(f, "idle"),
      SchedulerState::Running => write!(f, "running"),
      SchedulerState::Paused => write!(f, "paused"),
    }
  }
}
