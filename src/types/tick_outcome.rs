//! Result of one scheduler tick.

use std::time::Duration;

use super::UpdateBatch;
use crate::error::LiveError;

/// How a tick (or a start request) ended.
#[derive(Debug)]
pub enum TickOutcome {
  /// `start` found a pending or in-flight tick and did nothing.
  AlreadyRunning,
  /// The batch was committed and the next tick is due after `delay`.
  Rescheduled { batch: UpdateBatch, delay: Duration },
  /// The displayed page changed; the session was reset.
  TornDown,
  /// A pause or reset happened while the tick was fetching; nothing was committed.
  Superseded,
  /// Discovery could not read the diagram; the session was reset.
  Failed(LiveError),
}

impl TickOutcome {
  pub fn batch(&self) -> Option<&UpdateBatch> {
    match self {
      TickOutcome::Rescheduled { batch, .. } => Some(batch),
      _ => None,
    }
  }

  pub fn is_rescheduled(&self) -> bool {
    matches!(self, TickOutcome::Rescheduled { .. })
  }
}
