//! Graph-level live settings read from the root cell.

use std::time::Duration;

use super::DiagramElement;
use super::live_target::{API_ATTR, REFRESH_ATTR};

/// `live.api` and `live.refresh` as found on the root cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSettings {
  pub api: Option<String>,
  /// Raw refresh period in seconds; `None` when missing or not a whole number.
  pub refresh_secs: Option<u64>,
}

impl GraphSettings {
  pub fn from_element(cell: &DiagramElement) -> Self {
    Self {
      api: cell.attr(API_ATTR).map(str::to_string),
      refresh_secs: cell.attr(REFRESH_ATTR).and_then(|v| v.trim().parse().ok()),
    }
  }

  /// Poll period (`refresh × 1000` ms), or `fallback` when unset or zero.
  pub fn poll_interval(&self, fallback: Duration) -> Duration {
    match self.refresh_secs {
      Some(secs) if secs > 0 => Duration::from_millis(secs * 1000),
      _ => fallback,
    }
  }
}
