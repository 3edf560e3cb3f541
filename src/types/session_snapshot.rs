//! Read-only view of a scheduler session.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use super::{LiveNode, SchedulerState};

/// Copy of the session state at one instant.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
  pub state: SchedulerState,
  pub initialized: bool,
  pub live_node_ids: Vec<String>,
  /// Shared with the session; pointer-equal across ticks until the next discovery.
  pub live_nodes: Arc<Vec<LiveNode>>,
  pub poll_interval: Option<Duration>,
  pub active_graph_id: Option<String>,
  pub pending_tick: bool,
  /// Ticks committed since the scheduler was built.
  pub ticks: u64,
  pub last_tick_at: Option<DateTime<Utc>>,
}
