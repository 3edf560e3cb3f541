//! Live-update poll scheduler.
//!
//! A session moves `Idle → Running → Paused → Running | Idle`. Each tick fetches every live
//! attribute, commits one batch to the host and arms exactly one delayed follow-up tick, or
//! tears the session down when the displayed page changed.
//!
//! Every pause or reset bumps the session generation. A tick remembers the generation it
//! started under and only commits and reschedules if it is still current, so a tick still
//! fetching when the user pauses finishes quietly.

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::LiveConfig;
use crate::diagram_xml::{model_root, parse_element};
use crate::error::LiveError;
use crate::fetcher::Fetcher;
use crate::host::DiagramHost;
use crate::steps::{build_batch, discover_live_ids, graph_settings, materialize_live_nodes};
use crate::types::{LiveNode, LiveStatus, SchedulerState, SessionSnapshot, TickOutcome};

/// The one delayed tick a session may have.
struct PendingTick {
  token: u64,
  handle: JoinHandle<()>,
}

#[derive(Default)]
struct SessionState {
  pending: Option<PendingTick>,
  /// Generation of the tick currently fetching, if any.
  in_flight: Option<u64>,
  generation: u64,
  initialized: bool,
  live_node_ids: Vec<String>,
  live_nodes: Arc<Vec<LiveNode>>,
  api: Option<String>,
  poll_interval: Option<Duration>,
  active_graph_id: Option<String>,
  ticks: u64,
  last_tick_at: Option<DateTime<Utc>>,
}

impl SessionState {
  fn cancel_pending(&mut self) {
    if let Some(pending) = self.pending.take() {
      pending.handle.abort();
    }
  }

  /// Drops the pending tick and invalidates any tick in flight.
  fn invalidate(&mut self) {
    self.cancel_pending();
    self.generation += 1;
    self.in_flight = None;
  }

  fn clear(&mut self) {
    self.invalidate();
    self.initialized = false;
    self.live_node_ids.clear();
    self.live_nodes = Arc::new(Vec::new());
    self.api = None;
    self.poll_interval = None;
    self.active_graph_id = None;
  }

  fn state(&self) -> SchedulerState {
    if self.pending.is_some() || self.in_flight == Some(self.generation) {
      SchedulerState::Running
    } else if self.initialized {
      SchedulerState::Paused
    } else {
      SchedulerState::Idle
    }
  }
}

/// What the fetch phase needs, captured under the lock.
struct PreparedTick {
  token: u64,
  nodes: Arc<Vec<LiveNode>>,
  api: Option<String>,
}

struct Inner<H, F> {
  host: H,
  fetcher: F,
  config: LiveConfig,
  session: Mutex<SessionState>,
}

/// Handle to one live-update session. Clones share the session.
pub struct LiveScheduler<H, F> {
  inner: Arc<Inner<H, F>>,
}

impl<H, F> Clone for LiveScheduler<H, F> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<H, F> LiveScheduler<H, F>
where
  H: DiagramHost + 'static,
  F: Fetcher + 'static,
{
  pub fn new(host: H, fetcher: F, config: LiveConfig) -> Self {
    Self {
      inner: Arc::new(Inner {
        host,
        fetcher,
        config,
        session: Mutex::new(SessionState::default()),
      }),
    }
  }

  pub fn host(&self) -> &H {
    &self.inner.host
  }

  pub fn fetcher(&self) -> &F {
    &self.inner.fetcher
  }

  pub fn config(&self) -> &LiveConfig {
    &self.inner.config
  }

  /// Marks the status active and runs a tick now, unless a tick is already pending or
  /// in flight.
  pub async fn start(&self) -> TickOutcome {
    let prepared = {
      let mut session = self.inner.session.lock().await;
      if session.pending.is_some() || session.in_flight == Some(session.generation) {
        info!("live updates already running");
        return TickOutcome::AlreadyRunning;
      }
      self.inner.host.set_status(LiveStatus::Active);
      match self.inner.begin_tick(&mut session, None) {
        Ok(p) => p,
        Err(outcome) => return outcome,
      }
    };
    self.inner.finish_tick(prepared).await
  }

  /// Cancels the pending tick but keeps discovered nodes, so the next start skips discovery.
  pub async fn pause(&self) {
    let mut session = self.inner.session.lock().await;
    session.invalidate();
    self.inner.host.set_status(LiveStatus::Paused);
    info!(live_nodes = session.live_nodes.len(), "live updates paused");
  }

  /// Drops all session data and the pending tick.
  pub async fn reset(&self) {
    let mut session = self.inner.session.lock().await;
    self.inner.reset_locked(&mut session, true);
  }

  /// Reset followed by start; discovery runs again. The status is only recoloured by start.
  pub async fn restart(&self) -> TickOutcome {
    {
      let mut session = self.inner.session.lock().await;
      self.inner.reset_locked(&mut session, false);
    }
    self.start().await
  }

  /// Runs one tick now, replacing any pending tick. A tick still in flight is superseded.
  pub async fn tick(&self) -> TickOutcome {
    let prepared = {
      let mut session = self.inner.session.lock().await;
      match self.inner.begin_tick(&mut session, None) {
        Ok(p) => p,
        Err(outcome) => return outcome,
      }
    };
    self.inner.finish_tick(prepared).await
  }

  pub async fn snapshot(&self) -> SessionSnapshot {
    let session = self.inner.session.lock().await;
    SessionSnapshot {
      state: session.state(),
      initialized: session.initialized,
      live_node_ids: session.live_node_ids.clone(),
      live_nodes: Arc::clone(&session.live_nodes),
      poll_interval: session.poll_interval,
      active_graph_id: session.active_graph_id.clone(),
      pending_tick: session.pending.is_some(),
      ticks: session.ticks,
      last_tick_at: session.last_tick_at,
    }
  }
}

impl<H, F> Inner<H, F>
where
  H: DiagramHost + 'static,
  F: Fetcher + 'static,
{
  fn reset_locked(&self, session: &mut SessionState, update_status: bool) {
    session.clear();
    if update_status {
      self.host.set_status(LiveStatus::Paused);
    }
    info!("live session reset");
  }

  /// Reads the displayed diagram and fills the session's node set, interval and page id.
  fn discover(&self, session: &mut SessionState) -> Result<(), LiveError> {
    let xml = self.host.current_xml()?;
    let model = parse_element(&xml)?;
    let root = model_root(&model)?;
    let ids = discover_live_ids(root);
    let nodes = materialize_live_nodes(root, &ids);
    let settings = graph_settings(root);
    let interval = settings.poll_interval(self.config.default_refresh);
    let page = self.host.current_page_id();
    info!(
      live_nodes = nodes.len(),
      interval_ms = interval.as_millis() as u64,
      api = ?settings.api,
      page = ?page,
      "live discovery"
    );
    session.live_node_ids = ids;
    session.live_nodes = Arc::new(nodes);
    session.api = settings.api;
    session.poll_interval = Some(interval);
    session.active_graph_id = page;
    session.initialized = true;
    Ok(())
  }

  /// Clears the pending tick and discovers if needed. `timer_token` is set when a scheduled
  /// tick fires; a stale token means the session moved on and the tick is dropped.
  fn begin_tick(
    &self,
    session: &mut SessionState,
    timer_token: Option<u64>,
  ) -> Result<PreparedTick, TickOutcome> {
    match timer_token {
      Some(token) => {
        if session.generation != token {
          return Err(TickOutcome::Superseded);
        }
        // The firing timer is the running task; forget its handle instead of aborting it.
        if session.pending.as_ref().is_some_and(|p| p.token == token) {
          session.pending = None;
        }
      }
      None => {
        session.cancel_pending();
        if session.in_flight == Some(session.generation) {
          session.generation += 1;
        }
      }
    }

    if !session.initialized {
      if let Err(e) = self.discover(session) {
        warn!(error = %e, "live discovery failed");
        self.reset_locked(session, true);
        return Err(TickOutcome::Failed(e));
      }
    }

    session.in_flight = Some(session.generation);
    Ok(PreparedTick {
      token: session.generation,
      nodes: Arc::clone(&session.live_nodes),
      api: session.api.clone(),
    })
  }

  /// Fetches without holding the lock, then commits and reschedules, or tears down.
  async fn finish_tick(self: &Arc<Self>, prepared: PreparedTick) -> TickOutcome {
    let (batch, stats) =
      build_batch(&prepared.nodes, prepared.api.as_deref(), &self.fetcher).await;

    let mut session = self.session.lock().await;
    if session.in_flight == Some(prepared.token) {
      session.in_flight = None;
    }
    if session.generation != prepared.token {
      debug!(token = prepared.token, "tick superseded while fetching");
      return TickOutcome::Superseded;
    }

    let current = self.host.current_page_id();
    if current != session.active_graph_id {
      info!(
        active = ?session.active_graph_id,
        current = ?current,
        "displayed page changed, stopping live updates"
      );
      self.reset_locked(&mut session, true);
      return TickOutcome::TornDown;
    }

    self.host.apply_updates(&batch);
    session.ticks += 1;
    session.last_tick_at = Some(Utc::now());

    let delay = session
      .poll_interval
      .unwrap_or(self.config.default_refresh);
    session.cancel_pending();
    let handle = spawn_tick(Arc::clone(self), prepared.token, delay);
    session.pending = Some(PendingTick {
      token: prepared.token,
      handle,
    });

    info!(
      updates = batch.len(),
      applied = stats.applied,
      failed = stats.failed,
      skipped = stats.skipped,
      next_in_ms = delay.as_millis() as u64,
      "live tick committed"
    );
    TickOutcome::Rescheduled { batch, delay }
  }

  async fn timer_tick(self: &Arc<Self>, token: u64) -> TickOutcome {
    let prepared = {
      let mut session = self.session.lock().await;
      match self.begin_tick(&mut session, Some(token)) {
        Ok(p) => p,
        Err(outcome) => return outcome,
      }
    };
    self.finish_tick(prepared).await
  }
}

/// Arms the next tick: sleep for `delay`, then tick under `token`.
fn spawn_tick<H, F>(inner: Arc<Inner<H, F>>, token: u64, delay: Duration) -> JoinHandle<()>
where
  H: DiagramHost + 'static,
  F: Fetcher + 'static,
{
  let task: BoxFuture<'static, ()> = Box::pin(async move {
    tokio::time::sleep(delay).await;
    let outcome = inner.timer_tick(token).await;
    debug!(outcome = ?outcome, "scheduled tick finished");
  });
  tokio::spawn(task)
}
