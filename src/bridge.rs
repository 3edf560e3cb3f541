//! Named actions the host application binds to buttons or menu entries.

use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::error::LiveError;
use crate::fetcher::Fetcher;
use crate::host::DiagramHost;
use crate::scheduler::LiveScheduler;

/// The three live actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveAction {
  Start,
  Pause,
  Restart,
}

impl LiveAction {
  pub const ALL: [LiveAction; 3] = [LiveAction::Start, LiveAction::Pause, LiveAction::Restart];

  /// Name the host registers the action under.
  pub fn name(self) -> &'static str {
    match self {
      LiveAction::Start => "live-start",
      LiveAction::Pause => "live-pause",
      LiveAction::Restart => "live-restart",
    }
  }
}

impl fmt::Display for LiveAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for LiveAction {
  type Err = LiveError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    LiveAction::ALL
      .into_iter()
      .find(|a| a.name() == s)
      .ok_or_else(|| LiveError::UnknownAction(s.to_string()))
  }
}

/// Maps actions 1:1 onto scheduler operations.
pub struct LiveBridge<H, F> {
  scheduler: LiveScheduler<H, F>,
}

impl<H, F> LiveBridge<H, F>
where
  H: DiagramHost + 'static,
  F: Fetcher + 'static,
{
  pub fn new(scheduler: LiveScheduler<H, F>) -> Self {
    Self { scheduler }
  }

  pub fn scheduler(&self) -> &LiveScheduler<H, F> {
    &self.scheduler
  }

  pub async fn invoke(&self, action: LiveAction) {
    info!(action = %action, "live action");
    match action {
      LiveAction::Start => {
        self.scheduler.start().await;
      }
      LiveAction::Pause => self.scheduler.pause().await,
      LiveAction::Restart => {
        self.scheduler.restart().await;
      }
    }
  }

  /// Invokes an action by its registered name.
  pub async fn invoke_named(&self, name: &str) -> Result<(), LiveError> {
    let action = name.parse()?;
    self.invoke(action).await;
    Ok(())
  }
}
