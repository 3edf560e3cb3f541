//! # diagram-live
//!
//! Live updates for diagram pages. Cells carrying `live.*` attributes are bound to HTTP
//! endpoints; a poll scheduler fetches them on the page's refresh interval and patches cell
//! labels and styles through the host editor.
//!
//! ## Architecture
//!
//! - `steps`: the pure pipeline (discover live nodes, plan requests, compute updates, build
//!   one batch per tick).
//! - `scheduler`: session state machine and the single pending tick.
//! - `host` / `fetcher`: the seams to the editor and to the network.
//! - `bridge`: the `live-start`, `live-pause` and `live-restart` actions.

pub mod bridge;
pub mod config;
pub mod diagram_xml;
pub mod error;
pub mod fetcher;
pub mod host;
pub mod scheduler;
pub mod steps;
pub mod style;
#[cfg(test)]
mod style_test;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

pub use bridge::{LiveAction, LiveBridge};
pub use config::LiveConfig;
pub use diagram_xml::parse_file;
pub use error::LiveError;
pub use fetcher::{Fetcher, HttpFetcher};
pub use host::{DiagramHost, MemoryHost};
pub use scheduler::LiveScheduler;
pub use types::{
  DiagramElement, DiagramFile, LiveStatus, NodeUpdate, SchedulerState, SessionSnapshot,
  TickOutcome, UpdateBatch,
};
