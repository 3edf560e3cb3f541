//! The stages of one live-update tick.
//!
//! Discovery runs once per session; planning, updating and batch assembly run every tick.

mod build_batch;
mod compute_update;
mod discover_live_nodes;
#[cfg(test)]
mod discover_live_nodes_test;
mod plan_request;

pub use build_batch::{BatchStats, build_batch};
pub use compute_update::{ComputedUpdate, compute_update, label_payload, normalize_response};
pub use discover_live_nodes::{
  discover_live_ids, graph_settings, is_live_node, materialize_live_nodes,
};
pub use plan_request::plan_request;
