//! Fetches every live attribute of every live node and assembles the update batch.

use tracing::{debug, warn};

use super::compute_update::{ComputedUpdate, compute_update};
use super::plan_request::plan_request;
use crate::fetcher::Fetcher;
use crate::types::{LiveNode, LiveTarget, UpdateBatch};

/// Per-tick attribute counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
  /// Attributes fetched and applied.
  pub applied: usize,
  /// Attributes whose fetch failed.
  pub failed: usize,
  /// Attributes skipped without a request (malformed URI or not a target).
  pub skipped: usize,
}

/// Visits nodes in order and, per node, live attributes in document order, awaiting one
/// fetch at a time. Style updates accumulate on the node's running style, so two property
/// attributes on one node both land. A failing attribute is logged and skipped.
pub async fn build_batch<F: Fetcher + ?Sized>(
  nodes: &[LiveNode],
  api: Option<&str>,
  fetcher: &F,
) -> (UpdateBatch, BatchStats) {
  let mut batch = UpdateBatch::new();
  let mut stats = BatchStats::default();

  for live in nodes {
    let mut style = live.node.style().to_string();
    for (name, uri) in live.live_attributes() {
      let Some(target) = LiveTarget::from_attribute(name) else {
        stats.skipped += 1;
        continue;
      };
      let Some(url) = plan_request(uri, api) else {
        debug!(node_id = %live.id, attribute = %name, uri = %uri, "unresolvable live uri");
        stats.skipped += 1;
        continue;
      };
      match fetcher.fetch(&url).await {
        Ok(raw) => {
          match compute_update(&style, &target, &raw) {
            ComputedUpdate::Value(value) => batch.entry(&live.id).value = Some(value),
            ComputedUpdate::Style(next) => {
              style = next.clone();
              batch.entry(&live.id).style = Some(next);
            }
          }
          stats.applied += 1;
        }
        Err(e) => {
          warn!(node_id = %live.id, url = %url, error = %e, "live fetch failed");
          stats.failed += 1;
        }
      }
    }
  }

  (batch, stats)
}
