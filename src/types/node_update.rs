//! Per-node entry of an update batch.

use serde::Serialize;

/// Changed fields for one node, addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeUpdate {
  pub id: String,
  /// New value payload (wrapped label markup).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  /// New full style string.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style: Option<String>,
}

impl NodeUpdate {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      ..Self::default()
    }
  }
}
