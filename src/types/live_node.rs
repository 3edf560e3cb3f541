//! A live node captured at discovery time.

use super::DiagramElement;
use super::live_target::is_live_attribute;

/// `{id, nodeSnapshot}`: the element as it looked when the session discovered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveNode {
  pub id: String,
  pub node: DiagramElement,
}

impl LiveNode {
  /// Reserved-prefix attributes `(name, uri)` in document order.
  pub fn live_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .node
      .attributes
      .iter()
      .filter(|(k, _)| is_live_attribute(k))
      .map(|(k, v)| (k.as_str(), v.as_str()))
  }
}
