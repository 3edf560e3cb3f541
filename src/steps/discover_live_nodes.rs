//! Finds live nodes in a diagram tree.

use tracing::{debug, instrument};

use crate::types::{
  DiagramElement, GraphSettings, LiveNode, ROOT_CELL_ID, TreeNode, is_live_attribute,
};

/// True if any attribute name carries the reserved prefix.
pub fn is_live_node<T: TreeNode>(node: &T) -> bool {
  node.attributes().iter().any(|(k, _)| is_live_attribute(k))
}

/// Ids of live nodes in document pre-order. The root cell (`"0"`) is never reported but its
/// children are still visited. Elements without an id cannot be addressed and are skipped.
#[instrument(level = "trace", skip(root))]
pub fn discover_live_ids<T: TreeNode>(root: &T) -> Vec<String> {
  let mut ids = Vec::new();
  walk(root, &mut ids);
  ids
}

fn walk<T: TreeNode>(node: &T, ids: &mut Vec<String>) {
  if let Some(id) = node.node_id() {
    if id != ROOT_CELL_ID && is_live_node(node) {
      ids.push(id.to_string());
    }
  }
  for child in node.children() {
    walk(child, ids);
  }
}

/// Resolves each id back to its element, dropping ids that no longer resolve.
#[instrument(level = "trace", skip(root, ids))]
pub fn materialize_live_nodes(root: &DiagramElement, ids: &[String]) -> Vec<LiveNode> {
  ids
    .iter()
    .filter_map(|id| match root.find_by_id(id) {
      Some(node) => Some(LiveNode {
        id: id.clone(),
        node: node.clone(),
      }),
      None => {
        debug!(node_id = %id, "live node no longer resolves");
        None
      }
    })
    .collect()
}

/// Reads `live.api` / `live.refresh` from the root cell; defaults when it is absent.
pub fn graph_settings(root: &DiagramElement) -> GraphSettings {
  root
    .find_by_id(ROOT_CELL_ID)
    .map(GraphSettings::from_element)
    .unwrap_or_default()
}
