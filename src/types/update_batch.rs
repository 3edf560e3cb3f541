//! The "updates" batch document handed to the host after a tick.

use serde::Serialize;

use super::{DiagramElement, NodeUpdate};
use crate::diagram_xml::write_element;

/// Updates computed in one tick, one entry per node in first-touched order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateBatch {
  pub updates: Vec<NodeUpdate>,
}

impl UpdateBatch {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the entry for `id`, creating it at the end if absent.
  pub fn entry(&mut self, id: &str) -> &mut NodeUpdate {
    let i = match self.updates.iter().position(|u| u.id == id) {
      Some(i) => i,
      None => {
        self.updates.push(NodeUpdate::new(id));
        self.updates.len() - 1
      }
    };
    &mut self.updates[i]
  }

  pub fn get(&self, id: &str) -> Option<&NodeUpdate> {
    self.updates.iter().find(|u| u.id == id)
  }

  pub fn len(&self) -> usize {
    self.updates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.updates.is_empty()
  }

  /// Builds the `<updates>` document; absent fields are omitted.
  pub fn to_element(&self) -> DiagramElement {
    let mut root = DiagramElement::new("updates");
    for u in &self.updates {
      let mut e = DiagramElement::new("update").with_attr("id", u.id.as_str());
      if let Some(v) = &u.value {
        e.set_attr("value", v.as_str());
      }
      if let Some(s) = &u.style {
        e.set_attr("style", s.as_str());
      }
      root.children.push(e);
    }
    root
  }

  pub fn to_xml(&self) -> String {
    write_element(&self.to_element())
  }
}
