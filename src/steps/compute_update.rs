//! Computes the value or style a fetched response produces for one live attribute.

use tracing::instrument;

use crate::diagram_xml::write_element;
use crate::style::set_style;
use crate::types::{DiagramElement, LiveTarget};

/// What to write back for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputedUpdate {
  /// New node value (label payload).
  Value(String),
  /// New full style string.
  Style(String),
}

/// Strips every `"` and trims surrounding whitespace.
pub fn normalize_response(raw: &str) -> String {
  raw.replace('"', "").trim().to_string()
}

/// Wraps label text as `<object label="..."/>`.
pub fn label_payload(text: &str) -> String {
  write_element(&DiagramElement::new("object").with_attr("label", text))
}

/// Derives the update for `target` from a raw response, given the node's current style.
#[instrument(level = "trace")]
pub fn compute_update(current_style: &str, target: &LiveTarget, raw: &str) -> ComputedUpdate {
  let text = normalize_response(raw);
  match target {
    LiveTarget::Text => ComputedUpdate::Value(label_payload(&text)),
    LiveTarget::Style => ComputedUpdate::Style(text),
    LiveTarget::Property(key) => ComputedUpdate::Style(set_style(current_style, key, &text)),
  }
}
