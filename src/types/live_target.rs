//! Which visual property a `live.*` attribute drives.

/// Reserved attribute-name prefix marking live attributes.
pub const LIVE_PREFIX: &str = "live.";

/// Graph-level attribute holding the base API origin.
pub const API_ATTR: &str = "live.api";

/// Graph-level attribute holding the poll period in seconds.
pub const REFRESH_ATTR: &str = "live.refresh";

/// Returns true if `name` carries the reserved prefix.
pub fn is_live_attribute(name: &str) -> bool {
  name.starts_with(LIVE_PREFIX)
}

/// Target of a live attribute, decoded from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveTarget {
  /// `live.text`: the node label.
  Text,
  /// `live.style`: the whole style string.
  Style,
  /// `live.property.<key>` or `live.<key>`: one style property.
  Property(String),
}

impl LiveTarget {
  /// Decodes an attribute name. Returns `None` for names without the prefix, for the
  /// graph-level settings and for empty property keys.
  pub fn from_attribute(name: &str) -> Option<Self> {
    let rest = name.strip_prefix(LIVE_PREFIX)?;
    match rest {
      "text" => Some(Self::Text),
      "style" => Some(Self::Style),
      "api" | "refresh" => None,
      _ => {
        let key = rest.strip_prefix("property.").unwrap_or(rest);
        if key.is_empty() {
          None
        } else {
          Some(Self::Property(key.to_string()))
        }
      }
    }
  }
}
