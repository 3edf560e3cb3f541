//! Element tree parsed from diagram XML.

/// Id of the singular root cell; it carries graph-level settings and is never live.
pub const ROOT_CELL_ID: &str = "0";

/// Tag names of user-object wrappers that hold custom attributes around an `mxCell`.
const WRAPPER_TAGS: [&str; 2] = ["object", "UserObject"];

/// Anything shaped like `{id, attributes, children}` that the resolver can walk.
pub trait TreeNode: Sized {
  fn node_id(&self) -> Option<&str>;
  fn attributes(&self) -> &[(String, String)];
  fn children(&self) -> &[Self];
}

/// Finds the first node with `id` in document pre-order.
pub fn find_node<'a, T: TreeNode>(root: &'a T, id: &str) -> Option<&'a T> {
  if root.node_id() == Some(id) {
    return Some(root);
  }
  root.children().iter().find_map(|c| find_node(c, id))
}

/// One XML element: tag, attributes in document order, child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramElement {
  pub tag: String,
  pub attributes: Vec<(String, String)>,
  pub children: Vec<DiagramElement>,
}

impl DiagramElement {
  pub fn new(tag: impl Into<String>) -> Self {
    Self {
      tag: tag.into(),
      ..Self::default()
    }
  }

  /// Builder-style attribute setter.
  pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.set_attr(name, value);
    self
  }

  /// Builder-style child append.
  pub fn with_child(mut self, child: DiagramElement) -> Self {
    self.children.push(child);
    self
  }

  pub fn attr(&self, name: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|(k, _)| k == name)
      .map(|(_, v)| v.as_str())
  }

  /// Overwrites an attribute in place, or appends it when absent.
  pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
    let name = name.into();
    let value = value.into();
    match self.attributes.iter_mut().find(|(k, _)| *k == name) {
      Some(slot) => slot.1 = value,
      None => self.attributes.push((name, value)),
    }
  }

  pub fn id(&self) -> Option<&str> {
    self.attr("id")
  }

  pub fn find_by_id(&self, id: &str) -> Option<&DiagramElement> {
    find_node(self, id)
  }

  pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut DiagramElement> {
    if self.id() == Some(id) {
      return Some(self);
    }
    self
      .children
      .iter_mut()
      .find_map(|c| c.find_by_id_mut(id))
  }

  /// True for `<object>` / `<UserObject>` wrappers.
  pub fn is_wrapper(&self) -> bool {
    WRAPPER_TAGS.contains(&self.tag.as_str())
  }

  /// The element holding `style`: the inner `mxCell` of a wrapper, otherwise the element itself.
  pub fn presentation(&self) -> &DiagramElement {
    if self.is_wrapper() {
      if let Some(cell) = self.children.iter().find(|c| c.tag == "mxCell") {
        return cell;
      }
    }
    self
  }

  pub fn presentation_mut(&mut self) -> &mut DiagramElement {
    if self.is_wrapper() {
      if let Some(i) = self.children.iter().position(|c| c.tag == "mxCell") {
        return &mut self.children[i];
      }
    }
    self
  }

  /// Style string of the presentation element (empty when unset).
  pub fn style(&self) -> &str {
    self.presentation().attr("style").unwrap_or("")
  }
}

impl TreeNode for DiagramElement {
  fn node_id(&self) -> Option<&str> {
    self.id()
  }

  fn attributes(&self) -> &[(String, String)] {
    &self.attributes
  }

  fn children(&self) -> &[Self] {
    &self.children
  }
}
