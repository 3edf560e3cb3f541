//! Tests for live-node discovery.

use super::{discover_live_ids, graph_settings, is_live_node, materialize_live_nodes};
use crate::diagram_xml::{model_root, parse_element};
use crate::test_support::model_xml;
use crate::types::{DiagramElement, TreeNode};
use proptest::prelude::*;

fn root_of(xml: &str) -> DiagramElement {
  model_root(&parse_element(xml).unwrap()).unwrap().clone()
}

#[test]
fn root_cell_is_never_live() {
  let root = root_of(&model_xml("https://base", "5", ""));
  assert!(is_live_node(root.find_by_id("0").unwrap()));
  assert!(discover_live_ids(&root).is_empty());
}

#[test]
fn ids_follow_document_preorder() {
  let cells = r#"
    <object id="a" live.text="/a"><mxCell parent="1"/></object>
    <mxCell id="b" parent="1"/>
    <group id="g" live.style="/g"><object id="c" live.fillColor="/c"><mxCell/></object></group>
    <object id="d" label="plain"><mxCell/></object>
    <object id="e" live.property.strokeColor="/e"><mxCell/></object>
  "#;
  let root = root_of(&model_xml("https://base", "5", cells));
  assert_eq!(discover_live_ids(&root), vec!["a", "g", "c", "e"]);
}

#[test]
fn duplicates_are_kept() {
  let cells = r#"<object id="x" live.text="/1"/><object id="x" live.text="/2"/>"#;
  let root = root_of(&model_xml("", "", cells));
  assert_eq!(discover_live_ids(&root), vec!["x", "x"]);
  let nodes = materialize_live_nodes(&root, &discover_live_ids(&root));
  assert_eq!(nodes.len(), 2);
  assert_eq!(nodes[1].node.attr("live.text"), Some("/1"));
}

#[test]
fn children_of_root_cell_are_still_visited() {
  let root = DiagramElement::new("root").with_child(
    DiagramElement::new("object")
      .with_attr("id", "0")
      .with_attr("live.api", "https://base")
      .with_child(
        DiagramElement::new("object")
          .with_attr("id", "inner")
          .with_attr("live.text", "/x"),
      ),
  );
  assert_eq!(discover_live_ids(&root), vec!["inner"]);
}

#[test]
fn materialize_drops_unresolvable_ids() {
  let root = root_of(&model_xml("", "", r#"<object id="2" live.text="/s"/>"#));
  let ids = vec!["2".to_string(), "gone".to_string()];
  let nodes = materialize_live_nodes(&root, &ids);
  assert_eq!(nodes.len(), 1);
  assert_eq!(nodes[0].id, "2");
  let live: Vec<_> = nodes[0].live_attributes().collect();
  assert_eq!(live, vec![("live.text", "/s")]);
}

#[test]
fn settings_come_from_root_cell() {
  let root = root_of(&model_xml("https://api", "7", ""));
  let s = graph_settings(&root);
  assert_eq!(s.api.as_deref(), Some("https://api"));
  assert_eq!(s.refresh_secs, Some(7));
  assert_eq!(graph_settings(&DiagramElement::new("root")), Default::default());
}

/// Minimal tree for property tests.
#[derive(Debug, Clone)]
struct Node {
  id: String,
  attrs: Vec<(String, String)>,
  children: Vec<Node>,
}

impl TreeNode for Node {
  fn node_id(&self) -> Option<&str> {
    Some(&self.id)
  }
  fn attributes(&self) -> &[(String, String)] {
    &self.attrs
  }
  fn children(&self) -> &[Self] {
    &self.children
  }
}

fn preorder(n: &Node, out: &mut Vec<Node>) {
  out.push(n.clone());
  for c in &n.children {
    preorder(c, out);
  }
}

fn arb_tree() -> impl Strategy<Value = Node> {
  let attr = prop_oneof![
    Just("live.text".to_string()),
    Just("live.fillColor".to_string()),
    Just("label".to_string()),
    Just("style".to_string()),
  ];
  let leaf = ("[0-3]", proptest::collection::vec((attr, "[a-z/]{0,4}"), 0..3)).prop_map(
    |(id, attrs)| Node {
      id,
      attrs,
      children: vec![],
    },
  );
  leaf.prop_recursive(4, 32, 4, |inner| {
    (
      "[0-3]",
      proptest::collection::vec(("live.text|label".prop_map(String::from), "[a-z]{0,3}"), 0..2),
      proptest::collection::vec(inner, 0..4),
    )
      .prop_map(|(id, attrs, children)| Node {
        id,
        attrs,
        children,
      })
  })
}

proptest! {
  #[test]
  fn live_iff_prefixed_attribute_and_not_root(tree in arb_tree()) {
    let mut all = Vec::new();
    preorder(&tree, &mut all);
    let expected: Vec<String> = all
      .iter()
      .filter(|n| n.id != "0" && n.attrs.iter().any(|(k, _)| k.starts_with("live.")))
      .map(|n| n.id.clone())
      .collect();
    let found = discover_live_ids(&tree);
    prop_assert!(!found.iter().any(|id| id == "0"));
    prop_assert_eq!(found, expected);
  }
}
