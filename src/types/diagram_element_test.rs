//! Tests for `DiagramElement`.

use super::DiagramElement;
use super::diagram_element::find_node;

fn wrapped() -> DiagramElement {
  DiagramElement::new("object")
    .with_attr("id", "2")
    .with_attr("label", "Pump")
    .with_child(DiagramElement::new("mxCell").with_attr("style", "ellipse;fillColor=red;"))
}

#[test]
fn set_attr_overwrites_in_place() {
  let mut e = DiagramElement::new("mxCell")
    .with_attr("id", "5")
    .with_attr("style", "a=1;");
  e.set_attr("style", "b=2;");
  e.set_attr("vertex", "1");
  assert_eq!(
    e.attributes,
    vec![
      ("id".to_string(), "5".to_string()),
      ("style".to_string(), "b=2;".to_string()),
      ("vertex".to_string(), "1".to_string()),
    ]
  );
}

#[test]
fn presentation_of_wrapper_is_inner_cell() {
  let e = wrapped();
  assert!(e.is_wrapper());
  assert_eq!(e.presentation().tag, "mxCell");
  assert_eq!(e.style(), "ellipse;fillColor=red;");
}

#[test]
fn presentation_of_plain_cell_is_itself() {
  let e = DiagramElement::new("mxCell").with_attr("style", "rounded=1;");
  assert_eq!(e.style(), "rounded=1;");
  let bare = DiagramElement::new("mxCell");
  assert_eq!(bare.style(), "");
}

#[test]
fn presentation_mut_writes_inner_cell() {
  let mut e = wrapped();
  e.presentation_mut().set_attr("style", "x=1;");
  assert_eq!(e.children[0].attr("style"), Some("x=1;"));
  assert_eq!(e.attr("style"), None);
}

#[test]
fn find_by_id_is_preorder() {
  let root = DiagramElement::new("root")
    .with_child(DiagramElement::new("mxCell").with_attr("id", "0"))
    .with_child(
      DiagramElement::new("group")
        .with_attr("id", "a")
        .with_child(DiagramElement::new("mxCell").with_attr("id", "dup").with_attr("n", "first")),
    )
    .with_child(DiagramElement::new("mxCell").with_attr("id", "dup").with_attr("n", "second"));
  assert_eq!(root.find_by_id("dup").and_then(|e| e.attr("n")), Some("first"));
  assert!(find_node(&root, "missing").is_none());
}

#[test]
fn find_by_id_mut_reaches_nested() {
  let mut root = DiagramElement::new("root").with_child(wrapped());
  root.find_by_id_mut("2").unwrap().set_attr("label", "Valve");
  assert_eq!(root.children[0].attr("label"), Some("Valve"));
}
