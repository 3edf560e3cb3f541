//! Tests for `style`.

use crate::style::{Style, set_style};
use proptest::prelude::*;

#[test]
fn set_keeps_unrelated_properties_in_order() {
  assert_eq!(set_style("a=1;b=2;", "b", "9"), "a=1;b=9;");
  assert_eq!(set_style("a=1;b=2;c=3", "a", "0"), "a=0;b=2;c=3;");
}

#[test]
fn set_appends_missing_key() {
  assert_eq!(set_style("a=1;", "b", "2"), "a=1;b=2;");
  assert_eq!(set_style("", "fillColor", "red"), "fillColor=red;");
}

#[test]
fn bare_leading_token_survives() {
  assert_eq!(
    set_style("ellipse;whiteSpace=wrap;fillColor=#fff;", "fillColor", "#f00"),
    "ellipse;whiteSpace=wrap;fillColor=#f00;"
  );
}

#[test]
fn duplicate_keys_collapse_to_first_position() {
  assert_eq!(set_style("a=1;b=2;a=3;", "a", "x"), "a=x;b=2;");
}

#[test]
fn value_may_contain_equals() {
  let s = Style::parse("image=data:a=b;x=1");
  assert_eq!(s.get("image"), Some("data:a=b"));
  assert_eq!(s.get("x"), Some("1"));
  assert_eq!(s.get("y"), None);
}

#[test]
fn empty_style_writes_nothing() {
  assert_eq!(Style::parse(" ;; ").to_string(), "");
}

proptest! {
  #[test]
  fn set_is_idempotent(
    keys in proptest::collection::vec("[a-z]{1,4}", 0..6),
    key in "[a-z]{1,4}",
    value in "[a-zA-Z0-9#]{0,8}",
  ) {
    let style: String = keys.iter().enumerate().map(|(i, k)| format!("{k}={i};")).collect();
    let once = set_style(&style, &key, &value);
    let twice = set_style(&once, &key, &value);
    prop_assert_eq!(&once, &twice);
    let parsed = Style::parse(&once);
    prop_assert_eq!(parsed.get(&key), Some(value.as_str()));
  }

  #[test]
  fn set_preserves_other_keys(
    pairs in proptest::collection::btree_map("[a-z]{1,4}", "[0-9]{1,3}", 1..6),
    value in "[0-9]{1,3}",
  ) {
    let style: String = pairs.iter().map(|(k, v)| format!("{k}={v};")).collect();
    let target = pairs.keys().next().unwrap().clone();
    let updated = Style::parse(&set_style(&style, &target, &value));
    for (k, v) in &pairs {
      if *k != target {
        prop_assert_eq!(updated.get(k), Some(v.as_str()));
      }
    }
  }
}
