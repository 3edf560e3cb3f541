//! Reads and writes the diagram XML format.
//!
//! Accepts an `<mxfile>` with `<diagram>` pages or a bare `<mxGraphModel>`. Only element
//! structure and attributes are kept; text content is dropped, which is also how compressed
//! pages are detected (a `<diagram>` with no `<mxGraphModel>` child).

use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use tracing::instrument;

use crate::error::{LiveError, xml_error};
use crate::types::{DiagramElement, DiagramFile, DiagramPage};

/// Id given to the page of a bare `<mxGraphModel>` document.
pub const SINGLE_PAGE_ID: &str = "page-1";

/// Parses an XML document into its root element.
#[instrument(level = "trace", skip(xml))]
pub fn parse_element(xml: &str) -> Result<DiagramElement, LiveError> {
  let mut reader = Reader::from_str(xml);
  let mut stack: Vec<DiagramElement> = Vec::new();
  let mut root: Option<DiagramElement> = None;

  loop {
    let decoder = reader.decoder();
    match reader.read_event().map_err(xml_error)? {
      Event::Start(e) => stack.push(element_from(&e, decoder)?),
      Event::Empty(e) => {
        let element = element_from(&e, decoder)?;
        attach(&mut stack, &mut root, element)?;
      }
      Event::End(_) => {
        let element = stack
          .pop()
          .ok_or_else(|| LiveError::Xml("unbalanced closing tag".to_string()))?;
        attach(&mut stack, &mut root, element)?;
      }
      Event::Eof => break,
      _ => {}
    }
  }

  if let Some(open) = stack.last() {
    return Err(LiveError::Xml(format!("unclosed element <{}>", open.tag)));
  }
  root.ok_or_else(|| LiveError::Xml("document has no root element".to_string()))
}

/// Builds an element (tag plus unescaped attributes) from a start tag.
fn element_from(start: &BytesStart<'_>, decoder: Decoder) -> Result<DiagramElement, LiveError> {
  let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
  let mut attributes = Vec::new();
  for attr in start.attributes() {
    let attr = attr.map_err(xml_error)?;
    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
    let value = attr
      .decode_and_unescape_value(decoder)
      .map_err(xml_error)?
      .into_owned();
    attributes.push((key, value));
  }
  Ok(DiagramElement {
    tag,
    attributes,
    children: Vec::new(),
  })
}

/// Appends a finished element to its parent, or makes it the document root.
fn attach(
  stack: &mut [DiagramElement],
  root: &mut Option<DiagramElement>,
  element: DiagramElement,
) -> Result<(), LiveError> {
  if let Some(parent) = stack.last_mut() {
    parent.children.push(element);
    return Ok(());
  }
  if root.is_some() {
    return Err(LiveError::Xml("more than one root element".to_string()));
  }
  *root = Some(element);
  Ok(())
}

/// Serializes an element tree; childless elements are self-closing.
pub fn write_element(element: &DiagramElement) -> String {
  let mut out = String::new();
  write_into(element, &mut out);
  out
}

fn write_into(element: &DiagramElement, out: &mut String) {
  out.push('<');
  out.push_str(&element.tag);
  for (k, v) in &element.attributes {
    out.push(' ');
    out.push_str(k);
    out.push_str("=\"");
    out.push_str(&escape(v.as_str()));
    out.push('"');
  }
  if element.children.is_empty() {
    out.push_str("/>");
    return;
  }
  out.push('>');
  for child in &element.children {
    write_into(child, out);
  }
  out.push_str("</");
  out.push_str(&element.tag);
  out.push('>');
}

/// Parses a diagram file into its pages.
#[instrument(level = "trace", skip(xml))]
pub fn parse_file(xml: &str) -> Result<DiagramFile, LiveError> {
  let root = parse_element(xml)?;
  match root.tag.as_str() {
    "mxfile" => {
      let mut pages = Vec::new();
      for (i, diagram) in root
        .children
        .into_iter()
        .filter(|c| c.tag == "diagram")
        .enumerate()
      {
        let id = diagram
          .id()
          .map(str::to_string)
          .unwrap_or_else(|| format!("page-{}", i + 1));
        let name = diagram.attr("name").map(str::to_string);
        let model = diagram
          .children
          .into_iter()
          .find(|c| c.tag == "mxGraphModel")
          .ok_or_else(|| LiveError::CompressedPage(id.clone()))?;
        pages.push(DiagramPage { id, name, model });
      }
      Ok(DiagramFile { pages })
    }
    "mxGraphModel" => Ok(DiagramFile {
      pages: vec![DiagramPage {
        id: SINGLE_PAGE_ID.to_string(),
        name: None,
        model: root,
      }],
    }),
    other => Err(LiveError::UnexpectedRoot(other.to_string())),
  }
}

/// The `<root>` element of a model, whose children are the cells.
pub fn model_root(model: &DiagramElement) -> Result<&DiagramElement, LiveError> {
  if model.tag == "root" {
    return Ok(model);
  }
  model
    .children
    .iter()
    .find(|c| c.tag == "root")
    .ok_or(LiveError::MissingModelRoot)
}
