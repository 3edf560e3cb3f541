//! Pages of a diagram file.

use super::DiagramElement;

/// One page (`<diagram>`) of a file, holding its uncompressed `<mxGraphModel>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramPage {
  pub id: String,
  pub name: Option<String>,
  pub model: DiagramElement,
}

/// A parsed diagram file with its pages in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramFile {
  pub pages: Vec<DiagramPage>,
}

impl DiagramFile {
  pub fn page(&self, id: &str) -> Option<&DiagramPage> {
    self.pages.iter().find(|p| p.id == id)
  }
}
