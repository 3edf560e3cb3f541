//! Error type shared by the codec, fetcher and scheduler.

use thiserror::Error;

/// Errors raised while reading diagrams, fetching live values or driving the bridge.
#[derive(Debug, Error)]
pub enum LiveError {
  /// The diagram XML could not be parsed.
  #[error("invalid diagram XML: {0}")]
  Xml(String),
  /// The document root is neither `<mxfile>` nor `<mxGraphModel>`.
  #[error("unexpected root element <{0}>")]
  UnexpectedRoot(String),
  /// A page holds compressed content instead of an `<mxGraphModel>` element.
  #[error("page {0} is compressed; save the diagram uncompressed")]
  CompressedPage(String),
  /// The model has no `<root>` element holding the cells.
  #[error("diagram model has no <root> element")]
  MissingModelRoot,
  /// A page index or id does not exist.
  #[error("diagram has no page {0}")]
  MissingPage(String),
  /// The request could not be sent or its body could not be read.
  #[error("request to {url} failed: {reason}")]
  Fetch { url: String, reason: String },
  /// The endpoint answered with a non-success status.
  #[error("request to {url} returned HTTP {status}")]
  Status { url: String, status: u16 },
  /// The HTTP client could not be built.
  #[error("failed to build HTTP client: {0}")]
  Client(String),
  /// A config file could not be read or decoded.
  #[error("invalid config {path}: {reason}")]
  Config { path: String, reason: String },
  /// An action name the bridge does not know.
  #[error("unknown live action: {0}")]
  UnknownAction(String),
}

/// Wraps any displayable codec error as [LiveError::Xml].
pub(crate) fn xml_error(e: impl std::fmt::Display) -> LiveError {
  LiveError::Xml(e.to_string())
}
