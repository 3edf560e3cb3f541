//! Shared fixtures for unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::LiveError;
use crate::fetcher::Fetcher;

/// Canned responses keyed by URL; unknown URLs answer 404. Records every call in order.
#[derive(Default)]
pub(crate) struct MockFetcher {
  responses: Mutex<HashMap<String, Result<String, String>>>,
  calls: Mutex<Vec<String>>,
}

impl MockFetcher {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn respond(self, url: &str, body: &str) -> Self {
    self.set(url, body);
    self
  }

  pub(crate) fn fail(self, url: &str, reason: &str) -> Self {
    self
      .responses
      .lock()
      .unwrap()
      .insert(url.to_string(), Err(reason.to_string()));
    self
  }

  pub(crate) fn set(&self, url: &str, body: &str) {
    self
      .responses
      .lock()
      .unwrap()
      .insert(url.to_string(), Ok(body.to_string()));
  }

  pub(crate) fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }
}

#[async_trait]
impl Fetcher for MockFetcher {
  async fn fetch(&self, url: &str) -> Result<String, LiveError> {
    self.calls.lock().unwrap().push(url.to_string());
    let answer = self.responses.lock().unwrap().get(url).cloned();
    match answer {
      Some(Ok(body)) => Ok(body),
      Some(Err(reason)) => Err(LiveError::Fetch {
        url: url.to_string(),
        reason,
      }),
      None => Err(LiveError::Status {
        url: url.to_string(),
        status: 404,
      }),
    }
  }
}

/// A bare `<mxGraphModel>` with graph settings on cell `0` and the given extra cells.
pub(crate) fn model_xml(api: &str, refresh: &str, cells: &str) -> String {
  format!(
    r#"<mxGraphModel><root><object id="0" live.api="{api}" live.refresh="{refresh}"><mxCell/></object><mxCell id="1" parent="0"/>{cells}</root></mxGraphModel>"#
  )
}

/// One live node `2` whose label comes from `/status`.
pub(crate) fn status_model() -> String {
  model_xml(
    "https://base",
    "5",
    r#"<object id="2" label="?" live.text="/status"><mxCell style="rounded=1;" vertex="1" parent="1"/></object>"#,
  )
}
