//! The host editor as seen by the scheduler, plus an in-memory implementation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::diagram_xml::{parse_element, write_element};
use crate::error::LiveError;
use crate::types::{DiagramFile, LiveStatus, UpdateBatch};

/// What the scheduler needs from the diagram editor.
pub trait DiagramHost: Send + Sync {
  /// Id of the page currently displayed, if any.
  fn current_page_id(&self) -> Option<String>;
  /// Serialized `<mxGraphModel>` of the displayed page.
  fn current_xml(&self) -> Result<String, LiveError>;
  /// Patches the displayed diagram with a committed batch.
  fn apply_updates(&self, batch: &UpdateBatch);
  /// Recolours the status strip.
  fn set_status(&self, status: LiveStatus);
}

impl<T: DiagramHost + ?Sized> DiagramHost for Arc<T> {
  fn current_page_id(&self) -> Option<String> {
    (**self).current_page_id()
  }

  fn current_xml(&self) -> Result<String, LiveError> {
    (**self).current_xml()
  }

  fn apply_updates(&self, batch: &UpdateBatch) {
    (**self).apply_updates(batch)
  }

  fn set_status(&self, status: LiveStatus) {
    (**self).set_status(status)
  }
}

#[derive(Debug)]
struct MemoryHostState {
  file: DiagramFile,
  current: usize,
  status: Option<LiveStatus>,
  committed: Vec<UpdateBatch>,
}

/// Host backed by a parsed diagram file held in memory.
///
/// Committed batches are patched into the model, so the next `current_xml` reflects them.
#[derive(Debug)]
pub struct MemoryHost {
  state: Mutex<MemoryHostState>,
}

impl MemoryHost {
  /// Displays the first page. Fails if the file has no pages.
  pub fn new(file: DiagramFile) -> Result<Self, LiveError> {
    Self::with_page(file, 0)
  }

  pub fn with_page(file: DiagramFile, index: usize) -> Result<Self, LiveError> {
    if index >= file.pages.len() {
      return Err(LiveError::MissingPage(index.to_string()));
    }
    Ok(Self {
      state: Mutex::new(MemoryHostState {
        file,
        current: index,
        status: None,
        committed: Vec::new(),
      }),
    })
  }

  fn lock(&self) -> MutexGuard<'_, MemoryHostState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Navigates to another page.
  pub fn select_page(&self, index: usize) -> Result<(), LiveError> {
    let mut state = self.lock();
    if index >= state.file.pages.len() {
      return Err(LiveError::MissingPage(index.to_string()));
    }
    state.current = index;
    Ok(())
  }

  pub fn status(&self) -> Option<LiveStatus> {
    self.lock().status
  }

  /// Every batch applied so far, oldest first.
  pub fn committed(&self) -> Vec<UpdateBatch> {
    self.lock().committed.clone()
  }

  /// Snapshot of the file including applied patches.
  pub fn file(&self) -> DiagramFile {
    self.lock().file.clone()
  }
}

impl DiagramHost for MemoryHost {
  fn current_page_id(&self) -> Option<String> {
    let state = self.lock();
    state.file.pages.get(state.current).map(|p| p.id.clone())
  }

  fn current_xml(&self) -> Result<String, LiveError> {
    let state = self.lock();
    let page = state
      .file
      .pages
      .get(state.current)
      .ok_or_else(|| LiveError::MissingPage(state.current.to_string()))?;
    Ok(write_element(&page.model))
  }

  fn apply_updates(&self, batch: &UpdateBatch) {
    let mut state = self.lock();
    let current = state.current;
    if let Some(page) = state.file.pages.get_mut(current) {
      for update in &batch.updates {
        let Some(target) = page.model.find_by_id_mut(&update.id) else {
          debug!(node_id = %update.id, "update for unknown node");
          continue;
        };
        if let Some(value) = &update.value {
          let label = parse_element(value)
            .ok()
            .and_then(|obj| obj.attr("label").map(str::to_string))
            .unwrap_or_else(|| value.clone());
          if target.is_wrapper() {
            target.set_attr("label", label);
          } else {
            target.set_attr("value", label);
          }
        }
        if let Some(style) = &update.style {
          target.presentation_mut().set_attr("style", style.as_str());
        }
      }
    }
    state.committed.push(batch.clone());
  }

  fn set_status(&self, status: LiveStatus) {
    info!(status = ?status, color = status.color(), "live status");
    self.lock().status = Some(status);
  }
}
