//! Data types shared by the resolver, updater and scheduler.

mod diagram_element;
#[cfg(test)]
mod diagram_element_test;
mod diagram_file;
mod graph_settings;
mod live_node;
mod live_status;
mod live_target;
mod node_update;
mod session_snapshot;
mod tick_outcome;
mod update_batch;

pub use diagram_element::{DiagramElement, ROOT_CELL_ID, TreeNode, find_node};
pub use diagram_file::{DiagramFile, DiagramPage};
pub use graph_settings::GraphSettings;
pub use live_node::LiveNode;
pub use live_status::{ACTIVE_COLOR, LiveStatus, PAUSED_COLOR, SchedulerState};
pub use live_target::{API_ATTR, LIVE_PREFIX, LiveTarget, REFRESH_ATTR, is_live_attribute};
pub use node_update::NodeUpdate;
pub use session_snapshot::SessionSnapshot;
pub use tick_outcome::TickOutcome;
pub use update_batch::UpdateBatch;
