/*! Event types for state changes and synchronization. */

use super::{Window, WindowId};
use serde::Serialize;
use ts_rs::TS;

/// Full desktop state, sent to a renderer when it first attaches.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Snapshot {
  /// Open windows in insertion order (not z-order).
  pub windows: Vec<Window>,
  #[ts(type = "number")]
  pub highest_z_index: u64,
  pub active_window: Option<WindowId>,
}

/// Events emitted when state changes.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "event", content = "data")]
#[ts(export)]
pub enum Event {
  #[serde(rename = "window:opened")]
  WindowOpened { window: Window },
  /// Any committed change to an existing window: geometry, flags or z-index.
  #[serde(rename = "window:changed")]
  WindowChanged { window: Window },
  #[serde(rename = "window:closed")]
  WindowClosed { window_id: WindowId },

  /// The active window changed. `None` when no window is active.
  #[serde(rename = "focus:changed")]
  FocusChanged { window_id: Option<WindowId> },
}
