/*! Taskbar: one button per open window, reflecting store state. */

use crate::core::Desktop;
use crate::types::WindowId;
use serde::Serialize;
use ts_rs::TS;

/// One taskbar button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct TaskbarItem {
  /// Window this button belongs to.
  pub id: WindowId,
  /// Button caption.
  pub title: String,
  /// Button icon.
  pub icon: String,
  /// Drawn pressed in.
  pub active: bool,
  /// The window is hidden; clicking restores it.
  pub minimized: bool,
}

/// What a taskbar click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarClick {
  /// The window was minimized and got restored.
  Restored,
  /// The window was already active and got minimized.
  Minimized,
  /// The window was in the background and got focused.
  Focused,
}

impl Desktop {
  /// Taskbar buttons in window insertion order (not z-order).
  pub fn taskbar_items(&self) -> Vec<TaskbarItem> {
    self.read(|s| {
      let top = s.highest_z_index();
      s.windows()
        .iter()
        .map(|w| TaskbarItem {
          id: w.id.clone(),
          title: w.title.clone(),
          icon: w.icon.clone(),
          active: w.is_active_at(top),
          minimized: w.is_minimized,
        })
        .collect()
    })
  }

  /// Click on a taskbar button: restore if minimized, minimize if it is the
  /// active window, focus otherwise. `None` for an unknown id.
  pub fn click_taskbar_item(&self, id: &WindowId) -> Option<TaskbarClick> {
    self.write(|s| {
      let top = s.highest_z_index();
      let window = s.window(id)?;
      let (minimized, active) = (window.is_minimized, window.is_active_at(top));

      let click = if minimized {
        s.restore_window(id);
        TaskbarClick::Restored
      } else if active {
        s.minimize_window(id);
        TaskbarClick::Minimized
      } else {
        s.focus_window(id);
        TaskbarClick::Focused
      };
      Some(click)
    })
  }
}
