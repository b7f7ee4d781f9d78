/*!
Window store operations.

Every operation is total over the id space: an unknown id is a no-op that
returns `false` (or `None`) and leaves the stacking counter untouched.
*/

use super::{Desktop, OpenOutcome};
use crate::types::{Window, WindowDescriptor, WindowId};

impl Desktop {
  /// Open a window.
  ///
  /// If a window with the same id is already open, it is focused (and
  /// restored if minimized) instead, and the descriptor is discarded.
  pub fn open_window(&self, descriptor: WindowDescriptor) -> OpenOutcome {
    self.write(|s| s.open_window(descriptor))
  }

  /// Close a window, returning it. Its z-index is never handed out again.
  pub fn close_window(&self, id: &WindowId) -> Option<Window> {
    self.write(|s| s.close_window(id))
  }

  /// Hide a window. Geometry, maximized flag and z-index are kept.
  pub fn minimize_window(&self, id: &WindowId) -> bool {
    self.write(|s| s.minimize_window(id))
  }

  /// Fill the desktop area. The stored geometry is kept for restore.
  pub fn maximize_window(&self, id: &WindowId) -> bool {
    self.write(|s| s.maximize_window(id))
  }

  /// Un-maximize and un-minimize, bringing the window to front.
  pub fn restore_window(&self, id: &WindowId) -> bool {
    self.write(|s| s.restore_window(id))
  }

  /// Bring a window to front.
  pub fn focus_window(&self, id: &WindowId) -> bool {
    self.write(|s| s.focus_window(id))
  }

  /// Move a window. Negative coordinates are clamped to zero.
  pub fn update_window_position(&self, id: &WindowId, x: f64, y: f64) -> bool {
    self.write(|s| s.update_window_position(id, x, y))
  }

  /// Resize a window. Each dimension is clamped to the window's minimum.
  pub fn update_window_size(&self, id: &WindowId, width: f64, height: f64) -> bool {
    self.write(|s| s.update_window_size(id, width, height))
  }
}
