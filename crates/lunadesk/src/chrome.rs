/*!
Window chrome: the title bar and its minimize / maximize / close buttons.

The chrome owns no state. It maps button presses onto store operations for
the window it belongs to, and reports what the title bar should look like.
*/

use crate::core::Desktop;
use crate::types::{Point, WindowId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A title-bar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ChromeButton {
  /// Hide to the taskbar.
  Minimize,
  /// Maximize, or restore when already maximized.
  Maximize,
  /// Close the window.
  Close,
}

/// Presentation state for one window's title bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct TitleBar {
  /// Window title.
  pub title: String,
  /// Icon shown left of the title.
  pub icon: String,
  /// Active windows get the bright title gradient, inactive ones the faded one.
  pub active: bool,
  /// The maximize button shows the restore glyph when set.
  pub maximized: bool,
}

impl Desktop {
  /// Handle a title-bar button press for `id`. Returns whether the window existed.
  pub fn press_chrome(&self, id: &WindowId, button: ChromeButton) -> bool {
    match button {
      ChromeButton::Minimize => self.minimize_window(id),
      ChromeButton::Maximize => self.write(|s| {
        let Some(maximized) = s.window(id).map(|w| w.is_maximized) else {
          return false;
        };
        if maximized {
          s.restore_window(id)
        } else {
          s.maximize_window(id)
        }
      }),
      ChromeButton::Close => self.close_window(id).is_some(),
    }
  }

  /// Pointer-down anywhere inside a window. Raises it before the content
  /// sees the click, so clicking into a background window always brings it up.
  pub fn press_body(&self, id: &WindowId) -> bool {
    self.focus_window(id)
  }

  /// Pointer-down at a desktop position: raise whichever window is painted
  /// on top there.
  ///
  /// Returns the window that was hit, or `None` for a press on bare desktop.
  pub fn press_at(&self, pointer: Point) -> Option<WindowId> {
    let hit = self.window_at(pointer)?;
    self.press_body(&hit.id);
    Some(hit.id)
  }

  /// Pointer-down on the title bar: raise, then start a drag unless maximized.
  ///
  /// Returns whether a drag started.
  pub fn title_bar_pointer_down(&self, id: &WindowId, pointer: Point) -> bool {
    self.press_body(id) && self.begin_drag(id, pointer)
  }

  /// Title-bar presentation for `id`.
  pub fn title_bar(&self, id: &WindowId) -> Option<TitleBar> {
    self.read(|s| {
      let top = s.highest_z_index();
      s.window(id).map(|w| TitleBar {
        title: w.title.clone(),
        icon: w.icon.clone(),
        active: w.is_active_at(top),
        maximized: w.is_maximized,
      })
    })
  }
}
