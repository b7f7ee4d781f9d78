/*! Window type representing an open desktop window. */

use super::{AppKind, Bounds, DesktopArea, WindowId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An open desktop window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Window {
  pub id: WindowId,
  pub title: String,
  /// Asset path or inline glyph. Not interpreted.
  pub icon: String,
  #[ts(type = "string")]
  pub component: AppKind,
  /// Non-maximized geometry. Kept while maximized or minimized.
  pub bounds: Bounds,
  pub min_width: f64,
  pub min_height: f64,
  pub is_minimized: bool,
  pub is_maximized: bool,
  /// Stacking order: higher paints on top.
  #[ts(type = "number")]
  pub z_index: u64,
}

impl Window {
  /// Whether this window is the active one given the current counter.
  ///
  /// Minimized windows are never active, whatever their z-index.
  pub const fn is_active_at(&self, highest_z_index: u64) -> bool {
    !self.is_minimized && self.z_index == highest_z_index
  }

  /// Where the window should be painted, or `None` if it is not painted.
  pub fn render_bounds(&self, area: &DesktopArea) -> Option<Bounds> {
    if self.is_minimized {
      None
    } else if self.is_maximized {
      Some(area.maximized_bounds())
    } else {
      Some(self.bounds)
    }
  }

  /// Whether a pointer gesture may move or resize this window.
  pub(crate) const fn accepts_gestures(&self) -> bool {
    !self.is_minimized && !self.is_maximized
  }
}

/// Request to open a window. The z-index is always assigned by the desktop,
/// and a freshly opened window is never minimized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowDescriptor {
  pub id: WindowId,
  pub title: String,
  pub icon: String,
  #[ts(type = "string")]
  pub component: AppKind,
  pub bounds: Bounds,
  pub min_width: f64,
  pub min_height: f64,
  #[serde(default)]
  pub is_maximized: bool,
}

impl WindowDescriptor {
  pub(crate) fn into_window(self, z_index: u64) -> Window {
    Window {
      id: self.id,
      title: self.title,
      icon: self.icon,
      component: self.component,
      bounds: self.bounds,
      min_width: self.min_width,
      min_height: self.min_height,
      is_minimized: false,
      is_maximized: self.is_maximized,
      z_index,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Size;

  fn window() -> Window {
    WindowDescriptor {
      id: "notepad".into(),
      title: "Notepad".into(),
      icon: "/img/Notepad.png".into(),
      component: AppKind::Notepad,
      bounds: Bounds::new(120.0, 80.0, 500.0, 400.0),
      min_width: 300.0,
      min_height: 200.0,
      is_maximized: false,
    }
    .into_window(2)
  }

  const AREA: DesktopArea = DesktopArea {
    viewport: Size::new(1280.0, 800.0),
    taskbar_height: 30.0,
  };

  #[test]
  fn render_bounds_follow_state() {
    let mut win = window();
    assert_eq!(win.render_bounds(&AREA), Some(win.bounds));

    win.is_maximized = true;
    assert_eq!(
      win.render_bounds(&AREA),
      Some(Bounds::new(0.0, 0.0, 1280.0, 770.0))
    );

    win.is_minimized = true;
    assert_eq!(win.render_bounds(&AREA), None);
  }

  #[test]
  fn minimized_window_is_never_active() {
    let mut win = window();
    assert!(win.is_active_at(2));
    win.is_minimized = true;
    assert!(!win.is_active_at(2));
  }

  #[test]
  fn descriptor_deserializes_without_maximized_flag() {
    let json = r#"{
      "id": "ai",
      "title": "AI",
      "icon": "/img/System Information.png",
      "component": "ai",
      "bounds": { "x": 150.0, "y": 90.0, "w": 700.0, "h": 500.0 },
      "min_width": 500.0,
      "min_height": 350.0
    }"#;
    let descriptor: WindowDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(descriptor.component, AppKind::Ai);
    assert!(!descriptor.is_maximized);
  }
}
