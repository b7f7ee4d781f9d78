/*! Read accessors. All return owned copies; nothing borrows across the lock. */

use super::Desktop;
use crate::config::DesktopConfig;
use crate::types::{DesktopArea, Point, Snapshot, Window, WindowId};

impl Desktop {
  /// All open windows in insertion order (not z-order).
  pub fn windows(&self) -> Vec<Window> {
    self.read(|s| s.windows().to_vec())
  }

  /// A single window by id.
  pub fn window(&self, id: &WindowId) -> Option<Window> {
    self.read(|s| s.window(id).cloned())
  }

  /// Highest z-index ever assigned.
  pub fn highest_z_index(&self) -> u64 {
    self.read(|s| s.highest_z_index())
  }

  /// The non-minimized window at the top of the stack, if any.
  pub fn active_window(&self) -> Option<Window> {
    self.read(|s| s.active_window().cloned())
  }

  /// Whether `id` is the active window.
  pub fn is_active(&self, id: &WindowId) -> bool {
    self.read(|s| s.active_window().is_some_and(|w| &w.id == id))
  }

  /// Windows that should be painted, bottom to top.
  pub fn paint_order(&self) -> Vec<Window> {
    self.read(|s| {
      let mut visible: Vec<Window> = s
        .windows()
        .iter()
        .filter(|w| !w.is_minimized)
        .cloned()
        .collect();
      visible.sort_by_key(|w| w.z_index);
      visible
    })
  }

  /// Topmost painted window under `point`, using painted bounds (a
  /// maximized window covers the whole desktop area).
  pub fn window_at(&self, point: Point) -> Option<Window> {
    self.read(|s| {
      let area = s.desktop_area();
      s.windows()
        .iter()
        .filter(|w| w.render_bounds(&area).is_some_and(|b| b.contains(point)))
        .max_by_key(|w| w.z_index)
        .cloned()
    })
  }

  /// Full state for initial sync.
  pub fn snapshot(&self) -> Snapshot {
    self.read(|s| s.snapshot())
  }

  /// Current configuration (including the live viewport).
  pub fn config(&self) -> DesktopConfig {
    self.read(|s| *s.config())
  }

  /// Area windows may occupy: viewport minus taskbar.
  pub fn desktop_area(&self) -> DesktopArea {
    self.read(|s| s.desktop_area())
  }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
  use crate::core::test_support::descriptor;
  use crate::types::{Point, Size, WindowId};
  use crate::Desktop;

  #[test]
  fn paint_order_skips_minimized_and_sorts_by_z() {
    let desktop = Desktop::new();
    desktop.open_window(descriptor("a", 0.0, 0.0, 600.0, 400.0));
    desktop.open_window(descriptor("b", 0.0, 0.0, 600.0, 400.0));
    desktop.open_window(descriptor("c", 0.0, 0.0, 600.0, 400.0));
    desktop.focus_window(&WindowId::from("a"));
    desktop.minimize_window(&WindowId::from("b"));

    let order: Vec<String> = desktop
      .paint_order()
      .into_iter()
      .map(|w| w.id.into())
      .collect();
    assert_eq!(order, ["c", "a"]);
  }

  #[test]
  fn window_at_picks_topmost_painted_window() {
    let desktop = Desktop::new();
    desktop.open_window(descriptor("a", 100.0, 100.0, 600.0, 400.0));
    desktop.open_window(descriptor("b", 300.0, 200.0, 600.0, 400.0));
    let overlap = Point::new(400.0, 300.0);

    assert_eq!(desktop.window_at(overlap).map(|w| w.id), Some("b".into()));
    assert_eq!(desktop.window_at(Point::new(150.0, 150.0)).map(|w| w.id), Some("a".into()));
    assert!(desktop.window_at(Point::new(1000.0, 50.0)).is_none());

    desktop.minimize_window(&WindowId::from("b"));
    assert_eq!(desktop.window_at(overlap).map(|w| w.id), Some("a".into()));
  }

  #[test]
  fn maximized_window_covers_desktop_area() {
    let desktop = Desktop::new();
    desktop.open_window(descriptor("a", 100.0, 100.0, 600.0, 400.0));
    desktop.maximize_window(&WindowId::from("a"));

    assert!(desktop.window_at(Point::new(1200.0, 700.0)).is_some());
    assert!(desktop.window_at(Point::new(1200.0, 790.0)).is_none(), "taskbar strip");
  }

  #[test]
  fn viewport_updates_are_visible_in_area() {
    let desktop = Desktop::new();
    desktop.set_viewport(Size::new(800.0, 600.0));
    let area = desktop.desktop_area();
    assert_eq!(area.maximized_bounds().h, 570.0);
  }
}
