/*! Geometry types for desktop coordinates. Origin is the top-left of the viewport. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Rectangle bounds in desktop coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Bounds {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

impl Bounds {
  pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
    Self { x, y, w, h }
  }

  /// Top-left corner.
  pub const fn origin(&self) -> Point {
    Point::new(self.x, self.y)
  }

  /// Bottom-right corner.
  pub fn far_corner(&self) -> Point {
    Point::new(self.x + self.w, self.y + self.h)
  }

  /// Hit test. Edges count as inside, so a press on the window border lands
  /// on the window.
  pub fn contains(&self, point: Point) -> bool {
    point.x >= self.x
      && point.x <= self.x + self.w
      && point.y >= self.y
      && point.y <= self.y + self.h
  }
}

/// A 2D point in desktop coordinates (pointer positions, icon positions).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Vector from `origin` to this point, as `(dx, dy)`.
  pub fn delta_from(&self, origin: Point) -> (f64, f64) {
    (self.x - origin.x, self.y - origin.y)
  }

  /// Same point with both coordinates floored at zero.
  pub fn clamp_non_negative(self) -> Self {
    Self::new(self.x.max(0.0), self.y.max(0.0))
  }
}

/// Width/height pair, used for the viewport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Size {
  pub w: f64,
  pub h: f64,
}

impl Size {
  pub const fn new(w: f64, h: f64) -> Self {
    Self { w, h }
  }
}

/// Region available to windows: the viewport minus the taskbar strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopArea {
  pub viewport: Size,
  pub taskbar_height: f64,
}

impl DesktopArea {
  /// Bounds a maximized window fills.
  pub fn maximized_bounds(&self) -> Bounds {
    Bounds::new(
      0.0,
      0.0,
      self.viewport.w,
      (self.viewport.h - self.taskbar_height).max(0.0),
    )
  }
}
