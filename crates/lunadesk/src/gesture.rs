/*!
Pointer gestures: turning raw pointer movement into window geometry.

A gesture runs from pointer-down to pointer-up and targets exactly one window.
Only one gesture exists at a time; the desktop holds it as a single
`Option<Gesture>`, so `Idle`, `Dragging` and `Resizing` are mutually exclusive
by construction.

This module is pure math. Wiring into the window store lives in
`core/gestures.rs`.
*/

use crate::config::DesktopConfig;
use crate::types::{Bounds, Point, Size, WindowId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Edge or corner hit zone a resize starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ResizeHandle {
  /// Top edge.
  N,
  /// Bottom edge.
  S,
  /// Right edge.
  E,
  /// Left edge.
  W,
  /// Top-right corner.
  NE,
  /// Top-left corner.
  NW,
  /// Bottom-right corner.
  SE,
  /// Bottom-left corner.
  SW,
}

impl ResizeHandle {
  /// All eight hit zones.
  pub const ALL: [ResizeHandle; 8] = [
    ResizeHandle::N,
    ResizeHandle::S,
    ResizeHandle::E,
    ResizeHandle::W,
    ResizeHandle::NE,
    ResizeHandle::NW,
    ResizeHandle::SE,
    ResizeHandle::SW,
  ];

  /// Moves the top edge.
  pub const fn north(self) -> bool {
    matches!(self, Self::N | Self::NE | Self::NW)
  }

  /// Moves the bottom edge.
  pub const fn south(self) -> bool {
    matches!(self, Self::S | Self::SE | Self::SW)
  }

  /// Moves the right edge.
  pub const fn east(self) -> bool {
    matches!(self, Self::E | Self::NE | Self::SE)
  }

  /// Moves the left edge.
  pub const fn west(self) -> bool {
    matches!(self, Self::W | Self::NW | Self::SW)
  }

  /// Whether resizing from this handle also moves the window origin.
  pub const fn moves_origin(self) -> bool {
    self.north() || self.west()
  }
}

/// What the active gesture is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
  /// Title-bar drag.
  Drag {
    /// Pointer position relative to the window origin.
    offset: Point,
  },
  /// Edge/corner resize, anchored at what was captured on pointer-down.
  Resize {
    /// Hit zone the resize started from.
    handle: ResizeHandle,
    /// Pointer position at pointer-down.
    start_pointer: Point,
    /// Window bounds at pointer-down.
    start_bounds: Bounds,
  },
}

/// The single in-flight pointer gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
  /// Window being dragged or resized.
  pub window_id: WindowId,
  /// What the gesture does with pointer movement.
  pub kind: GestureKind,
}

impl Gesture {
  pub(crate) fn drag(window_id: WindowId, bounds: Bounds, pointer: Point) -> Self {
    let (dx, dy) = pointer.delta_from(bounds.origin());
    Self {
      window_id,
      kind: GestureKind::Drag {
        offset: Point::new(dx, dy),
      },
    }
  }

  pub(crate) fn resize(
    window_id: WindowId,
    handle: ResizeHandle,
    bounds: Bounds,
    pointer: Point,
  ) -> Self {
    Self {
      window_id,
      kind: GestureKind::Resize {
        handle,
        start_pointer: pointer,
        start_bounds: bounds,
      },
    }
  }

  /// Whether this is a title-bar drag.
  pub const fn is_drag(&self) -> bool {
    matches!(self.kind, GestureKind::Drag { .. })
  }

  /// Whether this is an edge/corner resize.
  pub const fn is_resize(&self) -> bool {
    matches!(self.kind, GestureKind::Resize { .. })
  }
}

/// Viewport limits applied while dragging.
///
/// The clamp uses a fixed nominal window size rather than the live one, which
/// keeps at least the left part of the title bar on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLimits {
  /// Live browser viewport.
  pub viewport: Size,
  /// Width kept on screen at the right edge.
  pub nominal_width: f64,
  /// Height kept on screen above the taskbar.
  pub nominal_height: f64,
  /// Taskbar strip along the bottom.
  pub taskbar_height: f64,
}

impl DragLimits {
  /// Limits for the current configuration.
  pub const fn from_config(config: &DesktopConfig) -> Self {
    Self {
      viewport: config.viewport,
      nominal_width: config.drag_nominal_width,
      nominal_height: config.drag_nominal_height,
      taskbar_height: config.taskbar_height,
    }
  }

  /// Largest allowed origin.
  pub fn max_origin(&self) -> Point {
    Point::new(
      self.viewport.w - self.nominal_width,
      self.viewport.h - self.nominal_height - self.taskbar_height,
    )
  }

  /// Clamp an origin into `[0, max]` on each axis. When the viewport is too
  /// small for the range to exist, zero wins.
  pub fn clamp(&self, origin: Point) -> Point {
    let max = self.max_origin();
    Point::new(origin.x.min(max.x).max(0.0), origin.y.min(max.y).max(0.0))
  }
}

/// New window origin for a drag.
pub fn drag_origin(offset: Point, pointer: Point, limits: &DragLimits) -> Point {
  limits.clamp(Point::new(pointer.x - offset.x, pointer.y - offset.y))
}

/// Geometry produced by one resize step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeStep {
  /// New width, already floored.
  pub width: f64,
  /// New height, already floored.
  pub height: f64,
  /// New origin, present only when the handle moves the top or left edge.
  pub origin: Option<Point>,
}

/// Compute the geometry for a resize from `handle`.
///
/// East/south edges grow with positive pointer delta, west/north with
/// negative. When the top or left edge moves, the origin is shifted so the
/// opposite edge stays where it was when the gesture started. That edge may
/// not be pushed past the desktop origin, so west/north growth stops at
/// `x = 0` / `y = 0`. Sizes are floored at the window minimums last.
///
/// ```
/// use lunadesk::{resize_step, Bounds, Point, ResizeHandle};
///
/// let start = Bounds::new(100.0, 100.0, 600.0, 400.0);
/// let step = resize_step(
///   ResizeHandle::NW,
///   Point::new(100.0, 100.0),
///   start,
///   Point::new(50.0, 70.0),
///   (300.0, 200.0),
/// );
/// assert_eq!((step.width, step.height), (650.0, 430.0));
/// assert_eq!(step.origin, Some(Point::new(50.0, 70.0)));
/// ```
pub fn resize_step(
  handle: ResizeHandle,
  start_pointer: Point,
  start_bounds: Bounds,
  pointer: Point,
  (min_width, min_height): (f64, f64),
) -> ResizeStep {
  let (dx, dy) = pointer.delta_from(start_pointer);

  let mut width = start_bounds.w;
  let mut height = start_bounds.h;
  if handle.east() {
    width = (start_bounds.w + dx).max(min_width);
  }
  if handle.west() {
    let max_width = start_bounds.w + start_bounds.x.max(0.0);
    width = (start_bounds.w - dx).min(max_width).max(min_width);
  }
  if handle.south() {
    height = (start_bounds.h + dy).max(min_height);
  }
  if handle.north() {
    let max_height = start_bounds.h + start_bounds.y.max(0.0);
    height = (start_bounds.h - dy).min(max_height).max(min_height);
  }

  let origin = handle.moves_origin().then(|| {
    let x = if handle.west() {
      start_bounds.x + (start_bounds.w - width)
    } else {
      start_bounds.x
    };
    let y = if handle.north() {
      start_bounds.y + (start_bounds.h - height)
    } else {
      start_bounds.y
    };
    Point::new(x, y)
  });

  ResizeStep {
    width,
    height,
    origin,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const START: Bounds = Bounds::new(100.0, 100.0, 600.0, 400.0);
  const FLOOR: (f64, f64) = (300.0, 200.0);

  fn step(handle: ResizeHandle, dx: f64, dy: f64) -> ResizeStep {
    let start = Point::new(400.0, 300.0);
    resize_step(handle, start, START, Point::new(start.x + dx, start.y + dy), FLOOR)
  }

  mod handles {
    use super::*;

    #[test]
    fn each_handle_names_its_edges() {
      assert!(ResizeHandle::NE.north() && ResizeHandle::NE.east());
      assert!(!ResizeHandle::NE.west() && !ResizeHandle::NE.south());
      assert!(ResizeHandle::SW.south() && ResizeHandle::SW.west());
      assert!(ResizeHandle::N.moves_origin());
      assert!(!ResizeHandle::SE.moves_origin());
    }

    #[test]
    fn serializes_as_compass_tag() {
      assert_eq!(serde_json::to_string(&ResizeHandle::NW).unwrap(), "\"nw\"");
      let handle: ResizeHandle = serde_json::from_str("\"se\"").unwrap();
      assert_eq!(handle, ResizeHandle::SE);
    }
  }

  mod resize {
    use super::*;

    #[test]
    fn east_and_south_grow_with_positive_delta() {
      let s = step(ResizeHandle::SE, 40.0, 25.0);
      assert_eq!((s.width, s.height), (640.0, 425.0));
      assert_eq!(s.origin, None, "bottom-right resize keeps the origin");
    }

    #[test]
    fn west_grows_with_negative_delta_and_anchors_right_edge() {
      let s = step(ResizeHandle::W, -50.0, 999.0);
      assert_eq!((s.width, s.height), (650.0, 400.0), "w ignores dy");
      assert_eq!(s.origin, Some(Point::new(50.0, 100.0)));
    }

    #[test]
    fn north_west_corner_keeps_bottom_right_fixed() {
      let s = step(ResizeHandle::NW, -50.0, -30.0);
      assert_eq!((s.width, s.height), (650.0, 430.0));
      let origin = s.origin.unwrap();
      assert_eq!(origin, Point::new(50.0, 70.0));
      assert_eq!(
        (origin.x + s.width, origin.y + s.height),
        (700.0, 500.0),
        "opposite corner stays anchored"
      );
    }

    #[test]
    fn shrinking_stops_at_floor() {
      let s = step(ResizeHandle::NW, 1000.0, 1000.0);
      assert_eq!((s.width, s.height), FLOOR);
      assert_eq!(
        s.origin,
        Some(Point::new(400.0, 300.0)),
        "origin stops where the floor is reached"
      );
    }

    #[test]
    fn growth_stops_at_desktop_origin() {
      let near_origin = Bounds::new(10.0, 10.0, 600.0, 400.0);
      let s = resize_step(
        ResizeHandle::NW,
        Point::new(10.0, 10.0),
        near_origin,
        Point::new(-40.0, -40.0),
        FLOOR,
      );
      assert_eq!((s.width, s.height), (610.0, 410.0));
      assert_eq!(s.origin, Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn north_east_moves_only_y() {
      let s = step(ResizeHandle::NE, 20.0, -10.0);
      assert_eq!((s.width, s.height), (620.0, 410.0));
      assert_eq!(s.origin, Some(Point::new(100.0, 90.0)));
    }
  }

  mod drag {
    use super::*;

    const LIMITS: DragLimits = DragLimits {
      viewport: Size::new(1280.0, 800.0),
      nominal_width: 100.0,
      nominal_height: 30.0,
      taskbar_height: 30.0,
    };

    #[test]
    fn follows_pointer_minus_offset() {
      let gesture = Gesture::drag("a".into(), START, Point::new(150.0, 110.0));
      let GestureKind::Drag { offset } = gesture.kind else {
        panic!("expected drag");
      };
      assert_eq!(offset, Point::new(50.0, 10.0));
      let origin = drag_origin(offset, Point::new(400.0, 300.0), &LIMITS);
      assert_eq!(origin, Point::new(350.0, 290.0));
    }

    #[test]
    fn clamps_to_viewport_minus_nominal_size_and_taskbar() {
      let offset = Point::new(0.0, 0.0);
      assert_eq!(
        drag_origin(offset, Point::new(5000.0, 5000.0), &LIMITS),
        Point::new(1180.0, 740.0)
      );
      assert_eq!(
        drag_origin(offset, Point::new(-20.0, -20.0), &LIMITS),
        Point::new(0.0, 0.0)
      );
    }

    #[test]
    fn tiny_viewport_pins_to_origin() {
      let limits = DragLimits {
        viewport: Size::new(50.0, 40.0),
        ..LIMITS
      };
      assert_eq!(
        drag_origin(Point::new(0.0, 0.0), Point::new(30.0, 30.0), &limits),
        Point::new(0.0, 0.0)
      );
    }
  }
}
