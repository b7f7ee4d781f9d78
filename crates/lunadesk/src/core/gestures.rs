/*!
Pointer gesture wiring.

`begin_drag` / `begin_resize` capture an anchor on pointer-down, every
`pointer_move` recomputes geometry from that anchor and commits it as one store
transition, and `pointer_up` returns to idle.
*/

use super::Desktop;
use crate::gesture::{drag_origin, resize_step, DragLimits, Gesture, GestureKind, ResizeHandle};
use crate::types::{Bounds, Point, WindowId};

impl Desktop {
  /// Start dragging a window by its title bar.
  ///
  /// Ignored (returns `false`) for unknown, minimized or maximized windows.
  pub fn begin_drag(&self, id: &WindowId, pointer: Point) -> bool {
    self.write(|s| {
      let Some(window) = s.window(id).filter(|w| w.accepts_gestures()) else {
        return false;
      };
      let gesture = Gesture::drag(id.clone(), window.bounds, pointer);
      s.set_gesture(gesture);
      true
    })
  }

  /// Start resizing a window from one of its edge/corner handles.
  ///
  /// Ignored (returns `false`) for unknown, minimized or maximized windows.
  pub fn begin_resize(&self, id: &WindowId, handle: ResizeHandle, pointer: Point) -> bool {
    self.write(|s| {
      let Some(window) = s.window(id).filter(|w| w.accepts_gestures()) else {
        return false;
      };
      let gesture = Gesture::resize(id.clone(), handle, window.bounds, pointer);
      s.set_gesture(gesture);
      true
    })
  }

  /// Feed a pointer position to the active gesture. No-op when idle.
  ///
  /// Returns whether a window was updated.
  pub fn pointer_move(&self, pointer: Point) -> bool {
    self.write(|s| {
      let Some(gesture) = s.gesture().cloned() else {
        return false;
      };
      let Some(window) = s.window(&gesture.window_id) else {
        log::debug!("Gesture target {} is gone, dropping gesture", gesture.window_id);
        s.clear_gesture();
        return false;
      };
      let floor = (window.min_width, window.min_height);
      let origin = window.bounds.origin();
      let id = &gesture.window_id;

      match gesture.kind {
        GestureKind::Drag { offset } => {
          let limits = DragLimits::from_config(s.config());
          let origin = drag_origin(offset, pointer, &limits);
          log::trace!("Drag {id} to ({}, {})", origin.x, origin.y);
          s.update_window_position(id, origin.x, origin.y)
        }
        GestureKind::Resize {
          handle,
          start_pointer,
          start_bounds,
        } => {
          let step = resize_step(handle, start_pointer, start_bounds, pointer, floor);
          log::trace!("Resize {id} to {}x{}", step.width, step.height);
          let origin = step.origin.unwrap_or(origin);
          s.set_window_bounds(id, Bounds::new(origin.x, origin.y, step.width, step.height))
        }
      }
    })
  }

  /// End the active gesture, whatever it was.
  pub fn pointer_up(&self) {
    self.write(|s| {
      s.clear_gesture();
    });
  }

  /// The gesture in flight, if any.
  pub fn active_gesture(&self) -> Option<Gesture> {
    self.read(|s| s.gesture().cloned())
  }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
  use crate::core::test_support::descriptor;
  use crate::gesture::ResizeHandle;
  use crate::types::{Bounds, Event, Point, Size, WindowId};
  use crate::Desktop;

  fn desktop_with_a() -> (Desktop, WindowId) {
    let desktop = Desktop::new();
    desktop.open_window(descriptor("a", 100.0, 100.0, 600.0, 400.0));
    (desktop, WindowId::from("a"))
  }

  #[test]
  fn north_west_resize_keeps_opposite_corner() {
    let (desktop, a) = desktop_with_a();
    assert!(desktop.begin_resize(&a, ResizeHandle::NW, Point::new(100.0, 100.0)));
    assert!(desktop.pointer_move(Point::new(50.0, 70.0)));
    desktop.pointer_up();

    let win = desktop.window(&a).unwrap();
    assert_eq!(win.bounds, Bounds::new(50.0, 70.0, 650.0, 430.0));
    assert_eq!(win.bounds.far_corner(), Point::new(700.0, 500.0));
  }

  #[test]
  fn resize_near_desktop_origin_keeps_opposite_corner() {
    let desktop = Desktop::new();
    desktop.open_window(descriptor("a", 10.0, 10.0, 600.0, 400.0));
    let a = WindowId::from("a");

    desktop.begin_resize(&a, ResizeHandle::NW, Point::new(10.0, 10.0));
    desktop.pointer_move(Point::new(-40.0, -40.0));

    let win = desktop.window(&a).unwrap();
    assert_eq!(win.bounds, Bounds::new(0.0, 0.0, 610.0, 410.0));
    assert_eq!(win.bounds.far_corner(), Point::new(610.0, 410.0));
  }

  #[test]
  fn west_resize_step_is_one_change_event() {
    let (desktop, a) = desktop_with_a();
    let mut events = desktop.subscribe();
    desktop.begin_resize(&a, ResizeHandle::W, Point::new(100.0, 300.0));
    desktop.pointer_move(Point::new(50.0, 300.0));

    let changes: Vec<Event> = std::iter::from_fn(|| events.try_recv().ok())
      .filter(|e| matches!(e, Event::WindowChanged { .. }))
      .collect();
    assert!(matches!(&changes[..], [Event::WindowChanged { window }]
      if window.bounds == Bounds::new(50.0, 100.0, 650.0, 400.0)));
  }

  #[test]
  fn resize_is_relative_to_gesture_start_not_last_move() {
    let (desktop, a) = desktop_with_a();
    desktop.begin_resize(&a, ResizeHandle::W, Point::new(100.0, 300.0));
    desktop.pointer_move(Point::new(60.0, 300.0));
    desktop.pointer_move(Point::new(80.0, 300.0));

    let win = desktop.window(&a).unwrap();
    assert_eq!(win.bounds, Bounds::new(80.0, 100.0, 620.0, 400.0));
  }

  #[test]
  fn resize_floor_applies_during_gesture() {
    let (desktop, a) = desktop_with_a();
    desktop.begin_resize(&a, ResizeHandle::SE, Point::new(700.0, 500.0));
    desktop.pointer_move(Point::new(0.0, 0.0));

    let win = desktop.window(&a).unwrap();
    assert_eq!((win.bounds.w, win.bounds.h), (300.0, 200.0));
    assert_eq!(win.bounds.origin(), Point::new(100.0, 100.0));
  }

  #[test]
  fn drag_follows_pointer_and_clamps_to_viewport() {
    let (desktop, a) = desktop_with_a();
    assert!(desktop.begin_drag(&a, Point::new(120.0, 110.0)));

    desktop.pointer_move(Point::new(320.0, 210.0));
    assert_eq!(desktop.window(&a).unwrap().bounds.origin(), Point::new(300.0, 200.0));

    desktop.pointer_move(Point::new(9000.0, 9000.0));
    assert_eq!(
      desktop.window(&a).unwrap().bounds.origin(),
      Point::new(1180.0, 740.0)
    );

    desktop.pointer_move(Point::new(-50.0, -50.0));
    assert_eq!(desktop.window(&a).unwrap().bounds.origin(), Point::new(0.0, 0.0));
  }

  #[test]
  fn drag_clamp_tracks_viewport_changes() {
    let (desktop, a) = desktop_with_a();
    desktop.set_viewport(Size::new(800.0, 600.0));
    desktop.begin_drag(&a, Point::new(100.0, 100.0));
    desktop.pointer_move(Point::new(5000.0, 5000.0));
    assert_eq!(desktop.window(&a).unwrap().bounds.origin(), Point::new(700.0, 540.0));
  }

  #[test]
  fn pointer_up_returns_to_idle() {
    let (desktop, a) = desktop_with_a();
    desktop.begin_drag(&a, Point::new(120.0, 110.0));
    assert!(desktop.active_gesture().is_some_and(|g| g.is_drag()));

    desktop.pointer_up();
    assert!(desktop.active_gesture().is_none());
    assert!(!desktop.pointer_move(Point::new(500.0, 500.0)));
    assert_eq!(desktop.window(&a).unwrap().bounds.origin(), Point::new(100.0, 100.0));
  }

  #[test]
  fn maximized_or_minimized_windows_ignore_gestures() {
    let (desktop, a) = desktop_with_a();
    desktop.maximize_window(&a);
    assert!(!desktop.begin_drag(&a, Point::new(10.0, 10.0)));
    assert!(!desktop.begin_resize(&a, ResizeHandle::SE, Point::new(10.0, 10.0)));

    desktop.restore_window(&a);
    desktop.minimize_window(&a);
    assert!(!desktop.begin_drag(&a, Point::new(10.0, 10.0)));
    assert!(desktop.active_gesture().is_none());
  }

  #[test]
  fn only_one_gesture_at_a_time() {
    let (desktop, a) = desktop_with_a();
    desktop.open_window(descriptor("b", 200.0, 200.0, 600.0, 400.0));
    let b = WindowId::from("b");

    desktop.begin_drag(&a, Point::new(120.0, 110.0));
    desktop.begin_resize(&b, ResizeHandle::E, Point::new(800.0, 300.0));

    let gesture = desktop.active_gesture().unwrap();
    assert_eq!(gesture.window_id, b);
    assert!(gesture.is_resize());

    desktop.pointer_move(Point::new(850.0, 300.0));
    assert_eq!(desktop.window(&a).unwrap().bounds.origin(), Point::new(100.0, 100.0));
    assert_eq!(desktop.window(&b).unwrap().bounds.w, 650.0);
  }

  #[test]
  fn closing_or_maximizing_target_cancels_gesture() {
    let (desktop, a) = desktop_with_a();
    desktop.begin_drag(&a, Point::new(120.0, 110.0));
    desktop.maximize_window(&a);
    assert!(desktop.active_gesture().is_none());

    desktop.restore_window(&a);
    desktop.begin_resize(&a, ResizeHandle::S, Point::new(300.0, 500.0));
    desktop.close_window(&a);
    assert!(desktop.active_gesture().is_none());
    assert!(!desktop.pointer_move(Point::new(300.0, 600.0)));
  }
}
