/*! Window lifecycle and geometry transitions. */

use super::Registry;
use crate::types::{Bounds, Event, Window, WindowDescriptor, WindowId};

/// What `open_window` did with a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
  /// A new window was created.
  Opened,
  /// A window with that id was already open; it was brought to front.
  Focused,
  /// A window with that id was minimized; it was brought to front and restored.
  Restored,
}

impl Registry {
  /// Open a window, or raise the existing one if the id is taken.
  ///
  /// A duplicate id discards the descriptor entirely, geometry included.
  pub(crate) fn open_window(&mut self, descriptor: WindowDescriptor) -> OpenOutcome {
    if let Some(existing) = self.window(&descriptor.id) {
      let was_minimized = existing.is_minimized;
      let id = descriptor.id;
      log::debug!("Window {id} already open, bringing to front");
      self.focus_window(&id);
      if was_minimized {
        self.restore_window(&id);
        return OpenOutcome::Restored;
      }
      return OpenOutcome::Focused;
    }

    if descriptor.bounds.w < descriptor.min_width || descriptor.bounds.h < descriptor.min_height {
      // Creation geometry is trusted; only later resizes are floored.
      log::debug!(
        "Window {} opened below its minimum size ({}x{} < {}x{})",
        descriptor.id,
        descriptor.bounds.w,
        descriptor.bounds.h,
        descriptor.min_width,
        descriptor.min_height
      );
    }

    self.highest_z_index += 1;
    let window = descriptor.into_window(self.highest_z_index);
    log::debug!(
      "Opened window {} ({}) at z={}",
      window.id,
      window.component,
      window.z_index
    );
    self.windows.push(window.clone());
    self.emit(Event::WindowOpened { window });
    self.sync_active();
    OpenOutcome::Opened
  }

  /// Remove a window. The stacking counter is left alone, so z-indices are never reused.
  pub(crate) fn close_window(&mut self, id: &WindowId) -> Option<Window> {
    let index = self.windows.iter().position(|w| &w.id == id)?;
    let removed = self.windows.remove(index);
    self.cancel_gesture_for(id);
    log::debug!("Closed window {id}");
    self.emit(Event::WindowClosed {
      window_id: id.clone(),
    });
    self.sync_active();
    Some(removed)
  }

  pub(crate) fn minimize_window(&mut self, id: &WindowId) -> bool {
    self.cancel_gesture_for(id);
    self.update(id, |w| w.is_minimized = true)
  }

  /// Maximize. Geometry and z-index are kept for a later restore.
  pub(crate) fn maximize_window(&mut self, id: &WindowId) -> bool {
    self.cancel_gesture_for(id);
    self.update(id, |w| {
      w.is_maximized = true;
      w.is_minimized = false;
    })
  }

  /// Un-maximize and un-minimize in one step, bringing the window to front.
  pub(crate) fn restore_window(&mut self, id: &WindowId) -> bool {
    self.raise(id, |w| {
      w.is_maximized = false;
      w.is_minimized = false;
    })
  }

  pub(crate) fn focus_window(&mut self, id: &WindowId) -> bool {
    self.raise(id, |_| {})
  }

  /// Move a window. Coordinates are floored at zero; there is no upper clamp here.
  pub(crate) fn update_window_position(&mut self, id: &WindowId, x: f64, y: f64) -> bool {
    let (x, y) = (x.max(0.0), y.max(0.0));
    self.update(id, |w| {
      w.bounds.x = x;
      w.bounds.y = y;
    })
  }

  /// Resize a window, flooring each dimension at that window's own minimum.
  pub(crate) fn update_window_size(&mut self, id: &WindowId, width: f64, height: f64) -> bool {
    self.update(id, |w| {
      w.bounds.w = width.max(w.min_width);
      w.bounds.h = height.max(w.min_height);
    })
  }

  /// Move and resize in one transition: origin floored at zero, size at the
  /// window's minimums. A resize step from the top or left edge lands as a
  /// single `WindowChanged`.
  pub(crate) fn set_window_bounds(&mut self, id: &WindowId, bounds: Bounds) -> bool {
    let origin = bounds.origin().clamp_non_negative();
    self.update(id, |w| {
      w.bounds = Bounds::new(
        origin.x,
        origin.y,
        bounds.w.max(w.min_width),
        bounds.h.max(w.min_height),
      );
    })
  }

  /// Give `id` the next z-index, then apply `f`. No-op (and no counter bump)
  /// for an unknown id.
  fn raise(&mut self, id: &WindowId, f: impl FnOnce(&mut Window)) -> bool {
    if self.window(id).is_none() {
      return false;
    }
    let z_index = self.highest_z_index + 1;
    self.highest_z_index = z_index;
    self.update(id, |w| {
      w.z_index = z_index;
      f(w);
    })
  }

  /// Apply `f` to the window, emitting `WindowChanged` if anything changed.
  /// Returns whether the window exists.
  fn update(&mut self, id: &WindowId, f: impl FnOnce(&mut Window)) -> bool {
    let Some(window) = self.windows.iter_mut().find(|w| &w.id == id) else {
      return false;
    };

    let before = window.clone();
    f(window);
    if *window != before {
      let window = window.clone();
      log::trace!("Window {} changed: {:?}", window.id, window.bounds);
      self.emit(Event::WindowChanged { window });
    }
    self.sync_active();
    true
  }
}
