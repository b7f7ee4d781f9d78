/*!
Registry - the single source of truth for open windows.

All fields are private. Mutations go through methods that maintain invariants
and emit events. This guarantees:
- The stacking counter only ever grows
- Every committed change is broadcast
- The active window is recomputed after every transition

## Module Structure

- `mod.rs` - Registry struct, event emission, read access, gesture slot
- `windows.rs` - Window lifecycle and geometry transitions
*/

mod windows;

pub use windows::OpenOutcome;

use async_broadcast::Sender;

use crate::config::DesktopConfig;
use crate::gesture::Gesture;
use crate::types::{DesktopArea, Event, Size, Snapshot, Window, WindowId};

/// Internal state storage with automatic event emission.
pub(crate) struct Registry {
  // Event emission
  events_tx: Sender<Event>,

  // Open windows, insertion order. Taskbar order follows this, not z-order.
  windows: Vec<Window>,

  // Stacking
  highest_z_index: u64,
  /// Last active window we broadcast, used to detect focus changes.
  active: Option<WindowId>,

  // At most one pointer gesture system-wide.
  gesture: Option<Gesture>,

  config: DesktopConfig,
}

impl Registry {
  pub(crate) fn new(events_tx: Sender<Event>, config: DesktopConfig) -> Self {
    Self {
      events_tx,
      windows: Vec::new(),
      highest_z_index: config.initial_z_index,
      active: None,
      gesture: None,
      config,
    }
  }

  /// Emit an event.
  pub(super) fn emit(&self, event: Event) {
    if let Err(e) = self.events_tx.try_broadcast(event) {
      if e.is_full() {
        log::error!(
          "Event channel overflow - events are being dropped. \
           Consider increasing event_channel_capacity or processing events faster."
        );
      }
    }
  }

  /// Recompute the active window and emit `FocusChanged` if it moved.
  fn sync_active(&mut self) {
    let active = self.active_window().map(|w| w.id.clone());
    if active == self.active {
      return;
    }
    self.active = active.clone();
    self.emit(Event::FocusChanged { window_id: active });
  }
}

// Read access
impl Registry {
  pub(crate) fn windows(&self) -> &[Window] {
    &self.windows
  }

  pub(crate) fn window(&self, id: &WindowId) -> Option<&Window> {
    self.windows.iter().find(|w| &w.id == id)
  }

  pub(crate) const fn highest_z_index(&self) -> u64 {
    self.highest_z_index
  }

  /// The non-minimized window holding the top of the stack, if any.
  pub(crate) fn active_window(&self) -> Option<&Window> {
    let top = self.highest_z_index;
    self.windows.iter().find(|w| w.is_active_at(top))
  }

  pub(crate) fn snapshot(&self) -> Snapshot {
    Snapshot {
      windows: self.windows.clone(),
      highest_z_index: self.highest_z_index,
      active_window: self.active_window().map(|w| w.id.clone()),
    }
  }

  pub(crate) const fn config(&self) -> &DesktopConfig {
    &self.config
  }

  pub(crate) const fn desktop_area(&self) -> DesktopArea {
    self.config.desktop_area()
  }

  pub(crate) fn set_viewport(&mut self, viewport: Size) {
    self.config.viewport = viewport;
  }
}

// Gesture slot
impl Registry {
  pub(crate) const fn gesture(&self) -> Option<&Gesture> {
    self.gesture.as_ref()
  }

  /// Start a gesture, replacing any in flight.
  pub(crate) fn set_gesture(&mut self, gesture: Gesture) {
    if let Some(previous) = self.gesture.replace(gesture) {
      log::debug!(
        "Gesture on {} replaced before pointer-up",
        previous.window_id
      );
    }
  }

  pub(crate) fn clear_gesture(&mut self) -> Option<Gesture> {
    self.gesture.take()
  }

  /// Drop the gesture if it targets `id`.
  fn cancel_gesture_for(&mut self, id: &WindowId) {
    if self.gesture.as_ref().is_some_and(|g| &g.window_id == id) {
      log::debug!("Cancelling gesture on {id}");
      self.gesture = None;
    }
  }
}
