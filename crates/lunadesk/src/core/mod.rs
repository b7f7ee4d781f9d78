/*!
Core desktop instance - owns window state and event broadcasting.

# Module Structure

- `mod.rs` - Desktop struct, construction, events
- `registry/` - Registry (state) with private fields + transitions + event emission
- `actions.rs` - window store operations (open, close, focus, ...)
- `queries.rs` - read accessors and snapshots
- `gestures.rs` - pointer drag/resize wiring

# Example

```
use lunadesk::{AppKind, Bounds, Desktop, WindowDescriptor};

let desktop = Desktop::new();
let mut events = desktop.subscribe();

desktop.open_window(WindowDescriptor {
  id: "notepad".into(),
  title: "Notepad".into(),
  icon: "/img/Notepad.png".into(),
  component: AppKind::Notepad,
  bounds: Bounds::new(120.0, 80.0, 500.0, 400.0),
  min_width: 300.0,
  min_height: 200.0,
  is_maximized: false,
});

assert!(desktop.is_active(&"notepad".into()));
assert!(events.try_recv().is_ok());
```
*/

mod actions;
mod gestures;
mod queries;
mod registry;

pub use registry::OpenOutcome;
pub(crate) use registry::Registry;

use crate::config::DesktopConfig;
use crate::types::{DeskResult, Event, Size};
use async_broadcast::{InactiveReceiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// Main desktop instance - owns window state and event broadcasting.
///
/// Clone is cheap (Arc bumps) - hand it to every surface that opens, focuses
/// or renders windows. Each operation holds the lock for exactly one
/// transition, so callers never observe a half-applied change.
pub struct Desktop {
  pub(crate) state: Arc<RwLock<Registry>>,
  events_tx: Sender<Event>,
  events_keepalive: InactiveReceiver<Event>,
}

impl Clone for Desktop {
  fn clone(&self) -> Self {
    Self {
      state: Arc::clone(&self.state),
      events_tx: self.events_tx.clone(),
      events_keepalive: self.events_keepalive.clone(),
    }
  }
}

impl std::fmt::Debug for Desktop {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Desktop").finish_non_exhaustive()
  }
}

impl Default for Desktop {
  fn default() -> Self {
    Self::new()
  }
}

/// Builder for configuring a Desktop instance.
///
/// # Example
///
/// ```
/// use lunadesk::{Desktop, Size};
///
/// let desktop = Desktop::builder()
///     .viewport(Size::new(1024.0, 768.0))
///     .taskbar_height(30.0)
///     .build()?;
/// assert_eq!(desktop.highest_z_index(), 1);
/// # Ok::<(), lunadesk::DeskError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct DesktopBuilder {
  config: DesktopConfig,
}

impl DesktopBuilder {
  /// Replace the whole configuration.
  pub const fn config(mut self, config: DesktopConfig) -> Self {
    self.config = config;
    self
  }

  /// Browser viewport size. Default: 1280x800.
  pub const fn viewport(mut self, viewport: Size) -> Self {
    self.config.viewport = viewport;
    self
  }

  /// Taskbar strip height. Default: 30px.
  pub const fn taskbar_height(mut self, height: f64) -> Self {
    self.config.taskbar_height = height;
    self
  }

  /// Nominal window size used by the drag clamp. Default: 100x30.
  pub const fn drag_nominal_size(mut self, width: f64, height: f64) -> Self {
    self.config.drag_nominal_width = width;
    self.config.drag_nominal_height = height;
    self
  }

  /// Starting stacking counter. Default: 1.
  pub const fn initial_z_index(mut self, z_index: u64) -> Self {
    self.config.initial_z_index = z_index;
    self
  }

  /// Event channel capacity. Default: 1000.
  pub const fn event_channel_capacity(mut self, capacity: usize) -> Self {
    self.config.event_channel_capacity = capacity;
    self
  }

  /// Build the Desktop instance with the configured options.
  ///
  /// Returns an error if the configuration is invalid.
  pub fn build(self) -> DeskResult<Desktop> {
    self.config.validate()?;
    Ok(Desktop::create_with_config(self.config))
  }
}

impl Desktop {
  /// Create a new Desktop with default options.
  ///
  /// For custom configuration, use [`Desktop::builder()`].
  pub fn new() -> Self {
    Self::create_with_config(DesktopConfig::default())
  }

  /// Create a builder for configuring a new Desktop instance.
  pub fn builder() -> DesktopBuilder {
    DesktopBuilder::default()
  }

  fn create_with_config(config: DesktopConfig) -> Self {
    let (mut tx, rx) = async_broadcast::broadcast(config.event_channel_capacity);
    tx.set_overflow(true); // Drop oldest messages when full

    // State owns a clone of the sender for event emission
    let state = Registry::new(tx.clone(), config);

    Desktop {
      state: Arc::new(RwLock::new(state)),
      events_tx: tx,
      events_keepalive: rx.deactivate(),
    }
  }

  /// Subscribe to events from this instance.
  ///
  /// Pair with [`Desktop::snapshot`] to render the current state first.
  pub fn subscribe(&self) -> async_broadcast::Receiver<Event> {
    self.events_keepalive.activate_cloned()
  }

  /// Update the viewport after the browser window resizes.
  pub fn set_viewport(&self, viewport: Size) {
    self.write(|s| s.set_viewport(viewport));
  }

  /// Read state.
  #[inline]
  pub(crate) fn read<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
    f(&self.state.read())
  }

  /// Write state.
  #[inline]
  pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
    f(&mut self.state.write())
  }
}

#[cfg(test)]
pub(crate) mod test_support {
  use crate::types::{AppKind, Bounds, WindowDescriptor};

  /// Descriptor with the default 300x200 floor.
  pub(crate) fn descriptor(id: &str, x: f64, y: f64, w: f64, h: f64) -> WindowDescriptor {
    WindowDescriptor {
      id: id.into(),
      title: id.to_uppercase(),
      icon: String::new(),
      component: AppKind::from_tag(id),
      bounds: Bounds::new(x, y, w, h),
      min_width: 300.0,
      min_height: 200.0,
      is_maximized: false,
    }
  }
}
