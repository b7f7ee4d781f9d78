/*!
Configuration for the desktop.

All values have sensible defaults. Override through the builder or load from
JSON (only the keys you want to change):

```
use lunadesk::DesktopConfig;

let config = DesktopConfig::from_json(r#"{ "viewport": { "w": 1024.0, "h": 768.0 } }"#)?;
assert_eq!(config.taskbar_height, 30.0);
# Ok::<(), lunadesk::DeskError>(())
```
*/

use crate::types::{DeskError, DeskResult, DesktopArea, Size};
use serde::Deserialize;

/// Desktop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
  /// Browser viewport size in pixels.
  /// Default: 1280x800.
  pub viewport: Size,

  /// Height of the taskbar strip along the bottom edge.
  /// Default: 30px.
  pub taskbar_height: f64,

  /// Width subtracted from the viewport when clamping a drag, so that part of
  /// the title bar always stays reachable.
  /// Default: 100px.
  pub drag_nominal_width: f64,

  /// Height subtracted (on top of the taskbar) when clamping a drag.
  /// Default: 30px.
  pub drag_nominal_height: f64,

  /// Starting value of the stacking counter. The first window opens at this + 1.
  /// Default: 1.
  pub initial_z_index: u64,

  /// Capacity of the event broadcast channel.
  /// Default: 1000 events.
  pub event_channel_capacity: usize,
}

impl Default for DesktopConfig {
  fn default() -> Self {
    Self {
      viewport: Size::new(1280.0, 800.0),
      taskbar_height: 30.0,
      drag_nominal_width: 100.0,
      drag_nominal_height: 30.0,
      initial_z_index: 1,
      event_channel_capacity: 1000,
    }
  }
}

impl DesktopConfig {
  /// Create a new config with default values.
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse a (partial) JSON config. Missing keys keep their defaults.
  pub fn from_json(json: &str) -> DeskResult<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Reject values the window manager cannot work with.
  pub fn validate(&self) -> DeskResult<()> {
    let lengths = [
      ("viewport.w", self.viewport.w),
      ("viewport.h", self.viewport.h),
      ("taskbar_height", self.taskbar_height),
      ("drag_nominal_width", self.drag_nominal_width),
      ("drag_nominal_height", self.drag_nominal_height),
    ];
    for (name, value) in lengths {
      if !value.is_finite() || value < 0.0 {
        return Err(DeskError::InvalidConfig(format!(
          "{name} must be a non-negative number, got {value}"
        )));
      }
    }
    if self.event_channel_capacity == 0 {
      return Err(DeskError::InvalidConfig(
        "event_channel_capacity must be at least 1".into(),
      ));
    }
    Ok(())
  }

  /// Area available to windows.
  pub const fn desktop_area(&self) -> DesktopArea {
    DesktopArea {
      viewport: self.viewport,
      taskbar_height: self.taskbar_height,
    }
  }
}
