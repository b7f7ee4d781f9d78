/*!
Lunadesk - window manager and shell state for a retro desktop UI

```
use lunadesk::{AppKind, Bounds, Desktop, Point, ResizeHandle, WindowDescriptor};

let desktop = Desktop::new();

desktop.open_window(WindowDescriptor {
  id: "notepad".into(),
  title: "Notepad".into(),
  icon: "/img/Notepad.png".into(),
  component: AppKind::Notepad,
  bounds: Bounds::new(100.0, 100.0, 400.0, 300.0),
  min_width: 300.0,
  min_height: 200.0,
  is_maximized: false,
});

// Drag the title bar, then resize from the bottom-right corner
let id = "notepad".into();
desktop.title_bar_pointer_down(&id, Point::new(150.0, 110.0));
desktop.pointer_move(Point::new(250.0, 160.0));
desktop.pointer_up();

desktop.begin_resize(&id, ResizeHandle::SE, Point::new(600.0, 450.0));
desktop.pointer_move(Point::new(650.0, 500.0));
desktop.pointer_up();

let window = desktop.window(&id).unwrap();
assert_eq!(window.bounds, Bounds::new(200.0, 150.0, 450.0, 350.0));
```
*/

mod chrome;
mod config;
mod content;
mod core;
mod gesture;

pub mod layout;
pub mod shell;

mod types;
pub use types::*;

pub use crate::chrome::{ChromeButton, TitleBar};
pub use crate::config::DesktopConfig;
pub use crate::content::{Content, ContentRegistry};
pub use crate::core::{Desktop, DesktopBuilder, OpenOutcome};
pub use crate::gesture::{
  drag_origin, resize_step, DragLimits, Gesture, GestureKind, ResizeHandle, ResizeStep,
};
