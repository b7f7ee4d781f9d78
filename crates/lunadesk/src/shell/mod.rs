/*!
Desktop shell surfaces that sit around the windows.

- `catalog.rs` - launchable desktop items and descriptor templates
- `taskbar.rs` - taskbar buttons and click behaviour
- `start_menu.rs` - start menu state and launching
- `context_menu.rs` - right-click menu state
*/

pub mod catalog;
mod context_menu;
mod start_menu;
mod taskbar;

pub use context_menu::{ContextMenu, MenuItem};
pub use start_menu::StartMenu;
pub use taskbar::{TaskbarClick, TaskbarItem};
