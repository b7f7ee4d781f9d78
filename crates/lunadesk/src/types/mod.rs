/*! Core types for the desktop.

Regenerate TypeScript types: `cargo test -p lunadesk export_bindings`
*/

#![allow(missing_docs)]

mod app;
mod error;
mod event;
mod geometry;
mod ids;
mod window;

pub use app::AppKind;
pub use error::{DeskError, DeskResult};
pub use event::{Event, Snapshot};
pub use geometry::{Bounds, DesktopArea, Point, Size};
pub use ids::WindowId;
pub use window::{Window, WindowDescriptor};
