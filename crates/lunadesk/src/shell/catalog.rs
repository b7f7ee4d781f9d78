/*! The fixed set of launchable desktop items. */

use crate::types::{AppKind, Bounds, WindowDescriptor, WindowId};
use rand::Rng;
use serde::Serialize;
use ts_rs::TS;

const DEFAULT_WIDTH: f64 = 600.0;
const DEFAULT_HEIGHT: f64 = 400.0;
const DEFAULT_MIN_WIDTH: f64 = 300.0;
const DEFAULT_MIN_HEIGHT: f64 = 200.0;

/// Where an item sits on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ItemGroup {
  /// Left column: My Computer, Recycle Bin, ...
  System,
  /// Prominent project launchers.
  Portfolio,
  /// Small tools: browser, Notepad, Minesweeper.
  Utilities,
}

/// A launchable item. Size hints fall back to 600x400 with a 300x200 floor.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DesktopItem {
  /// Also the id of the window it opens.
  #[ts(type = "string")]
  pub id: &'static str,
  /// Icon caption.
  #[ts(type = "string")]
  pub label: &'static str,
  /// Icon asset path.
  #[ts(type = "string")]
  pub icon: &'static str,
  /// Content the opened window hosts.
  #[ts(type = "string")]
  pub component: AppKind,
  /// Initial window width.
  pub width: Option<f64>,
  /// Initial window height.
  pub height: Option<f64>,
  /// Resize floor for width.
  pub min_width: Option<f64>,
  /// Resize floor for height.
  pub min_height: Option<f64>,
  /// Desktop placement group; `None` for start-menu-only items.
  pub group: Option<ItemGroup>,
}

impl DesktopItem {
  /// Title shown in the window and taskbar: the label without `.exe`.
  pub fn title(&self) -> String {
    self.label.replace(".exe", "")
  }

  /// Descriptor for opening this item, with placement jittered so repeated
  /// launches don't stack exactly on top of each other.
  pub fn descriptor(&self, rng: &mut impl Rng) -> WindowDescriptor {
    let x = 100.0 + rng.random_range(0.0..100.0);
    let y = 50.0 + rng.random_range(0.0..100.0);
    WindowDescriptor {
      id: WindowId::from(self.id),
      title: self.title(),
      icon: self.icon.to_owned(),
      component: self.component.clone(),
      bounds: Bounds::new(
        x,
        y,
        self.width.unwrap_or(DEFAULT_WIDTH),
        self.height.unwrap_or(DEFAULT_HEIGHT),
      ),
      min_width: self.min_width.unwrap_or(DEFAULT_MIN_WIDTH),
      min_height: self.min_height.unwrap_or(DEFAULT_MIN_HEIGHT),
      is_maximized: false,
    }
  }
}

const fn item(
  id: &'static str,
  label: &'static str,
  icon: &'static str,
  component: AppKind,
  size: (f64, f64),
  min: (f64, f64),
  group: ItemGroup,
) -> DesktopItem {
  DesktopItem {
    id,
    label,
    icon,
    component,
    width: Some(size.0),
    height: Some(size.1),
    min_width: Some(min.0),
    min_height: Some(min.1),
    group: Some(group),
  }
}

/// System icons (left column).
pub fn system_items() -> Vec<DesktopItem> {
  use ItemGroup::System;
  vec![
    item("my-computer", "My Computer", "/img/My Computer.png", AppKind::Explorer, (700.0, 500.0), (400.0, 300.0), System),
    item("my-documents", "My Documents", "/img/documents.png", AppKind::ExplorerDocs, (700.0, 500.0), (400.0, 300.0), System),
    item("recycle-bin", "Recycle Bin", "/img/Recycle Bin (empty).png", AppKind::RecycleBin, (500.0, 400.0), (300.0, 200.0), System),
    item("secret-projects", "Secret Projects", "/img/Security Alert.png", AppKind::SecretProjects, (700.0, 500.0), (400.0, 300.0), System),
  ]
}

/// Portfolio project launchers.
pub fn portfolio_items() -> Vec<DesktopItem> {
  use ItemGroup::Portfolio;
  vec![
    item("frontend", "Frontend.exe", "/img/HTML.png", AppKind::Frontend, (850.0, 600.0), (600.0, 400.0), Portfolio),
    item("backend", "Backend.exe", "/img/Command Prompt.png", AppKind::Backend, (700.0, 500.0), (500.0, 350.0), Portfolio),
    item("web3", "Web3.exe", "/img/Internet Connection Wizard.png", AppKind::Web3, (600.0, 500.0), (400.0, 350.0), Portfolio),
    item("ai", "AI.exe", "/img/System Information.png", AppKind::Ai, (700.0, 500.0), (500.0, 350.0), Portfolio),
    item("contact", "Outlook", "/img/Outlook Express.png", AppKind::Contact, (750.0, 550.0), (500.0, 400.0), Portfolio),
  ]
}

/// Utility apps.
pub fn utility_items() -> Vec<DesktopItem> {
  use ItemGroup::Utilities;
  vec![
    item("ie", "Internet Explorer", "/img/Internet Explorer 6.png", AppKind::Frontend, (800.0, 600.0), (400.0, 300.0), Utilities),
    item("notepad", "Notepad", "/img/Notepad.png", AppKind::Notepad, (500.0, 400.0), (300.0, 200.0), Utilities),
    item("minesweeper", "Minesweeper", "/img/Minesweeper.png", AppKind::Minesweeper, (280.0, 380.0), (280.0, 380.0), Utilities),
  ]
}

/// Every desktop item: system, then portfolio, then utilities.
pub fn desktop_items() -> Vec<DesktopItem> {
  let mut items = system_items();
  items.extend(portfolio_items());
  items.extend(utility_items());
  items
}

/// Look up a desktop item by id.
pub fn find_item(id: &str) -> Option<DesktopItem> {
  desktop_items().into_iter().find(|item| item.id == id)
}

/// Descriptor for a classified document opened from the file explorer.
///
/// Each open gets its own window (`"{secret_id}-{stamp}"`), so several can be
/// open at once.
pub fn secret_document_descriptor(
  secret_id: &str,
  title: &str,
  stamp: u64,
  rng: &mut impl Rng,
) -> WindowDescriptor {
  let x = 150.0 + rng.random_range(0.0..100.0);
  let y = 80.0 + rng.random_range(0.0..80.0);
  WindowDescriptor {
    id: WindowId::instance(secret_id, stamp),
    title: title.replace(".classified", ""),
    icon: "/img/Lock.png".to_owned(),
    component: AppKind::from_tag(secret_id),
    bounds: Bounds::new(x, y, 550.0, 500.0),
    min_width: 450.0,
    min_height: 400.0,
    is_maximized: false,
  }
}
