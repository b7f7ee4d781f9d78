/*!
Start menu: launcher entries grouped the way the classic menu shows them.

The menu only tracks whether it (and its "All Programs" sub-menu) is open.
Launching an entry opens its window through the desktop and closes the menu.
*/

use super::catalog::{desktop_items, find_item, DesktopItem};
use crate::core::{Desktop, OpenOutcome};
use rand::Rng;

/// Quick-access column (left, white).
const QUICK_ACCESS: [&str; 3] = ["ie", "contact", "my-documents"];
/// System column (right, blue).
const SYSTEM_PLACES: [&str; 2] = ["my-computer", "my-documents"];

/// Start menu open/closed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartMenu {
  open: bool,
  all_programs_open: bool,
}

impl StartMenu {
  /// Closed menu.
  pub const fn new() -> Self {
    Self {
      open: false,
      all_programs_open: false,
    }
  }

  /// Whether the menu panel is showing.
  pub const fn is_open(&self) -> bool {
    self.open
  }

  /// Whether the "All Programs" flyout is showing. Never true while closed.
  pub const fn is_all_programs_open(&self) -> bool {
    self.open && self.all_programs_open
  }

  /// Start button click.
  pub fn toggle(&mut self) {
    if self.open {
      self.close();
    } else {
      self.open = true;
    }
  }

  /// Close the menu and its sub-menu (click outside, launch).
  pub fn close(&mut self) {
    self.open = false;
    self.all_programs_open = false;
  }

  /// "All Programs" click.
  pub fn toggle_all_programs(&mut self) {
    if self.open {
      self.all_programs_open = !self.all_programs_open;
    }
  }

  /// Left column entries.
  pub fn quick_access() -> Vec<DesktopItem> {
    QUICK_ACCESS.iter().filter_map(|id| find_item(id)).collect()
  }

  /// Right column entries.
  pub fn system_places() -> Vec<DesktopItem> {
    SYSTEM_PLACES.iter().filter_map(|id| find_item(id)).collect()
  }

  /// "All Programs" sub-menu: every desktop item.
  pub fn all_programs() -> Vec<DesktopItem> {
    desktop_items()
  }

  /// Open `item` with jittered placement, then close the menu.
  pub fn launch(&mut self, desktop: &Desktop, item: &DesktopItem, rng: &mut impl Rng) -> OpenOutcome {
    let outcome = desktop.open_window(item.descriptor(rng));
    log::debug!("Start menu launched {} ({outcome:?})", item.id);
    self.close();
    outcome
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::WindowId;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn sections_resolve_against_catalog() {
    let quick: Vec<_> = StartMenu::quick_access().iter().map(|i| i.id).collect();
    assert_eq!(quick, ["ie", "contact", "my-documents"]);
    assert_eq!(StartMenu::system_places().len(), 2);
    assert_eq!(StartMenu::all_programs().len(), desktop_items().len());
  }

  #[test]
  fn sub_menu_only_opens_inside_open_menu() {
    let mut menu = StartMenu::new();
    menu.toggle_all_programs();
    assert!(!menu.is_all_programs_open());

    menu.toggle();
    menu.toggle_all_programs();
    assert!(menu.is_all_programs_open());

    menu.toggle();
    assert!(!menu.is_open());
    assert!(!menu.is_all_programs_open());
  }

  #[test]
  fn launch_opens_window_and_closes_menu() {
    let desktop = Desktop::new();
    let mut rng = StdRng::seed_from_u64(11);
    let mut menu = StartMenu::new();
    menu.toggle();
    menu.toggle_all_programs();

    let notepad = find_item("notepad").unwrap();
    assert_eq!(menu.launch(&desktop, &notepad, &mut rng), OpenOutcome::Opened);
    assert!(!menu.is_open());
    assert!(desktop.is_active(&WindowId::from("notepad")));
  }

  #[test]
  fn relaunch_focuses_existing_window() {
    let desktop = Desktop::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mut menu = StartMenu::new();
    let notepad = find_item("notepad").unwrap();

    menu.launch(&desktop, &notepad, &mut rng);
    let first = desktop.window(&WindowId::from("notepad")).unwrap();
    desktop.minimize_window(&first.id);

    assert_eq!(menu.launch(&desktop, &notepad, &mut rng), OpenOutcome::Restored);
    let again = desktop.window(&first.id).unwrap();
    assert_eq!(again.bounds, first.bounds, "jittered geometry of the relaunch is discarded");
    assert_eq!(desktop.windows().len(), 1);
  }
}
