/*! Right-click context menu state. */

use crate::types::Point;

/// One context-menu row.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<A> {
  /// Row text.
  pub label: String,
  /// Returned by [`ContextMenu::select`] when this row is picked.
  pub action: A,
  /// Rendered as a separator line; never selectable.
  pub divider: bool,
  /// Greyed out; clicking does nothing.
  pub disabled: bool,
}

impl<A> MenuItem<A> {
  /// Enabled row.
  pub fn new(label: impl Into<String>, action: A) -> Self {
    Self {
      label: label.into(),
      action,
      divider: false,
      disabled: false,
    }
  }

  /// Grey the row out.
  #[must_use]
  pub fn disabled(mut self) -> Self {
    self.disabled = true;
    self
  }

  /// Separator row. It still needs an action value to keep the item list homogeneous.
  pub fn divider(action: A) -> Self {
    Self {
      label: String::new(),
      action,
      divider: true,
      disabled: true,
    }
  }

  const fn selectable(&self) -> bool {
    !self.divider && !self.disabled
  }
}

/// Context menu, generic over the action type the caller dispatches on.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu<A> {
  open: bool,
  position: Point,
  items: Vec<MenuItem<A>>,
}

impl<A> Default for ContextMenu<A> {
  fn default() -> Self {
    Self {
      open: false,
      position: Point::new(0.0, 0.0),
      items: Vec::new(),
    }
  }
}

impl<A: Clone> ContextMenu<A> {
  /// Closed, empty menu.
  pub fn new() -> Self {
    Self::default()
  }

  pub const fn is_open(&self) -> bool {
    self.open
  }

  /// Pointer position the menu was opened at.
  pub const fn position(&self) -> Point {
    self.position
  }

  /// Rows of the current menu.
  pub fn items(&self) -> &[MenuItem<A>] {
    &self.items
  }

  /// Show `items` at `position`, replacing whatever was shown before.
  pub fn open(&mut self, position: Point, items: Vec<MenuItem<A>>) {
    self.open = true;
    self.position = position;
    self.items = items;
  }

  /// Hide the menu. Items are kept until the next `open`.
  pub fn close(&mut self) {
    self.open = false;
  }

  /// Click on row `index`. Returns the action and closes the menu if the row
  /// is selectable; otherwise the menu stays open and nothing happens.
  pub fn select(&mut self, index: usize) -> Option<A> {
    if !self.open {
      return None;
    }
    let action = self
      .items
      .get(index)
      .filter(|item| item.selectable())
      .map(|item| item.action.clone())?;
    self.close();
    Some(action)
  }
}
