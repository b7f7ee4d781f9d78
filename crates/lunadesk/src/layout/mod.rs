/*!
Desktop icon layout and its persistence.

Icon positions are the only state kept across sessions. The stored blob is
versioned JSON, and it is trusted only when it decodes, carries the current
version and covers every icon currently on the desktop. Anything else falls
back to the computed grid, so adding an icon or changing the format never
leaves an icon without a position.
*/

mod storage;

pub use storage::{KeyValueStore, MemoryStore};

use crate::types::{DeskError, DeskResult, DesktopArea, Point};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key for the layout blob.
pub const LAYOUT_KEY: &str = "lunadesk-icon-layout";
/// Current blob version. Bump when the stored shape changes.
pub const LAYOUT_VERSION: u32 = 1;

const GRID_ORIGIN: Point = Point::new(8.0, 8.0);
const CELL_WIDTH: f64 = 75.0;
const CELL_HEIGHT: f64 = 90.0;

/// Icon id to top-left position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconLayout {
  /// Format version, checked against [`LAYOUT_VERSION`] on load.
  pub version: u32,
  /// Top-left corner of each icon, keyed by desktop item id.
  pub positions: BTreeMap<String, Point>,
}

impl IconLayout {
  /// Column-major grid from the top-left corner, starting a new column when
  /// the next icon would cross the bottom of the desktop area.
  pub fn default_grid<'a>(ids: impl IntoIterator<Item = &'a str>, area: &DesktopArea) -> Self {
    let bottom = area.maximized_bounds().h;
    let mut positions = BTreeMap::new();
    let mut cursor = GRID_ORIGIN;

    for id in ids {
      if cursor.y > GRID_ORIGIN.y && cursor.y + CELL_HEIGHT > bottom {
        cursor = Point::new(cursor.x + CELL_WIDTH, GRID_ORIGIN.y);
      }
      positions.insert(id.to_owned(), cursor);
      cursor.y += CELL_HEIGHT;
    }

    Self {
      version: LAYOUT_VERSION,
      positions,
    }
  }

  /// Load the stored layout, falling back to [`IconLayout::default_grid`] when
  /// it is missing, undecodable, from another version, or incomplete.
  pub fn load<'a>(
    store: &impl KeyValueStore,
    expected: impl IntoIterator<Item = &'a str> + Clone,
    area: &DesktopArea,
  ) -> Self {
    match Self::read(store) {
      Ok(Some(layout)) if layout.covers(expected.clone()) => layout,
      Ok(Some(_)) => {
        log::warn!("Stored icon layout is missing icons, using default grid");
        Self::default_grid(expected, area)
      }
      Ok(None) => Self::default_grid(expected, area),
      Err(e) => {
        log::warn!("Discarding stored icon layout: {e}");
        Self::default_grid(expected, area)
      }
    }
  }

  /// Read and version-check the stored blob without validating coverage.
  pub fn read(store: &impl KeyValueStore) -> DeskResult<Option<Self>> {
    let Some(raw) = store.get(LAYOUT_KEY) else {
      return Ok(None);
    };
    let layout: Self = serde_json::from_str(&raw)?;
    if layout.version != LAYOUT_VERSION {
      return Err(DeskError::UnsupportedLayoutVersion {
        found: layout.version,
        expected: LAYOUT_VERSION,
      });
    }
    Ok(Some(layout))
  }

  /// Persist under [`LAYOUT_KEY`].
  pub fn save(&self, store: &mut impl KeyValueStore) -> DeskResult<()> {
    let raw = serde_json::to_string(self)?;
    store.set(LAYOUT_KEY, raw)
  }

  /// Whether every id has a position.
  pub fn covers<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
    ids.into_iter().all(|id| self.positions.contains_key(id))
  }

  /// Forget the stored layout and lay the icons out on the default grid
  /// ("Arrange Icons").
  pub fn reset<'a>(
    store: &mut impl KeyValueStore,
    ids: impl IntoIterator<Item = &'a str>,
    area: &DesktopArea,
  ) -> Self {
    store.remove(LAYOUT_KEY);
    Self::default_grid(ids, area)
  }

  /// Where `id` sits, if it has a position.
  pub fn position(&self, id: &str) -> Option<Point> {
    self.positions.get(id).copied()
  }

  /// Drop an icon at a new spot. Positions never go above/left of the origin.
  pub fn move_icon(&mut self, id: &str, to: Point) {
    self.positions.insert(id.to_owned(), to.clamp_non_negative());
  }
}
