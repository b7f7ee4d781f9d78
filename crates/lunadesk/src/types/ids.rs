/*! Branded ID types for type-safe window references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Window identifier, supplied by whoever opens the window.
///
/// Single-instance apps use a fixed id (`"notepad"`), so opening them twice
/// raises the existing window. Multi-instance apps mint a fresh id per launch
/// with [`WindowId::instance`].
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS, Display, From, Into,
)]
#[ts(export)]
pub struct WindowId(pub String);

impl WindowId {
  /// Create an id from anything string-like.
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// Id for one instance of a multi-instance app: `"{template}-{stamp}"`.
  ///
  /// ```
  /// use lunadesk::WindowId;
  ///
  /// let id = WindowId::instance("classified-alpha", 1_700_000_000_000);
  /// assert_eq!(id.as_str(), "classified-alpha-1700000000000");
  /// ```
  pub fn instance(template: &str, stamp: u64) -> Self {
    Self(format!("{template}-{stamp}"))
  }

  /// Borrow the raw id.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for WindowId {
  fn from(id: &str) -> Self {
    Self(id.to_owned())
  }
}

impl PartialEq<str> for WindowId {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for WindowId {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn instance_ids_differ_by_stamp() {
    let a = WindowId::instance("secret", 1);
    let b = WindowId::instance("secret", 2);
    assert_ne!(a, b);
    assert_eq!(a, "secret-1");
  }

  #[test]
  fn serializes_as_plain_string() {
    let id = WindowId::from("my-computer");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"my-computer\"");
    let back: WindowId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
  }
}
