/*! Key-value persistence seam (browser local storage in production). */

use crate::types::{DeskError, DeskResult};
use std::collections::HashMap;

/// Minimal string key-value store.
pub trait KeyValueStore {
  /// Stored value for `key`, if any.
  fn get(&self, key: &str) -> Option<String>;
  /// Store `value`, replacing any previous entry.
  fn set(&mut self, key: &str, value: String) -> DeskResult<()>;
  /// Forget `key`. Missing keys are ignored.
  fn remove(&mut self, key: &str);
}

/// In-memory store for tests and non-browser hosts.
///
/// An optional byte quota mimics the browser's storage limit: a write that
/// would push keys plus values past it fails with [`DeskError::Storage`] and
/// leaves the previous entry in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: HashMap<String, String>,
  quota: Option<usize>,
}

impl MemoryStore {
  /// Unbounded store.
  pub fn new() -> Self {
    Self::default()
  }

  /// Store that rejects writes past `bytes`.
  pub fn with_quota(bytes: usize) -> Self {
    Self {
      entries: HashMap::new(),
      quota: Some(bytes),
    }
  }

  fn used_without(&self, key: &str) -> usize {
    self
      .entries
      .iter()
      .filter(|(k, _)| k.as_str() != key)
      .map(|(k, v)| k.len() + v.len())
      .sum()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: String) -> DeskResult<()> {
    if let Some(quota) = self.quota {
      let needed = self.used_without(key) + key.len() + value.len();
      if needed > quota {
        return Err(DeskError::Storage(format!(
          "writing {key} needs {needed} bytes, quota is {quota}"
        )));
      }
    }
    self.entries.insert(key.to_owned(), value);
    Ok(())
  }

  fn remove(&mut self, key: &str) {
    self.entries.remove(key);
  }
}
