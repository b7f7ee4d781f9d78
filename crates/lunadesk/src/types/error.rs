/*! Error types for the fallible edges of the desktop (configuration, persistence). */

/// Errors that can occur outside the window store itself.
///
/// Window operations never fail: an unknown id is a no-op.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("Storage error: {0}")]
  Storage(String),

  #[error("Failed to decode stored value: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("Unsupported layout version {found} (expected {expected})")]
  UnsupportedLayoutVersion { found: u32, expected: u32 },
}

/// Result type for fallible desktop operations.
pub type DeskResult<T> = Result<T, DeskError>;
