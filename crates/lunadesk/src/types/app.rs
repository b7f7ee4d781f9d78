/*! Content component tags. */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which content component a window hosts.
///
/// The window manager passes this through untouched; only the content layer
/// dispatches on it (see [`ContentRegistry`](crate::ContentRegistry)).
/// Unknown tags survive as [`AppKind::Other`] so the renderer can fall back
/// to a placeholder instead of rejecting the window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppKind {
  Explorer,
  ExplorerDocs,
  RecycleBin,
  SecretProjects,
  Frontend,
  Backend,
  Web3,
  Ai,
  Contact,
  Notepad,
  Minesweeper,
  Other(String),
}

impl AppKind {
  /// Every known tag, in catalog order.
  pub const KNOWN: [AppKind; 11] = [
    AppKind::Explorer,
    AppKind::ExplorerDocs,
    AppKind::RecycleBin,
    AppKind::SecretProjects,
    AppKind::Frontend,
    AppKind::Backend,
    AppKind::Web3,
    AppKind::Ai,
    AppKind::Contact,
    AppKind::Notepad,
    AppKind::Minesweeper,
  ];

  /// Wire tag for this kind.
  pub fn tag(&self) -> &str {
    match self {
      AppKind::Explorer => "explorer",
      AppKind::ExplorerDocs => "explorer-docs",
      AppKind::RecycleBin => "recycle-bin",
      AppKind::SecretProjects => "secret-projects",
      AppKind::Frontend => "frontend",
      AppKind::Backend => "backend",
      AppKind::Web3 => "web3",
      AppKind::Ai => "ai",
      AppKind::Contact => "contact",
      AppKind::Notepad => "notepad",
      AppKind::Minesweeper => "minesweeper",
      AppKind::Other(tag) => tag,
    }
  }

  /// Parse a tag. Never fails: unknown tags become [`AppKind::Other`].
  pub fn from_tag(tag: &str) -> Self {
    Self::KNOWN
      .iter()
      .find(|kind| kind.tag() == tag)
      .cloned()
      .unwrap_or_else(|| AppKind::Other(tag.to_owned()))
  }

  /// Whether this is one of the known tags.
  pub const fn is_known(&self) -> bool {
    !matches!(self, AppKind::Other(_))
  }
}

impl From<String> for AppKind {
  fn from(tag: String) -> Self {
    Self::from_tag(&tag)
  }
}

impl From<&str> for AppKind {
  fn from(tag: &str) -> Self {
    Self::from_tag(tag)
  }
}

impl From<AppKind> for String {
  fn from(kind: AppKind) -> Self {
    match kind {
      AppKind::Other(tag) => tag,
      known => known.tag().to_owned(),
    }
  }
}

impl fmt::Display for AppKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.tag())
  }
}
