/*!
Content dispatch: which renderer fills a window.

The window manager never looks at [`AppKind`]; the content layer registers a
renderer per kind and resolves windows through [`ContentRegistry::resolve`].
Kinds without a renderer (including unknown tags) resolve to
[`Content::Placeholder`], which the skin draws as a generic
"coming soon" panel naming the component and window.
*/

use crate::types::{AppKind, Window, WindowId};
use std::collections::HashMap;

/// Result of resolving a window's content.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<'a, R> {
  /// A renderer was registered for this kind.
  Renderer(&'a R),
  /// No renderer: show a generic panel.
  Placeholder {
    /// Kind nothing is registered for.
    component: &'a AppKind,
    /// Window the panel is shown in.
    window_id: &'a WindowId,
  },
}

/// Lookup table from content kind to renderer.
#[derive(Debug, Clone)]
pub struct ContentRegistry<R> {
  renderers: HashMap<AppKind, R>,
}

impl<R> Default for ContentRegistry<R> {
  fn default() -> Self {
    Self {
      renderers: HashMap::new(),
    }
  }
}

impl<R> ContentRegistry<R> {
  /// Registry with no renderers; everything resolves to the placeholder.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register (or replace) the renderer for `kind`.
  pub fn register(&mut self, kind: AppKind, renderer: R) -> &mut Self {
    if self.renderers.insert(kind.clone(), renderer).is_some() {
      log::debug!("Replaced renderer for {kind}");
    }
    self
  }

  /// Whether `kind` has its own renderer.
  pub fn is_registered(&self, kind: &AppKind) -> bool {
    self.renderers.contains_key(kind)
  }

  /// Renderer for a window, or the placeholder fallback.
  pub fn resolve<'a>(&'a self, window: &'a Window) -> Content<'a, R> {
    self.renderers.get(&window.component).map_or_else(
      || Content::Placeholder {
        component: &window.component,
        window_id: &window.id,
      },
      Content::Renderer,
    )
  }
}
