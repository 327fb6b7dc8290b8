// waypoint/src/engine/document.rs

//! Document-side collaborators: element lookup by selector and headless detection.

use crate::core::shared::Shared;
use std::collections::HashMap;

/// The live document a tour runs against.
pub trait Document {
  type Element: Clone + Send + Sync + 'static;

  /// The first element matching `selector`, if one exists right now.
  fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}

impl<D: Document + ?Sized> Document for &D {
  type Element = D::Element;

  fn query_selector(&self, selector: &str) -> Option<Self::Element> {
    (**self).query_selector(selector)
  }
}

/// Reports whether the current execution context lacks an interactive document.
pub trait HeadlessProbe {
  fn is_headless(&self) -> bool;
}

/// A fixed answer for [`HeadlessProbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderContext {
  #[default]
  Interactive,
  /// Server-side or otherwise document-less; the engine is never created.
  Headless,
}

impl HeadlessProbe for RenderContext {
  fn is_headless(&self) -> bool {
    matches!(self, RenderContext::Headless)
  }
}

impl HeadlessProbe for bool {
  fn is_headless(&self) -> bool {
    *self
  }
}

impl<F: Fn() -> bool> HeadlessProbe for F {
  fn is_headless(&self) -> bool {
    self()
  }
}

/// An in-memory selector table. Clones share the same table, so elements
/// inserted after a tour was configured become visible to every holder.
#[derive(Debug)]
pub struct MemoryDocument<El: Send + Sync + 'static> {
  elements: Shared<HashMap<String, El>>,
}

impl<El: Clone + Send + Sync + 'static> MemoryDocument<El> {
  pub fn new() -> Self {
    Self {
      elements: Shared::new(HashMap::new()),
    }
  }

  /// Adds (or replaces) the element matching `selector`.
  pub fn insert(&self, selector: impl Into<String>, element: El) {
    self.elements.write().insert(selector.into(), element);
  }

  pub fn remove(&self, selector: &str) -> Option<El> {
    self.elements.write().remove(selector)
  }

  pub fn contains(&self, selector: &str) -> bool {
    self.elements.read().contains_key(selector)
  }

  pub fn len(&self) -> usize {
    self.elements.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.read().is_empty()
  }
}

impl<El: Clone + Send + Sync + 'static> Default for MemoryDocument<El> {
  fn default() -> Self {
    Self::new()
  }
}

impl<El: Send + Sync + 'static> Clone for MemoryDocument<El> {
  fn clone(&self) -> Self {
    Self {
      elements: self.elements.clone(),
    }
  }
}

impl<El: Clone + Send + Sync + 'static> Document for MemoryDocument<El> {
  type Element = El;

  fn query_selector(&self, selector: &str) -> Option<El> {
    self.elements.read().get(selector).cloned()
  }
}
