// waypoint/src/core/step.rs

//! Defines a single declarative tour step and its content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Rich content the engine cannot consume directly.
///
/// Implementors render themselves to static markup, which is what the engine
/// injects as the step's HTML content.
pub trait StaticMarkup: Send + Sync {
  fn render_static_markup(&self) -> String;
}

/// Tooltip placement relative to the step's target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
  Top,
  Left,
  Right,
  Bottom,
  BottomLeftAligned,
  BottomMiddleAligned,
  BottomRightAligned,
  TopLeftAligned,
  TopMiddleAligned,
  TopRightAligned,
  Auto,
  /// Used by engines for steps whose target could not be resolved.
  Floating,
}

impl Position {
  pub fn as_str(self) -> &'static str {
    match self {
      Position::Top => "top",
      Position::Left => "left",
      Position::Right => "right",
      Position::Bottom => "bottom",
      Position::BottomLeftAligned => "bottom-left-aligned",
      Position::BottomMiddleAligned => "bottom-middle-aligned",
      Position::BottomRightAligned => "bottom-right-aligned",
      Position::TopLeftAligned => "top-left-aligned",
      Position::TopMiddleAligned => "top-middle-aligned",
      Position::TopRightAligned => "top-right-aligned",
      Position::Auto => "auto",
      Position::Floating => "floating",
    }
  }
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// What a step points at: a selector resolved against the live document, or
/// an element the caller already holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<El> {
  Selector(String),
  Element(El),
}

impl<El> Target<El> {
  pub fn selector(selector: impl Into<String>) -> Self {
    Target::Selector(selector.into())
  }

  pub fn as_selector(&self) -> Option<&str> {
    match self {
      Target::Selector(s) => Some(s.as_str()),
      Target::Element(_) => None,
    }
  }
}

/// Step body: pre-rendered markup, or a node still to be rendered.
#[derive(Clone)]
pub enum IntroContent {
  Markup(String),
  Node(Arc<dyn StaticMarkup>),
}

impl IntroContent {
  pub fn node(node: impl StaticMarkup + 'static) -> Self {
    IntroContent::Node(Arc::new(node))
  }

  /// Static markup for this content. Plain markup is returned unchanged.
  pub fn to_markup(&self) -> String {
    match self {
      IntroContent::Markup(markup) => markup.clone(),
      IntroContent::Node(node) => node.render_static_markup(),
    }
  }

  pub fn is_node(&self) -> bool {
    matches!(self, IntroContent::Node(_))
  }
}

impl fmt::Debug for IntroContent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IntroContent::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
      IntroContent::Node(_) => f.debug_tuple("Node").field(&"<renderable>").finish(),
    }
  }
}

impl From<&str> for IntroContent {
  fn from(markup: &str) -> Self {
    IntroContent::Markup(markup.to_string())
  }
}

impl From<String> for IntroContent {
  fn from(markup: String) -> Self {
    IntroContent::Markup(markup)
  }
}

/// One stop in the tour. Order within the step list defines the step index.
#[derive(Debug, Clone)]
pub struct Step<El> {
  pub target: Target<El>,
  pub intro: IntroContent,
  pub position: Option<Position>,
  pub tooltip_class: Option<String>,
  pub highlight_class: Option<String>,
}

impl<El> Step<El> {
  pub fn new(target: Target<El>, intro: impl Into<IntroContent>) -> Self {
    Self {
      target,
      intro: intro.into(),
      position: None,
      tooltip_class: None,
      highlight_class: None,
    }
  }

  /// Shorthand for a step targeting a selector.
  pub fn on(selector: impl Into<String>, intro: impl Into<IntroContent>) -> Self {
    Self::new(Target::selector(selector), intro)
  }

  pub fn position(mut self, position: Position) -> Self {
    self.position = Some(position);
    self
  }

  pub fn tooltip_class(mut self, class: impl Into<String>) -> Self {
    self.tooltip_class = Some(class.into());
    self
  }

  pub fn highlight_class(mut self, class: impl Into<String>) -> Self {
    self.highlight_class = Some(class.into());
    self
  }
}
