// waypoint/src/engine/mod.rs

//! The contract the adapter consumes from an external tour engine, plus the
//! configuration shapes pushed into it.

pub mod document;
pub mod handle;
pub mod memory;

use crate::core::control::TransitionControl;
use crate::core::options::TourOptions;
use crate::core::step::{Position, Target};

pub use handle::EngineHandle;

/// Engine hook fired on exit with the step index current at that moment.
pub type ExitHook = Box<dyn Fn(Option<usize>) + Send + Sync + 'static>;
pub type BeforeExitHook = Box<dyn Fn(Option<usize>) -> TransitionControl + Send + Sync + 'static>;
/// Fired before a step change with the committed (pre-transition) index and the next element.
pub type BeforeChangeHook<El> = Box<dyn Fn(Option<usize>, Option<&El>) -> TransitionControl + Send + Sync + 'static>;
/// Fired around a step change with the new index and its element.
pub type ChangeHook<El> = Box<dyn Fn(Option<usize>, Option<&El>) + Send + Sync + 'static>;
pub type CompleteHook = Box<dyn Fn() + Send + Sync + 'static>;

/// A step in the engine's configuration format: content is always static markup.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineStep<El> {
  pub element: Target<El>,
  pub intro: String,
  pub position: Option<Position>,
  pub tooltip_class: Option<String>,
  pub highlight_class: Option<String>,
}

/// The object handed to [`TourEngine::set_options`]: options merged with the
/// synthesized steps.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig<El> {
  pub options: TourOptions,
  pub steps: Vec<EngineStep<El>>,
}

/// A live, resolved step as the engine holds it once the tour has started.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineItem<El> {
  /// `None` when the target could not be resolved at start.
  pub element: Option<El>,
  pub position: Position,
  pub intro: String,
  pub tooltip_class: Option<String>,
  pub highlight_class: Option<String>,
}

/// An imperative, stateful tour engine.
///
/// Engines invoke the registered hooks synchronously from inside `start`,
/// `exit`, `go_to_step_number` and their own navigation. Hooks receive the
/// step index themselves, so a hook never needs to read back into the engine
/// while the engine is mid-call.
pub trait TourEngine {
  type Element: Clone + Send + Sync + 'static;

  /// Replaces the engine configuration wholesale.
  fn set_options(&mut self, config: EngineConfig<Self::Element>);
  fn start(&mut self);
  /// Ends the tour. Without `force` the before-exit hook may veto.
  fn exit(&mut self, force: bool);
  /// Moves to a 1-based step number.
  fn go_to_step_number(&mut self, step_number: usize);
  fn current_step_index(&self) -> Option<usize>;

  /// A step of the effective configuration, as last passed to `set_options`.
  fn configured_step(&self, index: usize) -> Option<EngineStep<Self::Element>>;
  fn configured_step_count(&self) -> usize;

  /// The live item for `index`, if the engine has built its items.
  fn item(&self, index: usize) -> Option<EngineItem<Self::Element>>;
  /// Rebinds a live item's element and position. Returns `false` when no such item exists.
  fn bind_item(&mut self, index: usize, element: Self::Element, position: Position) -> bool;

  fn on_exit(&mut self, hook: ExitHook);
  fn on_before_exit(&mut self, hook: BeforeExitHook);
  fn on_before_change(&mut self, hook: BeforeChangeHook<Self::Element>);
  fn on_after_change(&mut self, hook: ChangeHook<Self::Element>);
  fn on_change(&mut self, hook: ChangeHook<Self::Element>);
  fn on_complete(&mut self, hook: CompleteHook);
}
