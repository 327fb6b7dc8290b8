// waypoint/src/engine/memory.rs

//! A deterministic, document-less tour engine.
//!
//! `MemoryEngine` follows the observable behavior of a browser tour engine
//! closely enough to drive the adapter end to end: items are resolved from the
//! configuration at `start()`, the first step is shown before `start()` returns
//! (firing change events while the adapter still considers the tour hidden),
//! navigation runs through the before-change veto, and stepping past the last
//! item completes and exits the tour.
//!
//! Clones share all state. Hand one clone to the adapter's factory and keep
//! another to play the end user (`next_step`, `previous_step`, `skip`).

use super::document::Document;
use super::{
  BeforeChangeHook, BeforeExitHook, ChangeHook, CompleteHook, EngineConfig, EngineItem, EngineStep, ExitHook,
  TourEngine,
};
use crate::core::control::TransitionControl;
use crate::core::shared::Shared;
use crate::core::step::{Position, Target};
use std::fmt;
use std::sync::Arc;
use tracing::{event, Level};

/// One call made on the engine, in order. Tests read these back through
/// [`MemoryEngine::journal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
  SetOptions { steps: usize },
  Start,
  Exit { force: bool },
  GoToStepNumber(usize),
  NextStep,
  PreviousStep,
  BindItem { index: usize },
}

type ObserverFn = Arc<dyn Fn(&EngineCall) + Send + Sync + 'static>;

struct EngineState<El> {
  config: Option<EngineConfig<El>>,
  items: Vec<EngineItem<El>>,
  cursor: Option<usize>,
  active: bool,
  journal: Vec<EngineCall>,
}

struct HookSet<El> {
  exit: Option<Arc<dyn Fn(Option<usize>) + Send + Sync>>,
  before_exit: Option<Arc<dyn Fn(Option<usize>) -> TransitionControl + Send + Sync>>,
  before_change: Option<Arc<dyn Fn(Option<usize>, Option<&El>) -> TransitionControl + Send + Sync>>,
  after_change: Option<Arc<dyn Fn(Option<usize>, Option<&El>) + Send + Sync>>,
  change: Option<Arc<dyn Fn(Option<usize>, Option<&El>) + Send + Sync>>,
  complete: Option<Arc<dyn Fn() + Send + Sync>>,
}

pub struct MemoryEngine<D: Document> {
  document: D,
  state: Shared<EngineState<D::Element>>,
  hooks: Shared<HookSet<D::Element>>,
  observer: Option<ObserverFn>,
}

impl<D: Document> MemoryEngine<D> {
  pub fn new(document: D) -> Self {
    Self {
      document,
      state: Shared::new(EngineState {
        config: None,
        items: Vec::new(),
        cursor: None,
        active: false,
        journal: Vec::new(),
      }),
      hooks: Shared::new(HookSet {
        exit: None,
        before_exit: None,
        before_change: None,
        after_change: None,
        change: None,
        complete: None,
      }),
      observer: None,
    }
  }

  /// Calls `observer` with every engine call before the engine acts on it.
  pub fn with_observer(mut self, observer: impl Fn(&EngineCall) + Send + Sync + 'static) -> Self {
    self.observer = Some(Arc::new(observer));
    self
  }

  pub fn is_active(&self) -> bool {
    self.state.read().active
  }

  pub fn journal(&self) -> Vec<EngineCall> {
    self.state.read().journal.clone()
  }

  /// How many journaled calls satisfy `pred`.
  pub fn count_calls(&self, pred: impl Fn(&EngineCall) -> bool) -> usize {
    self.state.read().journal.iter().filter(|c| pred(c)).count()
  }

  pub fn items(&self) -> Vec<EngineItem<D::Element>> {
    self.state.read().items.clone()
  }

  pub fn config(&self) -> Option<EngineConfig<D::Element>> {
    self.state.read().config.clone()
  }

  /// Advances one step, as the engine's "next" button would.
  pub fn next_step(&self) -> bool {
    self.record(EngineCall::NextStep);
    let (active, cursor) = self.state.with(|s| (s.active, s.cursor));
    if !active {
      return false;
    }
    self.move_to(cursor.map_or(0, |c| c + 1))
  }

  /// Goes back one step, as the engine's "back" button would.
  pub fn previous_step(&self) -> bool {
    self.record(EngineCall::PreviousStep);
    let (active, cursor) = self.state.with(|s| (s.active, s.cursor));
    match cursor {
      Some(c) if active && c > 0 => self.move_to(c - 1),
      _ => false,
    }
  }

  /// The user dismissing the tour (skip button, overlay click, escape key).
  pub fn skip(&self) {
    self.exit_tour(false);
  }

  fn record(&self, call: EngineCall) {
    self.state.write().journal.push(call.clone());
    if let Some(observer) = &self.observer {
      observer(&call);
    }
  }

  fn resolve_items(&self, config: &EngineConfig<D::Element>) -> Vec<EngineItem<D::Element>> {
    config
      .steps
      .iter()
      .map(|step: &EngineStep<D::Element>| {
        let element = match &step.element {
          Target::Selector(selector) => self.document.query_selector(selector),
          Target::Element(element) => Some(element.clone()),
        };
        let position = match element {
          Some(_) => step
            .position
            .or(config.options.tooltip_position)
            .unwrap_or(Position::Bottom),
          None => Position::Floating,
        };
        EngineItem {
          element,
          position,
          intro: step.intro.clone(),
          tooltip_class: step.tooltip_class.clone(),
          highlight_class: step.highlight_class.clone(),
        }
      })
      .collect()
  }

  fn start_tour(&self) {
    self.record(EngineCall::Start);
    let Some(config) = self.state.with(|s| s.config.clone()) else {
      event!(Level::WARN, "start() called before set_options(), nothing to show.");
      return;
    };
    let items = self.resolve_items(&config);
    if items.is_empty() {
      event!(Level::DEBUG, "No steps configured, tour not started.");
      return;
    }
    self.state.update(|s| {
      s.items = items;
      s.cursor = None;
      s.active = true;
    });
    // The first step is shown before start() returns.
    self.move_to(0);
  }

  fn move_to(&self, target: usize) -> bool {
    let (from, len, next_element) = self.state.with(|s| {
      (
        s.cursor,
        s.items.len(),
        s.items.get(target).and_then(|item| item.element.clone()),
      )
    });

    if let Some(before_change) = self.hooks.with(|h| h.before_change.clone()) {
      if before_change(from, next_element.as_ref()).is_blocked() {
        event!(Level::DEBUG, ?from, target, "Step change vetoed.");
        return false;
      }
    }

    if target >= len {
      if let Some(complete) = self.hooks.with(|h| h.complete.clone()) {
        complete();
      }
      self.exit_tour(false);
      return false;
    }

    self.state.update(|s| s.cursor = Some(target));
    let (change, after_change) = self.hooks.with(|h| (h.change.clone(), h.after_change.clone()));
    if let Some(change) = change {
      change(Some(target), next_element.as_ref());
    }
    if let Some(after_change) = after_change {
      after_change(Some(target), next_element.as_ref());
    }
    true
  }

  fn exit_tour(&self, force: bool) {
    self.record(EngineCall::Exit { force });
    let (active, cursor) = self.state.with(|s| (s.active, s.cursor));
    if !active {
      return;
    }
    if !force {
      if let Some(before_exit) = self.hooks.with(|h| h.before_exit.clone()) {
        if before_exit(cursor).is_blocked() {
          event!(Level::DEBUG, ?cursor, "Exit vetoed, tour stays open.");
          return;
        }
      }
    }
    self.state.update(|s| s.active = false);
    if let Some(exit) = self.hooks.with(|h| h.exit.clone()) {
      exit(cursor);
    }
    self.state.update(|s| s.cursor = None);
  }
}

impl<D: Document + Clone> Clone for MemoryEngine<D> {
  fn clone(&self) -> Self {
    Self {
      document: self.document.clone(),
      state: self.state.clone(),
      hooks: self.hooks.clone(),
      observer: self.observer.clone(),
    }
  }
}

impl<D: Document> fmt::Debug for MemoryEngine<D> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = self.state.read();
    f.debug_struct("MemoryEngine")
      .field("active", &s.active)
      .field("cursor", &s.cursor)
      .field("items", &s.items.len())
      .field("configured_steps", &s.config.as_ref().map(|c| c.steps.len()))
      .finish()
  }
}

impl<D: Document> TourEngine for MemoryEngine<D> {
  type Element = D::Element;

  fn set_options(&mut self, config: EngineConfig<D::Element>) {
    self.record(EngineCall::SetOptions {
      steps: config.steps.len(),
    });
    self.state.write().config = Some(config);
  }

  fn start(&mut self) {
    self.start_tour();
  }

  fn exit(&mut self, force: bool) {
    self.exit_tour(force);
  }

  fn go_to_step_number(&mut self, step_number: usize) {
    self.record(EngineCall::GoToStepNumber(step_number));
    let (active, len) = self.state.with(|s| (s.active, s.items.len()));
    if !active || step_number == 0 || step_number > len {
      event!(Level::DEBUG, step_number, len, active, "Step number ignored.");
      return;
    }
    self.move_to(step_number - 1);
  }

  fn current_step_index(&self) -> Option<usize> {
    self.state.read().cursor
  }

  fn configured_step(&self, index: usize) -> Option<EngineStep<D::Element>> {
    self.state.read().config.as_ref().and_then(|c| c.steps.get(index).cloned())
  }

  fn configured_step_count(&self) -> usize {
    self.state.read().config.as_ref().map_or(0, |c| c.steps.len())
  }

  fn item(&self, index: usize) -> Option<EngineItem<D::Element>> {
    self.state.read().items.get(index).cloned()
  }

  fn bind_item(&mut self, index: usize, element: D::Element, position: Position) -> bool {
    self.record(EngineCall::BindItem { index });
    self.state.update(|s| match s.items.get_mut(index) {
      Some(item) => {
        item.element = Some(element);
        item.position = position;
        true
      }
      None => false,
    })
  }

  fn on_exit(&mut self, hook: ExitHook) {
    self.hooks.write().exit = Some(Arc::from(hook));
  }

  fn on_before_exit(&mut self, hook: BeforeExitHook) {
    self.hooks.write().before_exit = Some(Arc::from(hook));
  }

  fn on_before_change(&mut self, hook: BeforeChangeHook<D::Element>) {
    self.hooks.write().before_change = Some(Arc::from(hook));
  }

  fn on_after_change(&mut self, hook: ChangeHook<D::Element>) {
    self.hooks.write().after_change = Some(Arc::from(hook));
  }

  fn on_change(&mut self, hook: ChangeHook<D::Element>) {
    self.hooks.write().change = Some(Arc::from(hook));
  }

  fn on_complete(&mut self, hook: CompleteHook) {
    self.hooks.write().complete = Some(Arc::from(hook));
  }
}
