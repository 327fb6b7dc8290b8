// waypoint/src/adapter/mod.rs

//! Defines the `TourAdapter<E>` struct and its host lifecycle entry points.
//! Configuration sync, the visibility state machine and element re-binding
//! live in their own impl blocks.

pub mod config_sync;
pub mod rebind;
pub mod relay;
pub mod visibility;

use crate::core::control::{Reconciliation, Visibility};
use crate::core::props::TourProps;
use crate::engine::document::HeadlessProbe;
use crate::engine::handle::EngineHandle;
use crate::engine::TourEngine;
use crate::schedule::TurnScheduler;
use relay::{EventRelay, VisibilityProbe};
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Keeps one external tour engine consistent with the latest declarative props.
///
/// The host drives it through three calls, in order: [`TourAdapter::mount`]
/// once, [`TourAdapter::update`] on every later props change, and
/// [`TourAdapter::unmount`] once. All engine mutation goes through these
/// (plus [`TourAdapter::rebind_step`]); nothing else touches the engine.
///
/// Never call `update` from inside a consumer callback: the callbacks run while
/// the engine is mid-transition, and replacing its options there corrupts the
/// in-progress step state.
pub struct TourAdapter<E: TourEngine> {
  pub(crate) handle: EngineHandle<E>,
  pub(crate) relay: EventRelay<E::Element>,
  pub(crate) props: Option<TourProps<E::Element>>,
  pub(crate) configured: bool,
}

impl<E: TourEngine> TourAdapter<E> {
  /// Creates the adapter and installs its engine.
  ///
  /// In a headless context the engine is never created and every later
  /// lifecycle call leaves it untouched.
  pub fn install<P, F>(probe: &P, factory: F, scheduler: Arc<dyn TurnScheduler>) -> Self
  where
    P: HeadlessProbe + ?Sized,
    F: FnOnce() -> E,
  {
    let relay = EventRelay::new(scheduler);
    let handle = EngineHandle::install(probe, factory, &relay);
    Self {
      handle,
      relay,
      props: None,
      configured: false,
    }
  }

  /// First-mount hook. Configures and starts only when initially enabled.
  #[instrument(
    name = "TourAdapter::mount",
    skip_all,
    fields(enabled = props.enabled, steps = props.steps.len(), initial_step = props.initial_step)
  )]
  pub fn mount(&mut self, props: TourProps<E::Element>) -> Reconciliation {
    if self.props.is_some() {
      event!(Level::WARN, "mount() called twice, treating as update().");
      return self.update(props);
    }
    self.relay.replace_callbacks(props.callbacks.clone());
    let enabled = props.enabled;
    self.props = Some(props);

    let mut outcome = Reconciliation::default();
    if enabled {
      outcome.configured = self.configure();
      outcome.transition = self.sync_visibility();
    }
    outcome
  }

  /// Reconciliation hook, run with every new props snapshot.
  ///
  /// Configures when never configured or when `steps`/`options` changed
  /// identity, then re-evaluates visibility if configuration ran or `enabled`
  /// flipped. Anything else leaves the engine alone.
  #[instrument(
    name = "TourAdapter::update",
    skip_all,
    fields(enabled = props.enabled, steps = props.steps.len())
  )]
  pub fn update(&mut self, props: TourProps<E::Element>) -> Reconciliation {
    self.relay.replace_callbacks(props.callbacks.clone());
    let (config_changed, enabled_changed) = match &self.props {
      Some(previous) => (props.config_changed_since(previous), previous.enabled != props.enabled),
      None => (true, true),
    };
    self.props = Some(props);

    let mut outcome = Reconciliation::default();
    if !self.configured || config_changed {
      outcome.configured = self.configure();
    }
    if outcome.configured || enabled_changed {
      outcome.transition = self.sync_visibility();
    } else {
      event!(Level::TRACE, "No configuration or enabled change, engine untouched.");
    }
    outcome
  }

  /// Teardown hook. Exits the engine once and releases it.
  #[instrument(name = "TourAdapter::unmount", skip_all)]
  pub fn unmount(&mut self) {
    if self.handle.is_torn_down() {
      event!(Level::WARN, "unmount() called twice, engine already released.");
      return;
    }
    if self.handle.teardown() {
      // The engine's exit hook has already reported Hidden unless the engine
      // skipped it (tour never started).
      self.relay.set_visibility(Visibility::Hidden);
    }
  }

  pub fn is_installed(&self) -> bool {
    self.handle.is_installed()
  }

  pub fn is_configured(&self) -> bool {
    self.configured
  }

  pub fn is_visible(&self) -> bool {
    self.relay.is_visible()
  }

  pub fn visibility(&self) -> Visibility {
    self.relay.visibility()
  }

  /// A cheap, cloneable view of the visibility flag for observers outside the adapter.
  pub fn visibility_probe(&self) -> VisibilityProbe {
    self.relay.probe()
  }

  pub fn engine(&self) -> Option<&E> {
    self.handle.engine()
  }

  pub fn current_step_index(&self) -> Option<usize> {
    self.handle.engine().and_then(|e| e.current_step_index())
  }

  pub fn props(&self) -> Option<&TourProps<E::Element>> {
    self.props.as_ref()
  }
}

impl<E: TourEngine + std::fmt::Debug> std::fmt::Debug for TourAdapter<E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TourAdapter")
      .field("handle", &self.handle)
      .field("relay", &self.relay)
      .field("configured", &self.configured)
      .field("mounted", &self.props.is_some())
      .finish()
  }
}
