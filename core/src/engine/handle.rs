// waypoint/src/engine/handle.rs

//! Exclusive ownership of the one engine instance an adapter drives.

use super::document::HeadlessProbe;
use super::TourEngine;
use crate::adapter::relay::EventRelay;
use tracing::{event, instrument, Level};

/// Owns the adapter's engine for its whole lifetime.
///
/// Empty when installation was skipped in a headless context, and again after
/// [`EngineHandle::teardown`].
#[derive(Debug)]
pub struct EngineHandle<E: TourEngine> {
  engine: Option<E>,
  torn_down: bool,
}

impl<E: TourEngine> EngineHandle<E> {
  /// Creates the engine and registers the relay's six hooks on it, exactly once.
  ///
  /// A no-op in headless contexts: `factory` is never called.
  #[instrument(name = "EngineHandle::install", skip_all, fields(engine_type = %std::any::type_name::<E>()))]
  pub fn install<P, F>(probe: &P, factory: F, relay: &EventRelay<E::Element>) -> Self
  where
    P: HeadlessProbe + ?Sized,
    F: FnOnce() -> E,
  {
    if probe.is_headless() {
      event!(Level::DEBUG, "Headless context, engine installation skipped.");
      return Self {
        engine: None,
        torn_down: false,
      };
    }

    let mut engine = factory();
    relay.register(&mut engine);
    event!(Level::DEBUG, "Engine installed and event hooks registered.");
    Self {
      engine: Some(engine),
      torn_down: false,
    }
  }

  pub fn is_installed(&self) -> bool {
    self.engine.is_some()
  }

  pub fn is_torn_down(&self) -> bool {
    self.torn_down
  }

  pub fn engine(&self) -> Option<&E> {
    self.engine.as_ref()
  }

  pub(crate) fn engine_mut(&mut self) -> Option<&mut E> {
    self.engine.as_mut()
  }

  /// Exits the engine and releases it. Only the first call reaches the engine.
  ///
  /// The exit is forced: the owner is going away, so a before-exit veto
  /// cannot keep the tour open.
  #[instrument(name = "EngineHandle::teardown", skip_all)]
  pub fn teardown(&mut self) -> bool {
    match self.engine.take() {
      Some(mut engine) => {
        self.torn_down = true;
        engine.exit(true);
        event!(Level::DEBUG, "Engine exited and released.");
        true
      }
      None => {
        event!(Level::TRACE, torn_down = self.torn_down, "Teardown skipped, no engine held.");
        false
      }
    }
  }
}
