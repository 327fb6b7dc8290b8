// waypoint/src/adapter/relay.rs

//! Bridges engine-native hooks to consumer callbacks, applying the visibility
//! gate and the before-exit/before-change veto protocol.

use crate::core::control::{TransitionControl, Visibility};
use crate::core::props::TourCallbacks;
use crate::core::shared::Shared;
use crate::engine::TourEngine;
use crate::schedule::TurnScheduler;
use std::fmt;
use std::sync::Arc;
use tracing::{event, Level};

/// Read-only view of the adapter's visibility belief.
#[derive(Debug, Clone)]
pub struct VisibilityProbe(Shared<Visibility>);

impl VisibilityProbe {
  pub fn get(&self) -> Visibility {
    self.0.get()
  }

  pub fn is_visible(&self) -> bool {
    self.0.get().is_visible()
  }
}

/// The handler side of the six engine hooks.
///
/// Clones share visibility and callbacks; each registered hook holds one.
pub struct EventRelay<El: 'static> {
  visibility: Shared<Visibility>,
  callbacks: Shared<Option<TourCallbacks<El>>>,
  scheduler: Arc<dyn TurnScheduler>,
}

impl<El: 'static> EventRelay<El> {
  pub fn new(scheduler: Arc<dyn TurnScheduler>) -> Self {
    Self {
      visibility: Shared::new(Visibility::Hidden),
      callbacks: Shared::new(None),
      scheduler,
    }
  }

  /// Registers one hook per engine event. Called once, at install.
  pub fn register<E>(&self, engine: &mut E)
  where
    E: TourEngine<Element = El>,
  {
    let relay = self.clone();
    engine.on_exit(Box::new(move |cursor: Option<usize>| relay.exit(cursor)));
    let relay = self.clone();
    engine.on_before_exit(Box::new(move |cursor: Option<usize>| relay.before_exit(cursor)));
    let relay = self.clone();
    engine.on_before_change(Box::new(move |cursor: Option<usize>, next: Option<&El>| {
      relay.before_change(cursor, next)
    }));
    let relay = self.clone();
    engine.on_after_change(Box::new(move |cursor: Option<usize>, element: Option<&El>| {
      relay.after_change(cursor, element)
    }));
    let relay = self.clone();
    engine.on_change(Box::new(move |cursor: Option<usize>, element: Option<&El>| {
      relay.change(cursor, element)
    }));
    let relay = self.clone();
    engine.on_complete(Box::new(move || relay.complete()));
  }

  pub fn visibility(&self) -> Visibility {
    self.visibility.get()
  }

  pub fn is_visible(&self) -> bool {
    self.visibility.get().is_visible()
  }

  pub(crate) fn set_visibility(&self, visibility: Visibility) {
    self.visibility.set(visibility);
  }

  pub fn probe(&self) -> VisibilityProbe {
    VisibilityProbe(self.visibility.clone())
  }

  /// Swaps in the callbacks of the latest props.
  pub(crate) fn replace_callbacks(&self, callbacks: TourCallbacks<El>) {
    *self.callbacks.write() = Some(callbacks);
  }

  // Each handler copies what it needs out of the lock before calling the consumer.

  /// Always relayed: exit is observable even when the adapter thinks the tour is hidden.
  pub fn exit(&self, cursor: Option<usize>) {
    self.visibility.set(Visibility::Hidden);
    let on_exit = self.callbacks.with(|c| c.as_ref().map(|c| Arc::clone(&c.on_exit)));
    event!(Level::DEBUG, ?cursor, "Tour exited.");
    if let Some(on_exit) = on_exit {
      on_exit(cursor);
    }
  }

  pub fn before_exit(&self, cursor: Option<usize>) -> TransitionControl {
    let on_before_exit = self.callbacks.with(|c| c.as_ref().and_then(|c| c.on_before_exit.clone()));
    match on_before_exit {
      Some(on_before_exit) => {
        let control = on_before_exit(cursor);
        if control.is_blocked() {
          event!(Level::DEBUG, ?cursor, "Exit vetoed by consumer.");
        }
        control
      }
      None => TransitionControl::Allow,
    }
  }

  pub fn before_change(&self, cursor: Option<usize>, next: Option<&El>) -> TransitionControl {
    if !self.is_visible() {
      event!(Level::TRACE, ?cursor, "Before-change absorbed, tour not started.");
      return TransitionControl::Allow;
    }
    let (on_before_change, on_prevent_change) = self.callbacks.with(|c| match c {
      Some(c) => (c.on_before_change.clone(), c.on_prevent_change.clone()),
      None => (None, None),
    });
    let Some(on_before_change) = on_before_change else {
      return TransitionControl::Allow;
    };

    let control = on_before_change(cursor, next);
    if control.is_blocked() {
      event!(Level::DEBUG, ?cursor, "Step change vetoed by consumer.");
      if let Some(on_prevent_change) = on_prevent_change {
        // The engine is still inside its own before-change dispatch here.
        self.scheduler.schedule(Box::new(move || on_prevent_change(cursor)));
      }
    }
    control
  }

  pub fn after_change(&self, cursor: Option<usize>, element: Option<&El>) {
    if !self.is_visible() {
      event!(Level::TRACE, ?cursor, "After-change absorbed, tour not started.");
      return;
    }
    let on_after_change = self.callbacks.with(|c| c.as_ref().and_then(|c| c.on_after_change.clone()));
    if let Some(on_after_change) = on_after_change {
      on_after_change(cursor, element);
    }
  }

  pub fn change(&self, cursor: Option<usize>, element: Option<&El>) {
    if !self.is_visible() {
      event!(Level::TRACE, ?cursor, "Change absorbed, tour not started.");
      return;
    }
    let on_change = self.callbacks.with(|c| c.as_ref().and_then(|c| c.on_change.clone()));
    if let Some(on_change) = on_change {
      on_change(cursor, element);
    }
  }

  pub fn complete(&self) {
    let on_complete = self.callbacks.with(|c| c.as_ref().and_then(|c| c.on_complete.clone()));
    event!(Level::DEBUG, "Tour completed.");
    if let Some(on_complete) = on_complete {
      on_complete();
    }
  }
}

impl<El: 'static> Clone for EventRelay<El> {
  fn clone(&self) -> Self {
    Self {
      visibility: self.visibility.clone(),
      callbacks: self.callbacks.clone(),
      scheduler: Arc::clone(&self.scheduler),
    }
  }
}

impl<El: 'static> fmt::Debug for EventRelay<El> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EventRelay")
      .field("visibility", &self.visibility.get())
      .field("callbacks_present", &self.callbacks.read().is_some())
      .finish()
  }
}
