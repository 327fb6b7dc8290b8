// waypoint/src/adapter/visibility.rs

//! The `Hidden`/`Visible` state machine deciding when to start and exit the tour.

use super::TourAdapter;
use crate::core::control::{Visibility, VisibilityTransition};
use crate::engine::TourEngine;
use tracing::{event, instrument, Level};

/// The transition to take for the given inputs, if any.
///
/// Starts only a non-empty, enabled, hidden tour; stops only a disabled,
/// visible one.
pub fn next_transition(enabled: bool, step_count: usize, current: Visibility) -> Option<VisibilityTransition> {
  match (enabled, current) {
    (true, Visibility::Hidden) if step_count > 0 => Some(VisibilityTransition::Started),
    (false, Visibility::Visible) => Some(VisibilityTransition::Stopped),
    _ => None,
  }
}

impl<E: TourEngine> TourAdapter<E> {
  /// Evaluates the state machine against the current props and acts on it.
  #[instrument(name = "TourAdapter::sync_visibility", skip_all)]
  pub(crate) fn sync_visibility(&mut self) -> Option<VisibilityTransition> {
    let props = self.props.as_ref()?;
    let Some(engine) = self.handle.engine_mut() else {
      event!(Level::TRACE, "No engine installed, visibility untouched.");
      return None;
    };

    let transition = next_transition(props.enabled, props.steps.len(), self.relay.visibility());
    match transition {
      Some(VisibilityTransition::Started) => {
        engine.start();
        self.relay.set_visibility(Visibility::Visible);
        engine.go_to_step_number(props.initial_step.saturating_add(1));
        let cursor = engine.current_step_index();
        event!(Level::INFO, initial_step = props.initial_step, ?cursor, "Tour started.");
        if let Some(on_start) = props.callbacks.on_start.clone() {
          on_start(cursor);
        }
      }
      Some(VisibilityTransition::Stopped) => {
        // Hidden first: the engine's exit re-enters the relay, which reads it.
        self.relay.set_visibility(Visibility::Hidden);
        engine.exit(false);
        event!(Level::INFO, "Tour stopped.");
      }
      None => {
        event!(
          Level::TRACE,
          enabled = props.enabled,
          steps = props.steps.len(),
          visibility = ?self.relay.visibility(),
          "No visibility transition."
        );
      }
    }
    transition
  }
}
