// waypoint/src/adapter/rebind.rs

//! Re-resolving a step's target element after the tour was configured.

use super::TourAdapter;
use crate::core::step::Position;
use crate::engine::document::Document;
use crate::engine::TourEngine;
use crate::error::{TourError, TourResult};
use tracing::{event, instrument, Level};

impl<E: TourEngine> TourAdapter<E> {
  /// Looks the step's configured selector up in `document` again and, when an
  /// element matches, binds it to the engine's live item for `step_index`.
  ///
  /// The item's position is restored from the configuration, or `Auto` when
  /// the step never set one. Returns `Ok(false)` when nothing was bound: no
  /// engine, no match yet, the step targets an element directly, or the engine
  /// has not built its items. Best effort: call it again later if the element
  /// is still missing.
  #[instrument(name = "TourAdapter::rebind_step", skip(self, document))]
  pub fn rebind_step<D>(&mut self, step_index: usize, document: &D) -> TourResult<bool>
  where
    D: Document<Element = E::Element> + ?Sized,
  {
    let Some(engine) = self.handle.engine_mut() else {
      return Ok(false);
    };
    let Some(step) = engine.configured_step(step_index) else {
      return Err(TourError::StepOutOfRange {
        index: step_index,
        len: engine.configured_step_count(),
      });
    };
    let Some(selector) = step.element.as_selector() else {
      event!(Level::TRACE, "Step targets an element directly, nothing to re-resolve.");
      return Ok(false);
    };
    let Some(element) = document.query_selector(selector) else {
      event!(Level::DEBUG, %selector, "Target element not present yet.");
      return Ok(false);
    };

    let position = step.position.unwrap_or(Position::Auto);
    let bound = engine.bind_item(step_index, element, position);
    event!(Level::DEBUG, %selector, %position, bound, "Step element re-bound.");
    Ok(bound)
  }
}
