// waypoint/src/adapter/config_sync.rs

//! Projects declarative steps and options onto the engine's configuration shape.

use super::TourAdapter;
use crate::core::options::TourOptions;
use crate::core::step::Step;
use crate::engine::{EngineConfig, EngineStep, TourEngine};
use tracing::{event, instrument, Level};

/// Converts steps to engine steps, rendering rich content to static markup.
///
/// Pure: the input steps are left untouched.
pub fn sanitize_steps<El: Clone>(steps: &[Step<El>]) -> Vec<EngineStep<El>> {
  steps
    .iter()
    .map(|step| EngineStep {
      element: step.target.clone(),
      intro: step.intro.to_markup(),
      position: step.position,
      tooltip_class: step.tooltip_class.clone(),
      highlight_class: step.highlight_class.clone(),
    })
    .collect()
}

/// Merges `options` with the synthesized steps. The synthesized steps always
/// win over a pass-through `steps` key in the options.
pub fn build_engine_config<El: Clone>(steps: &[Step<El>], options: &TourOptions) -> EngineConfig<El> {
  let mut options = options.clone();
  if options.extra.remove("steps").is_some() {
    event!(Level::WARN, "Options carried a 'steps' key; replaced by the declared steps.");
  }
  EngineConfig {
    options,
    steps: sanitize_steps(steps),
  }
}

impl<E: TourEngine> TourAdapter<E> {
  /// Pushes the current props' configuration into the engine.
  ///
  /// Returns `false` (and leaves `configured` unset) when there is no engine
  /// or no props yet. Only the lifecycle entry points may call this.
  #[instrument(name = "TourAdapter::configure", skip_all)]
  pub(crate) fn configure(&mut self) -> bool {
    let Some(props) = &self.props else {
      event!(Level::TRACE, "configure() before mount, skipped.");
      return false;
    };
    let Some(engine) = self.handle.engine_mut() else {
      event!(Level::TRACE, "No engine installed, configuration skipped.");
      return false;
    };

    let config = build_engine_config(&props.steps, &props.options);
    event!(Level::DEBUG, steps = config.steps.len(), "Engine configured.");
    engine.set_options(config);
    self.configured = true;
    true
  }
}
