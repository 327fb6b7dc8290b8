// waypoint/src/core/props.rs

//! The declarative input surface of the adapter: flags, steps, options and
//! consumer callbacks.

use super::control::TransitionControl;
use super::options::TourOptions;
use super::step::Step;
use crate::error::{TourError, TourResult};
use std::fmt;
use std::sync::Arc;

/// Receives the engine's current step index.
pub type StepCallback = Arc<dyn Fn(Option<usize>) + Send + Sync + 'static>;
/// Receives the current step index and may veto the pending exit.
pub type ExitVetoCallback = Arc<dyn Fn(Option<usize>) -> TransitionControl + Send + Sync + 'static>;
/// Receives the current step index and the next step's element; may veto the change.
pub type ChangeVetoCallback<El> = Arc<dyn Fn(Option<usize>, Option<&El>) -> TransitionControl + Send + Sync + 'static>;
/// Receives the current step index and that step's element.
pub type ElementCallback<El> = Arc<dyn Fn(Option<usize>, Option<&El>) + Send + Sync + 'static>;
pub type CompleteCallback = Arc<dyn Fn() + Send + Sync + 'static>;

/// Consumer callbacks. Only `on_exit` is required.
pub struct TourCallbacks<El> {
  pub on_exit: StepCallback,
  pub on_start: Option<StepCallback>,
  pub on_before_exit: Option<ExitVetoCallback>,
  pub on_before_change: Option<ChangeVetoCallback<El>>,
  pub on_after_change: Option<ElementCallback<El>>,
  pub on_change: Option<ElementCallback<El>>,
  pub on_prevent_change: Option<StepCallback>,
  pub on_complete: Option<CompleteCallback>,
}

impl<El> Clone for TourCallbacks<El> {
  fn clone(&self) -> Self {
    Self {
      on_exit: Arc::clone(&self.on_exit),
      on_start: self.on_start.clone(),
      on_before_exit: self.on_before_exit.clone(),
      on_before_change: self.on_before_change.clone(),
      on_after_change: self.on_after_change.clone(),
      on_change: self.on_change.clone(),
      on_prevent_change: self.on_prevent_change.clone(),
      on_complete: self.on_complete.clone(),
    }
  }
}

impl<El> fmt::Debug for TourCallbacks<El> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TourCallbacks")
      .field("on_start", &self.on_start.is_some())
      .field("on_before_exit", &self.on_before_exit.is_some())
      .field("on_before_change", &self.on_before_change.is_some())
      .field("on_after_change", &self.on_after_change.is_some())
      .field("on_change", &self.on_change.is_some())
      .field("on_prevent_change", &self.on_prevent_change.is_some())
      .field("on_complete", &self.on_complete.is_some())
      .finish()
  }
}

/// One snapshot of the adapter's props.
///
/// `steps` and `options` are compared by reference (`Arc::ptr_eq`) between
/// passes: handing the adapter a fresh `Arc` is how a caller says "changed".
pub struct TourProps<El> {
  pub enabled: bool,
  /// 0-based index of the step to show first.
  pub initial_step: usize,
  pub steps: Arc<Vec<Step<El>>>,
  pub options: Arc<TourOptions>,
  pub callbacks: TourCallbacks<El>,
}

impl<El> TourProps<El> {
  pub fn builder() -> TourPropsBuilder<El> {
    TourPropsBuilder::default()
  }

  /// True when `steps` or `options` is a different reference than in `previous`.
  pub fn config_changed_since(&self, previous: &TourProps<El>) -> bool {
    !Arc::ptr_eq(&self.steps, &previous.steps) || !Arc::ptr_eq(&self.options, &previous.options)
  }

  /// Same props with a different `enabled` flag; steps and options keep their identity.
  pub fn with_enabled(&self, enabled: bool) -> Self {
    Self {
      enabled,
      ..self.clone()
    }
  }
}

impl<El> Clone for TourProps<El> {
  fn clone(&self) -> Self {
    Self {
      enabled: self.enabled,
      initial_step: self.initial_step,
      steps: Arc::clone(&self.steps),
      options: Arc::clone(&self.options),
      callbacks: self.callbacks.clone(),
    }
  }
}

impl<El: fmt::Debug> fmt::Debug for TourProps<El> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TourProps")
      .field("enabled", &self.enabled)
      .field("initial_step", &self.initial_step)
      .field("steps", &self.steps)
      .field("options", &self.options)
      .field("callbacks", &self.callbacks)
      .finish()
  }
}

/// Assembles [`TourProps`], validating the required callback at the boundary.
pub struct TourPropsBuilder<El> {
  enabled: bool,
  initial_step: usize,
  steps: Option<Arc<Vec<Step<El>>>>,
  options: Option<Arc<TourOptions>>,
  on_exit: Option<StepCallback>,
  on_start: Option<StepCallback>,
  on_before_exit: Option<ExitVetoCallback>,
  on_before_change: Option<ChangeVetoCallback<El>>,
  on_after_change: Option<ElementCallback<El>>,
  on_change: Option<ElementCallback<El>>,
  on_prevent_change: Option<StepCallback>,
  on_complete: Option<CompleteCallback>,
}

impl<El> Default for TourPropsBuilder<El> {
  fn default() -> Self {
    Self {
      enabled: false,
      initial_step: 0,
      steps: None,
      options: None,
      on_exit: None,
      on_start: None,
      on_before_exit: None,
      on_before_change: None,
      on_after_change: None,
      on_change: None,
      on_prevent_change: None,
      on_complete: None,
    }
  }
}

impl<El> TourPropsBuilder<El> {
  pub fn enabled(mut self, enabled: bool) -> Self {
    self.enabled = enabled;
    self
  }

  pub fn initial_step(mut self, initial_step: usize) -> Self {
    self.initial_step = initial_step;
    self
  }

  pub fn steps(mut self, steps: Vec<Step<El>>) -> Self {
    self.steps = Some(Arc::new(steps));
    self
  }

  /// Reuses an existing steps reference, so the adapter sees no change.
  pub fn shared_steps(mut self, steps: Arc<Vec<Step<El>>>) -> Self {
    self.steps = Some(steps);
    self
  }

  pub fn options(mut self, options: TourOptions) -> Self {
    self.options = Some(Arc::new(options));
    self
  }

  pub fn shared_options(mut self, options: Arc<TourOptions>) -> Self {
    self.options = Some(options);
    self
  }

  pub fn on_exit(mut self, f: impl Fn(Option<usize>) + Send + Sync + 'static) -> Self {
    self.on_exit = Some(Arc::new(f));
    self
  }

  pub fn on_start(mut self, f: impl Fn(Option<usize>) + Send + Sync + 'static) -> Self {
    self.on_start = Some(Arc::new(f));
    self
  }

  pub fn on_before_exit(mut self, f: impl Fn(Option<usize>) -> TransitionControl + Send + Sync + 'static) -> Self {
    self.on_before_exit = Some(Arc::new(f));
    self
  }

  pub fn on_before_change(
    mut self,
    f: impl Fn(Option<usize>, Option<&El>) -> TransitionControl + Send + Sync + 'static,
  ) -> Self {
    self.on_before_change = Some(Arc::new(f));
    self
  }

  pub fn on_after_change(mut self, f: impl Fn(Option<usize>, Option<&El>) + Send + Sync + 'static) -> Self {
    self.on_after_change = Some(Arc::new(f));
    self
  }

  pub fn on_change(mut self, f: impl Fn(Option<usize>, Option<&El>) + Send + Sync + 'static) -> Self {
    self.on_change = Some(Arc::new(f));
    self
  }

  pub fn on_prevent_change(mut self, f: impl Fn(Option<usize>) + Send + Sync + 'static) -> Self {
    self.on_prevent_change = Some(Arc::new(f));
    self
  }

  pub fn on_complete(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
    self.on_complete = Some(Arc::new(f));
    self
  }

  /// Fails with [`TourError::MissingCallback`] when `on_exit` was never set.
  pub fn build(self) -> TourResult<TourProps<El>> {
    let on_exit = self.on_exit.ok_or(TourError::MissingCallback { name: "on_exit" })?;
    Ok(TourProps {
      enabled: self.enabled,
      initial_step: self.initial_step,
      steps: self.steps.unwrap_or_else(|| Arc::new(Vec::new())),
      options: self.options.unwrap_or_default(),
      callbacks: TourCallbacks {
        on_exit,
        on_start: self.on_start,
        on_before_exit: self.on_before_exit,
        on_before_change: self.on_before_change,
        on_after_change: self.on_after_change,
        on_change: self.on_change,
        on_prevent_change: self.on_prevent_change,
        on_complete: self.on_complete,
      },
    })
  }
}
