// waypoint/src/core/control.rs

//! Defines signals for vetoing engine transitions and the outcome of a
//! reconciliation pass.

/// Answer from a before-exit or before-change hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionControl {
  /// Let the engine carry out the pending transition.
  #[default]
  Allow,
  /// Veto the pending transition. The engine keeps its current step (or stays open).
  Block,
}

impl TransitionControl {
  pub fn is_blocked(self) -> bool {
    matches!(self, TransitionControl::Block)
  }
}

impl From<bool> for TransitionControl {
  fn from(allow: bool) -> Self {
    if allow {
      TransitionControl::Allow
    } else {
      TransitionControl::Block
    }
  }
}

/// The adapter's own belief about whether the tour is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Hidden,
  Visible,
}

impl Visibility {
  pub fn is_visible(self) -> bool {
    matches!(self, Visibility::Visible)
  }
}

/// A start or stop issued by the visibility state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityTransition {
  /// `Hidden -> Visible`: engine started and moved to the initial step.
  Started,
  /// `Visible -> Hidden`: visibility flipped, then engine exit requested.
  Stopped,
}

/// What a single mount/update pass did to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reconciliation {
  /// Configuration sync pushed a fresh configuration into the engine.
  pub configured: bool,
  /// The visibility transition taken, if any.
  pub transition: Option<VisibilityTransition>,
}
