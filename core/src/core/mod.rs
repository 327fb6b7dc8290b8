pub mod control;
pub mod options;
pub mod props;
pub mod shared;
pub mod step;

// Re-export key types for easier access from other waypoint modules (and lib.rs)
pub use control::{Reconciliation, TransitionControl, Visibility, VisibilityTransition};
pub use options::TourOptions;
pub use props::{TourCallbacks, TourProps};
pub use shared::Shared;
pub use step::{IntroContent, Position, Step, Target};
