// waypoint/src/error.rs
use thiserror::Error;

/// Errors surfaced by the adapter's boundary operations.
///
/// Vetoes, headless installs and unresolved elements are not errors; they are
/// reported through return values.
#[derive(Debug, Error)]
pub enum TourError {
  #[error("Required callback missing from tour props: {name}")]
  MissingCallback { name: &'static str },

  #[error("Tour options could not be decoded. Source: {source}")]
  InvalidOptions {
    #[source]
    source: serde_json::Error,
  },

  #[error("Step index {index} is outside the engine configuration ({len} steps)")]
  StepOutOfRange { index: usize, len: usize },

  #[error("No async runtime available to schedule deferred callbacks: {0}")]
  RuntimeUnavailable(String),

  #[error("Deferred callbacks require a current-thread runtime, found: {0}")]
  UnsupportedRuntime(String),
}

impl From<serde_json::Error> for TourError {
  fn from(source: serde_json::Error) -> Self {
    TourError::InvalidOptions { source }
  }
}

pub type TourResult<T, E = TourError> = std::result::Result<T, E>;
