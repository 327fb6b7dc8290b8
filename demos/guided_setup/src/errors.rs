// waypoint/demos/guided_setup/src/errors.rs

use thiserror::Error;
use waypoint::TourError;

#[derive(Debug, Error)]
pub enum DemoError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Tour Error: {source}")]
  Tour {
    #[from]
    source: TourError,
  },

  #[error("Scripted walkthrough went off track: {0}")]
  Script(String),
}

pub type Result<T, E = DemoError> = std::result::Result<T, E>;
