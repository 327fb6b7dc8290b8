// waypoint/demos/guided_setup/src/config.rs

use crate::errors::{DemoError, Result};
use dotenvy::dotenv;
use std::env;
use waypoint::TourOptions;

#[derive(Debug, Clone)]
pub struct DemoConfig {
  pub enabled: bool,
  pub initial_step: usize,
  pub options: TourOptions,
}

impl DemoConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok();

    let enabled = get_env("TOUR_ENABLED")
      .unwrap_or_else(|| "true".to_string())
      .parse::<bool>()
      .map_err(|e| DemoError::Config(format!("Invalid TOUR_ENABLED value: {}", e)))?;
    let initial_step = get_env("TOUR_INITIAL_STEP")
      .unwrap_or_else(|| "0".to_string())
      .parse::<usize>()
      .map_err(|e| DemoError::Config(format!("Invalid TOUR_INITIAL_STEP: {}", e)))?;
    let options = match get_env("TOUR_OPTIONS_JSON") {
      Some(json) => TourOptions::from_json_str(&json)?,
      None => TourOptions::default(),
    };

    tracing::info!(enabled, initial_step, "Demo configuration loaded.");
    Ok(Self {
      enabled,
      initial_step,
      options,
    })
  }
}
