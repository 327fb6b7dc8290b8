// waypoint/src/core/options.rs

//! Engine-recognized tour options.
//!
//! The adapter treats these as a pass-through record: it never interprets a
//! key itself, apart from the `steps` key that configuration sync synthesizes.

use super::step::Position;
use crate::error::TourResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tour options in the engine's camelCase vocabulary.
///
/// Missing keys deserialize to the documented default set (`hidePrev` and
/// `hideNext` on, everything else left to the engine). Keys this record does
/// not name are kept in [`TourOptions::extra`] and handed to the engine as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TourOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_label: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub prev_label: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub skip_label: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub done_label: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hide_prev: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hide_next: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exit_on_esc: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exit_on_overlay_click: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_step_numbers: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub keyboard_navigation: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_buttons: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_bullets: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_progress: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scroll_to_element: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub overlay_opacity: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_interaction: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tooltip_position: Option<Position>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tooltip_class: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub highlight_class: Option<String>,

  /// Engine keys not modeled above.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Default for TourOptions {
  fn default() -> Self {
    Self {
      next_label: None,
      prev_label: None,
      skip_label: None,
      done_label: None,
      hide_prev: Some(true),
      hide_next: Some(true),
      exit_on_esc: None,
      exit_on_overlay_click: None,
      show_step_numbers: None,
      keyboard_navigation: None,
      show_buttons: None,
      show_bullets: None,
      show_progress: None,
      scroll_to_element: None,
      overlay_opacity: None,
      disable_interaction: None,
      tooltip_position: None,
      tooltip_class: None,
      highlight_class: None,
      extra: Map::new(),
    }
  }
}

impl TourOptions {
  /// Decodes options from a JSON object, filling gaps from the default set.
  pub fn from_json_str(json: &str) -> TourResult<Self> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn from_json_value(value: Value) -> TourResult<Self> {
    Ok(serde_json::from_value(value)?)
  }

  /// The options as the engine-facing JSON object.
  pub fn to_json_value(&self) -> Value {
    // Serializing a struct of plain fields and a string-keyed map cannot fail.
    serde_json::to_value(self).unwrap_or(Value::Null)
  }

  /// Sets a pass-through key the record does not model.
  pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
    self.extra.insert(key.into(), value);
    self
  }
}
