// tests/config_sync_tests.rs
mod common;

use common::*;
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use waypoint::{
  build_engine_config, EngineCall, IntroContent, Position, StaticMarkup, Step, Target, TourError, TourOptions,
};

struct Badge(&'static str);

impl StaticMarkup for Badge {
  fn render_static_markup(&self) -> String {
    format!("<strong class=\"badge\">{}</strong>", self.0)
  }
}

fn set_options_calls(h: &Harness) -> usize {
  h.engine.count_calls(|c| matches!(c, EngineCall::SetOptions { .. }))
}

#[test]
#[serial]
fn test_configures_once_per_steps_and_options_pair() {
  let mut h = harness(2);
  let props = logged_props(&h.log).steps(steps(2)).build().unwrap();
  h.adapter.mount(props.clone());
  assert_eq!(set_options_calls(&h), 0);

  // First update configures; flag flips alone never reconfigure.
  h.adapter.update(props.clone());
  h.adapter.update(props.with_enabled(true));
  h.adapter.update(props.with_enabled(false));
  h.adapter.update(props.with_enabled(true));
  assert_eq!(set_options_calls(&h), 1);

  let new_options = logged_props(&h.log)
    .shared_steps(props.steps.clone())
    .options(TourOptions::default())
    .enabled(true)
    .build()
    .unwrap();
  assert!(h.adapter.update(new_options.clone()).configured);
  assert_eq!(set_options_calls(&h), 2);

  let new_steps = logged_props(&h.log)
    .steps(steps(2))
    .shared_options(new_options.options.clone())
    .enabled(true)
    .build()
    .unwrap();
  assert!(h.adapter.update(new_steps.clone()).configured);
  assert!(!h.adapter.update(new_steps.clone()).configured);
  assert_eq!(set_options_calls(&h), 3);
}

#[test]
#[serial]
fn test_renderable_intro_reaches_engine_as_markup() {
  let mut h = harness(2);
  let declared = vec![
    Step::new(Target::selector("#step-0"), IntroContent::node(Badge("New"))),
    Step::on("#step-1", "<p>plain</p>"),
  ];
  let props = logged_props(&h.log).steps(declared).enabled(true).build().unwrap();
  h.adapter.mount(props.clone());

  let config = h.engine.config().expect("engine configured");
  assert_eq!(config.steps[0].intro, "<strong class=\"badge\">New</strong>");
  assert_eq!(config.steps[1].intro, "<p>plain</p>");
  assert_eq!(h.engine.items()[0].intro, "<strong class=\"badge\">New</strong>");

  // The declared steps are not rewritten in place.
  assert!(props.steps[0].intro.is_node());
}

#[test]
#[serial]
fn test_synthesized_steps_win_over_options_key() {
  let mut h = harness(2);
  let options = TourOptions::default()
    .with_extra("steps", json!([{ "element": "#bogus" }]))
    .with_extra("scrollPadding", json!(30));
  let props = logged_props(&h.log).steps(steps(2)).options(options).enabled(true).build().unwrap();
  h.adapter.mount(props.clone());

  let config = h.engine.config().unwrap();
  assert_eq!(config.steps.len(), 2);
  assert!(!config.options.extra.contains_key("steps"));
  assert_eq!(config.options.extra.get("scrollPadding"), Some(&json!(30)));
  // The caller's options keep their own key.
  assert!(props.options.extra.contains_key("steps"));
}

#[test]
fn test_build_engine_config_copies_step_fields() {
  let declared: Vec<Step<El>> = vec![Step::on("#a", "<b>A</b>")
    .position(Position::Right)
    .tooltip_class("tip")
    .highlight_class("glow")];
  let config = build_engine_config(&declared, &TourOptions::default());

  assert_eq!(config.steps.len(), 1);
  let step = &config.steps[0];
  assert_eq!(step.element, Target::Selector("#a".to_string()));
  assert_eq!(step.intro, "<b>A</b>");
  assert_eq!(step.position, Some(Position::Right));
  assert_eq!(step.tooltip_class.as_deref(), Some("tip"));
  assert_eq!(step.highlight_class.as_deref(), Some("glow"));
  assert_eq!(config.options, TourOptions::default());
}

#[test]
fn test_options_decode_with_defaults_and_pass_through() {
  let options = TourOptions::from_json_str(
    r#"{ "exitOnOverlayClick": false, "tooltipPosition": "top-left-aligned", "nextLabel": "Onward", "scrollPadding": 30 }"#,
  )
  .unwrap();

  assert_eq!(options.exit_on_overlay_click, Some(false));
  assert_eq!(options.tooltip_position, Some(Position::TopLeftAligned));
  assert_eq!(options.next_label.as_deref(), Some("Onward"));
  assert_eq!(options.hide_prev, Some(true));
  assert_eq!(options.hide_next, Some(true));
  assert_eq!(options.extra.get("scrollPadding"), Some(&json!(30)));

  let value = options.to_json_value();
  assert_eq!(value["hidePrev"], json!(true));
  assert_eq!(value["exitOnOverlayClick"], json!(false));
  assert_eq!(value["scrollPadding"], json!(30));
  assert!(value.get("showButtons").is_none());
}

#[test]
fn test_options_decode_from_json_value() {
  let options = TourOptions::from_json_value(json!({ "showBullets": false, "overlayOpacity": 0.5 })).unwrap();
  assert_eq!(options.show_bullets, Some(false));
  assert_eq!(options.overlay_opacity, Some(0.5));
  assert_eq!(options.hide_next, Some(true));
  assert!(options.extra.is_empty());

  let err = TourOptions::from_json_value(json!({ "tooltipPosition": "sideways" })).unwrap_err();
  assert!(matches!(err, TourError::InvalidOptions { .. }));
}

#[test]
fn test_malformed_options_are_rejected() {
  let err = TourOptions::from_json_str(r#"{ "showButtons": "yes" }"#).unwrap_err();
  assert!(matches!(err, TourError::InvalidOptions { .. }));
  assert!(err.to_string().contains("Tour options could not be decoded"));
}

#[test]
#[serial]
fn test_tooltip_position_option_applies_to_resolved_items() {
  let mut h = harness(2);
  let declared = vec![Step::on("#step-0", "a"), Step::on("#step-1", "b").position(Position::Left)];
  let options = TourOptions {
    tooltip_position: Some(Position::Top),
    ..TourOptions::default()
  };
  let props = logged_props(&h.log)
    .steps(declared)
    .shared_options(Arc::new(options))
    .enabled(true)
    .build()
    .unwrap();
  h.adapter.mount(props);

  let items = h.engine.items();
  assert_eq!(items[0].position, Position::Top);
  assert_eq!(items[1].position, Position::Left);
}
