// tests/rebind_tests.rs
mod common;

use common::*;
use serial_test::serial;
use std::sync::Arc;
use waypoint::{EngineCall, Position, RenderContext, Step, Target, TourAdapter, TourEngine, TourError, TurnQueue};

#[test]
#[serial]
fn test_late_element_is_bound_with_auto_position() {
  let mut h = harness(1);
  let props = logged_props(&h.log).steps(steps(2)).enabled(true).build().unwrap();
  h.adapter.mount(props);

  let floating = h.engine.item(1).unwrap();
  assert_eq!(floating.element, None);
  assert_eq!(floating.position, Position::Floating);

  assert_eq!(h.adapter.rebind_step(1, &h.document).unwrap(), false);

  h.document.insert("#step-1", "late-1".to_string());
  assert_eq!(h.adapter.rebind_step(1, &h.document).unwrap(), true);

  let bound = h.engine.item(1).unwrap();
  assert_eq!(bound.element.as_deref(), Some("late-1"));
  assert_eq!(bound.position, Position::Auto);
  assert_eq!(h.engine.count_calls(|c| *c == EngineCall::BindItem { index: 1 }), 1);
}

#[test]
#[serial]
fn test_rebind_restores_configured_position() {
  let mut h = harness(1);
  let declared = vec![
    Step::on("#step-0", "first"),
    Step::on("#step-1", "second").position(Position::Right),
  ];
  let props = logged_props(&h.log).steps(declared).enabled(true).build().unwrap();
  h.adapter.mount(props);

  h.document.insert("#step-1", "late-1".to_string());
  assert!(h.adapter.rebind_step(1, &h.document).unwrap());
  assert_eq!(h.engine.item(1).unwrap().position, Position::Right);
}

#[test]
#[serial]
fn test_rebind_outside_configuration_is_an_error() {
  let mut h = harness(2);
  let props = logged_props(&h.log).steps(steps(2)).enabled(true).build().unwrap();
  h.adapter.mount(props);

  match h.adapter.rebind_step(5, &h.document) {
    Err(TourError::StepOutOfRange { index, len }) => {
      assert_eq!(index, 5);
      assert_eq!(len, 2);
    }
    other => panic!("Expected StepOutOfRange, got {:?}", other),
  }
}

#[test]
#[serial]
fn test_rebind_before_start_is_a_no_op() {
  let mut h = harness(2);
  let props = logged_props(&h.log).steps(steps(2)).build().unwrap();
  h.adapter.mount(props.clone());
  h.adapter.update(props);

  assert!(h.adapter.is_configured());
  assert_eq!(h.adapter.rebind_step(0, &h.document).unwrap(), false);
  assert!(h.engine.items().is_empty());
}

#[test]
#[serial]
fn test_rebind_skips_steps_targeting_elements_directly() {
  let mut h = harness(0);
  let declared = vec![Step::new(Target::Element("held".to_string()), "direct")];
  let props = logged_props(&h.log).steps(declared).enabled(true).build().unwrap();
  h.adapter.mount(props);

  assert_eq!(h.adapter.rebind_step(0, &h.document).unwrap(), false);
  assert_eq!(h.engine.item(0).unwrap().element.as_deref(), Some("held"));
}

#[test]
#[serial]
fn test_rebind_in_headless_context_reports_nothing() {
  setup_tracing();
  let document = document_with(2);
  let mut adapter: TestAdapter =
    TourAdapter::install(&RenderContext::Headless, || waypoint::MemoryEngine::new(document.clone()), Arc::new(TurnQueue::new()));
  assert_eq!(adapter.rebind_step(0, &document).unwrap(), false);
}
