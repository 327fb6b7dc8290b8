// waypoint/examples/veto_change.rs

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};
use waypoint::{
  MemoryDocument, MemoryEngine, RenderContext, Step, TourAdapter, TourProps, TransitionControl, TurnQueue,
};

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Veto Example ---");

  let document = MemoryDocument::<String>::new();
  for id in ["#profile", "#billing", "#done"] {
    document.insert(id, format!("section{id}"));
  }

  let engine = MemoryEngine::new(document.clone());
  let user = engine.clone();
  let queue = TurnQueue::new();
  let mut adapter = TourAdapter::install(&RenderContext::Interactive, move || engine, Arc::new(queue.clone()));

  // The billing step stays locked until the profile form is "filled".
  let profile_filled = Arc::new(Mutex::new(false));
  let gate = profile_filled.clone();

  let props = TourProps::builder()
    .enabled(true)
    .steps(vec![
      Step::on("#profile", "Fill in your profile."),
      Step::on("#billing", "Add a payment method."),
      Step::on("#done", "All set."),
    ])
    .on_before_change(move |cursor, _next: Option<&String>| match cursor {
      Some(0) if !*gate.lock() => TransitionControl::Block,
      _ => TransitionControl::Allow,
    })
    .on_prevent_change(|cursor| warn!(?cursor, "Finish this step first."))
    .on_before_exit(|cursor| {
      // Leaving from the first step is not allowed in this flow.
      TransitionControl::from(cursor != Some(0))
    })
    .on_exit(|cursor| info!(?cursor, "Tour exited."))
    .build()?;

  adapter.mount(props);

  user.next_step();
  user.skip();
  info!(step = ?adapter.current_step_index(), "Veto held the tour in place.");

  // Prevent-change notifications arrive on the following turn.
  let ran = queue.run_pending();
  info!(ran, "Drained deferred callbacks.");

  *profile_filled.lock() = true;
  user.next_step();
  info!(step = ?adapter.current_step_index(), "Moved on once the profile was filled.");

  adapter.unmount();
  Ok(())
}
