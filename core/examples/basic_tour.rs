// waypoint/examples/basic_tour.rs

use std::sync::Arc;
use tracing::info;
use waypoint::{MemoryDocument, MemoryEngine, RenderContext, Step, TourAdapter, TourProps, TurnQueue};

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Tour Example ---");

  // 1. A document with the elements the tour points at.
  let document = MemoryDocument::<String>::new();
  document.insert("#search", "input#search".to_string());
  document.insert("#cart", "a#cart".to_string());

  // 2. Install the adapter. The factory runs once; keep a clone of the engine
  //    to click through the tour the way a user would.
  let engine = MemoryEngine::new(document.clone());
  let user = engine.clone();
  let queue = TurnQueue::new();
  let mut adapter = TourAdapter::install(&RenderContext::Interactive, move || engine, Arc::new(queue.clone()));

  // 3. Declare the tour.
  let steps = vec![
    Step::on("#search", "<p>Find anything from here.</p>"),
    Step::on("#cart", "<p>Your picks land in the cart.</p>"),
  ];
  let props = TourProps::builder()
    .steps(steps)
    .on_start(|cursor| info!(?cursor, "Tour started."))
    .on_change(|cursor, element: Option<&String>| info!(?cursor, ?element, "Showing step."))
    .on_complete(|| info!("Tour completed."))
    .on_exit(|cursor| info!(?cursor, "Tour exited."))
    .build()?;

  // 4. Mount disabled, then flip `enabled` to show it.
  adapter.mount(props.clone());
  let outcome = adapter.update(props.with_enabled(true));
  info!(?outcome, visible = adapter.is_visible(), "Enabled the tour.");

  // 5. Walk to the end. Stepping past the last item completes and exits.
  while user.next_step() {}
  info!(visible = adapter.is_visible(), "Walked past the last step.");

  adapter.unmount();
  Ok(())
}
