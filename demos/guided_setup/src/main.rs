// waypoint/demos/guided_setup/src/main.rs

mod config;
mod errors;

use crate::config::DemoConfig;
use crate::errors::{DemoError, Result as DemoResult};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::Level;
use waypoint::{
  IntroContent, MemoryDocument, MemoryEngine, RenderContext, StaticMarkup, Step, Target, TokioScheduler, TourAdapter,
  TourProps, TransitionControl,
};

/// Intro body rendered from a component rather than written as markup.
struct Checklist(&'static [&'static str]);

impl StaticMarkup for Checklist {
  fn render_static_markup(&self) -> String {
    let items: String = self.0.iter().map(|item| format!("<li>{item}</li>")).collect();
    format!("<ul class=\"checklist\">{items}</ul>")
  }
}

fn setup_steps() -> Vec<Step<String>> {
  vec![
    Step::new(
      Target::selector("#welcome"),
      IntroContent::node(Checklist(&["Create a workspace", "Invite a teammate", "Connect billing"])),
    ),
    Step::on("#workspace-name", "<p>Name your workspace.</p>"),
    Step::on("#invite", "<p>Invite someone to work with you.</p>"),
    Step::on("#billing", "<p>Billing appears once the plan picker loads.</p>"),
  ]
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  tracing::info!("Starting guided setup demo...");
  if let Err(e) = run().await {
    tracing::error!(error = %e, "Guided setup demo failed.");
    return Err(e.into());
  }
  tracing::info!("Guided setup demo finished.");
  Ok(())
}

async fn run() -> DemoResult<()> {
  let config = DemoConfig::from_env()?;

  // The billing section mounts late; the tour starts without it.
  let document = MemoryDocument::<String>::new();
  for id in ["#welcome", "#workspace-name", "#invite"] {
    document.insert(id, format!("div{id}"));
  }

  let engine = MemoryEngine::new(document.clone());
  let user = engine.clone();
  let scheduler = TokioScheduler::current()?;
  let mut adapter = TourAdapter::install(&RenderContext::Interactive, move || engine, Arc::new(scheduler));

  let (prevented_tx, mut prevented_rx) = mpsc::unbounded_channel();
  let workspace_named = Arc::new(std::sync::atomic::AtomicBool::new(false));
  let named = workspace_named.clone();

  let props = TourProps::builder()
    .enabled(config.enabled)
    .initial_step(config.initial_step)
    .steps(setup_steps())
    .options(config.options.clone())
    .on_start(|cursor| tracing::info!(?cursor, "Setup tour started."))
    .on_change(|cursor, element: Option<&String>| tracing::info!(?cursor, ?element, "Showing setup step."))
    .on_before_change(move |cursor, _next: Option<&String>| {
      // Step 1 stays until the workspace has a name.
      let blocked = cursor == Some(1) && !named.load(std::sync::atomic::Ordering::SeqCst);
      TransitionControl::from(!blocked)
    })
    .on_prevent_change(move |cursor| {
      tracing::warn!(?cursor, "Name the workspace before moving on.");
      if let Err(e) = prevented_tx.send(cursor) {
        tracing::warn!(error = %e, "Prevent-change notification dropped, receiver gone.");
      }
    })
    .on_complete(|| tracing::info!("Setup tour completed."))
    .on_exit(|cursor| tracing::info!(?cursor, "Setup tour exited."))
    .build()?;

  let outcome = adapter.mount(props.clone());
  tracing::info!(?outcome, visible = adapter.is_visible(), "Mounted.");
  if !adapter.is_visible() {
    tracing::info!("Tour disabled by configuration, enabling it for the walkthrough.");
    adapter.update(props.with_enabled(true));
  }

  // Move to the workspace step, then try to leave it too early.
  while adapter.current_step_index().is_some_and(|c| c < 1) {
    if !user.next_step() {
      break;
    }
  }
  if adapter.current_step_index() == Some(1) {
    user.next_step();
    let prevented = tokio::time::timeout(Duration::from_secs(1), prevented_rx.recv())
      .await
      .map_err(|_| DemoError::Script("prevent-change notification never arrived".to_string()))?;
    tracing::info!(?prevented, step = ?adapter.current_step_index(), "Change was vetoed.");
  }

  workspace_named.store(true, std::sync::atomic::Ordering::SeqCst);
  user.next_step();
  user.next_step();

  // The plan picker finishes loading; bind its element to the floating step.
  document.insert("#billing", "div#billing".to_string());
  let rebound = adapter.rebind_step(3, &document)?;
  tracing::info!(rebound, item = ?adapter.engine().and_then(|e| e.items().get(3).cloned()), "Billing step re-bound.");

  // The host turns the tour off; the engine exits and on_exit fires.
  adapter.update(props.with_enabled(false));
  tracing::info!(visible = adapter.is_visible(), "Disabled by host.");

  adapter.unmount();
  Ok(())
}
