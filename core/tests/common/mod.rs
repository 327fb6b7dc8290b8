// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::Level;
use waypoint::{
  MemoryDocument, MemoryEngine, RenderContext, Step, TourAdapter, TourProps, TourPropsBuilder, TransitionControl,
  TurnQueue,
};

pub type El = String;
pub type TestEngine = MemoryEngine<MemoryDocument<El>>;
pub type TestAdapter = TourAdapter<TestEngine>;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Ordered record of every consumer callback invocation, as readable strings.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
  pub fn push(&self, entry: impl Into<String>) {
    self.0.lock().push(entry.into());
  }

  pub fn entries(&self) -> Vec<String> {
    self.0.lock().clone()
  }

  pub fn count_prefix(&self, prefix: &str) -> usize {
    self.0.lock().iter().filter(|e| e.starts_with(prefix)).count()
  }

  pub fn clear(&self) {
    self.0.lock().clear();
  }
}

/// Everything a test needs: the adapter, a user-side clone of its engine,
/// the shared document, the deferred-task queue and the callback log.
pub struct Harness {
  pub adapter: TestAdapter,
  pub engine: TestEngine,
  pub document: MemoryDocument<El>,
  pub queue: TurnQueue,
  pub log: CallLog,
}

/// A document where `#step-0 .. #step-{n-1}` all exist.
pub fn document_with(n: usize) -> MemoryDocument<El> {
  let document = MemoryDocument::new();
  for i in 0..n {
    document.insert(format!("#step-{i}"), format!("el-{i}"));
  }
  document
}

pub fn steps(n: usize) -> Vec<Step<El>> {
  (0..n)
    .map(|i| Step::on(format!("#step-{i}"), format!("<p>Step {i}</p>")))
    .collect()
}

pub fn harness_with(document: MemoryDocument<El>) -> Harness {
  harness_with_engine(document.clone(), MemoryEngine::new(document))
}

pub fn harness_with_engine(document: MemoryDocument<El>, engine: TestEngine) -> Harness {
  setup_tracing();
  let queue = TurnQueue::new();
  let user_side = engine.clone();
  let adapter = TourAdapter::install(&RenderContext::Interactive, move || engine, Arc::new(queue.clone()));
  Harness {
    adapter,
    engine: user_side,
    document,
    queue,
    log: CallLog::default(),
  }
}

pub fn harness(n_elements: usize) -> Harness {
  harness_with(document_with(n_elements))
}

/// A builder wired to log every callback into `log`.
pub fn logged_props(log: &CallLog) -> TourPropsBuilder<El> {
  let (l1, l2, l3, l4, l5, l6) = (log.clone(), log.clone(), log.clone(), log.clone(), log.clone(), log.clone());
  TourProps::builder()
    .on_exit(move |cursor| l1.push(format!("exit:{cursor:?}")))
    .on_start(move |cursor| l2.push(format!("start:{cursor:?}")))
    .on_change(move |cursor, el: Option<&El>| l3.push(format!("change:{cursor:?}:{el:?}")))
    .on_after_change(move |cursor, el: Option<&El>| l4.push(format!("after_change:{cursor:?}:{el:?}")))
    .on_prevent_change(move |cursor| l5.push(format!("prevent:{cursor:?}")))
    .on_complete(move || l6.push("complete"))
}

/// A before-change callback that logs and always answers `control`.
pub fn logged_before_change(
  builder: TourPropsBuilder<El>,
  log: &CallLog,
  control: TransitionControl,
) -> TourPropsBuilder<El> {
  let log = log.clone();
  builder.on_before_change(move |cursor, next: Option<&El>| {
    log.push(format!("before_change:{cursor:?}:{next:?}"));
    control
  })
}
