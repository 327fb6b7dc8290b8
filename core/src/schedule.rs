// waypoint/src/schedule.rs

//! The "run on the next turn" primitive used for deferred consumer callbacks.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use tracing::{event, Level};

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Posts work to run after the current call stack has unwound.
///
/// Implementations MUST NOT run `task` inside `schedule`.
pub trait TurnScheduler: Send + Sync {
  fn schedule(&self, task: Task);
}

/// A host-drained FIFO of deferred tasks.
///
/// The embedding host calls [`TurnQueue::run_pending`] once per turn of its
/// own event loop. Clones share the same queue.
#[derive(Clone, Default)]
pub struct TurnQueue {
  pending: Arc<Mutex<VecDeque<Task>>>,
}

impl TurnQueue {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn pending_len(&self) -> usize {
    self.pending.lock().len()
  }

  pub fn is_idle(&self) -> bool {
    self.pending.lock().is_empty()
  }

  /// Runs every task that was pending when the call began, in order.
  ///
  /// Tasks scheduled while draining wait for the next call.
  pub fn run_pending(&self) -> usize {
    let batch: Vec<Task> = self.pending.lock().drain(..).collect();
    let ran = batch.len();
    for task in batch {
      task();
    }
    if ran > 0 {
      event!(Level::TRACE, ran, "Deferred tasks drained.");
    }
    ran
  }
}

impl TurnScheduler for TurnQueue {
  fn schedule(&self, task: Task) {
    self.pending.lock().push_back(task);
  }
}

impl fmt::Debug for TurnQueue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TurnQueue")
      .field("pending", &self.pending_len())
      .finish()
  }
}

/// Posts deferred tasks onto a current-thread tokio runtime.
///
/// Only a current-thread runtime guarantees the task waits for the scheduling
/// call stack to unwind: its single thread is busy running that stack until
/// the caller yields. Multi-thread runtimes are rejected, since an idle worker
/// would pick the task up while the engine is still mid-transition. Schedule
/// from the runtime's own thread.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone)]
pub struct TokioScheduler {
  handle: tokio::runtime::Handle,
}

#[cfg(feature = "tokio")]
impl TokioScheduler {
  pub fn new(handle: tokio::runtime::Handle) -> crate::error::TourResult<Self> {
    match handle.runtime_flavor() {
      tokio::runtime::RuntimeFlavor::CurrentThread => Ok(Self { handle }),
      flavor => {
        event!(Level::WARN, ?flavor, "Deferred callbacks need a current-thread runtime.");
        Err(crate::error::TourError::UnsupportedRuntime(format!("{flavor:?}")))
      }
    }
  }

  /// Binds to the runtime the caller is running on.
  pub fn current() -> crate::error::TourResult<Self> {
    let handle = tokio::runtime::Handle::try_current()
      .map_err(|e| crate::error::TourError::RuntimeUnavailable(e.to_string()))?;
    Self::new(handle)
  }
}

#[cfg(feature = "tokio")]
impl TurnScheduler for TokioScheduler {
  fn schedule(&self, task: Task) {
    self.handle.spawn(async move { task() });
  }
}
