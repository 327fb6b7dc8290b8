// tests/scheduler_tests.rs
use parking_lot::Mutex;
use std::sync::Arc;
use waypoint::{TurnQueue, TurnScheduler};

#[test]
fn test_turn_queue_never_runs_tasks_synchronously() {
  let queue = TurnQueue::new();
  let ran = Arc::new(Mutex::new(Vec::new()));

  for i in 0..3 {
    let ran = ran.clone();
    queue.schedule(Box::new(move || ran.lock().push(i)));
  }
  assert!(ran.lock().is_empty());
  assert_eq!(queue.pending_len(), 3);

  assert_eq!(queue.run_pending(), 3);
  assert_eq!(*ran.lock(), vec![0, 1, 2]);
  assert!(queue.is_idle());
}

#[test]
fn test_tasks_scheduled_while_draining_wait_for_next_turn() {
  let queue = TurnQueue::new();
  let ran = Arc::new(Mutex::new(Vec::new()));

  let (inner_queue, inner_ran) = (queue.clone(), ran.clone());
  queue.schedule(Box::new(move || {
    inner_ran.lock().push("outer");
    let ran = inner_ran.clone();
    inner_queue.schedule(Box::new(move || ran.lock().push("inner")));
  }));

  assert_eq!(queue.run_pending(), 1);
  assert_eq!(*ran.lock(), vec!["outer"]);
  assert_eq!(queue.run_pending(), 1);
  assert_eq!(*ran.lock(), vec!["outer", "inner"]);
  assert_eq!(queue.run_pending(), 0);
}

#[cfg(feature = "tokio")]
mod tokio_scheduler {
  use std::sync::atomic::{AtomicBool, Ordering};
  use std::sync::Arc;
  use std::time::Duration;
  use waypoint::{TokioScheduler, TourError, TurnScheduler};

  #[tokio::test]
  async fn test_tokio_scheduler_runs_task_after_current_turn() {
    let scheduler = TokioScheduler::current().unwrap();
    let ran = Arc::new(AtomicBool::new(false));
    let (tx, rx) = tokio::sync::oneshot::channel();

    let flag = ran.clone();
    scheduler.schedule(Box::new(move || {
      flag.store(true, Ordering::SeqCst);
      let _ = tx.send(());
    }));
    // The scheduling caller is still on the stack: nothing may run yet.
    std::thread::sleep(Duration::from_millis(50));
    assert!(!ran.load(Ordering::SeqCst));

    rx.await.unwrap();
    assert!(ran.load(Ordering::SeqCst));
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
  async fn test_tokio_scheduler_rejects_multi_thread_runtime() {
    match TokioScheduler::current() {
      Err(TourError::UnsupportedRuntime(flavor)) => assert!(flavor.contains("MultiThread")),
      other => panic!("Expected UnsupportedRuntime, got {:?}", other.map(|_| ())),
    }
  }

  #[test]
  fn test_tokio_scheduler_accepts_explicit_current_thread_handle() {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    assert!(TokioScheduler::new(runtime.handle().clone()).is_ok());
  }

  #[test]
  fn test_tokio_scheduler_requires_a_runtime() {
    assert!(matches!(TokioScheduler::current(), Err(TourError::RuntimeUnavailable(_))));
  }
}
