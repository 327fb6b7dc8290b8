// src/lib.rs

//! Waypoint: a lifecycle adapter between declarative tour props and an
//! imperative, stateful guided-tour engine.
//!
//! The adapter keeps an external engine consistent with the latest props:
//!  - Configures the engine only when the `steps` or `options` references change.
//!  - Starts and exits the tour from the `enabled` flag and the step count.
//!  - Tracks its own visibility belief, authoritative over the engine's state.
//!  - Relays the six engine lifecycle events to consumer callbacks, with a
//!    visibility gate and before-exit/before-change vetoes.
//!  - Defers the prevent-change callback to the next scheduling turn.
//!  - Re-resolves a step's target element once it appears in the document.

pub mod adapter;
pub mod core;
pub mod engine;
pub mod error;
pub mod schedule;

// --- Re-exports for the Public API ---

pub use crate::core::control::{Reconciliation, TransitionControl, Visibility, VisibilityTransition};
pub use crate::core::options::TourOptions;
pub use crate::core::props::{TourCallbacks, TourProps, TourPropsBuilder};
pub use crate::core::shared::Shared;
pub use crate::core::step::{IntroContent, Position, StaticMarkup, Step, Target};

pub use crate::engine::document::{Document, HeadlessProbe, MemoryDocument, RenderContext};
pub use crate::engine::handle::EngineHandle;
pub use crate::engine::memory::{EngineCall, MemoryEngine};
pub use crate::engine::{EngineConfig, EngineItem, EngineStep, TourEngine};

pub use crate::adapter::config_sync::build_engine_config;
pub use crate::adapter::relay::{EventRelay, VisibilityProbe};
pub use crate::adapter::TourAdapter;

pub use crate::schedule::{Task, TurnQueue, TurnScheduler};
#[cfg(feature = "tokio")]
pub use crate::schedule::TokioScheduler;

pub use crate::error::{TourError, TourResult};

/*
    Lifecycle:
    1. Build a `TourProps<El>` with `TourProps::builder()`; `on_exit` is required.
    2. `TourAdapter::install(&probe, factory, scheduler)` creates the engine once
       (skipped when the probe reports a headless context) and wires the relay.
    3. `adapter.mount(props)` on first mount, `adapter.update(props)` on every
       later props change, `adapter.unmount()` when the host drops the tour.
    4. Call `adapter.rebind_step(i, &document)` when a step's target shows up late.
    5. Drain the scheduler (`TurnQueue::run_pending`) on the host's next tick.
*/
