//! Runtime orchestration for swipe quiz sessions.
//!
//! This crate wires the pure rules from `game-core` to asynchronous
//! collaborators. Consumers build a [`SessionRuntime`], hand it a
//! [`GameStore`] and a [`Navigator`], and drive the session through the
//! cloneable [`SessionHandle`] while rendering [`GameViewState`] snapshots.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`state`] holds the view-facing snapshot and its container
//! - [`events`] broadcasts session lifecycle events
//! - [`repository`] provides store implementations reused by clients
//! - `workers` keeps the session task internal to the crate
pub mod api;
pub mod events;
pub mod repository;
pub mod runtime;
pub mod state;

mod workers;

pub use api::{Navigator, NoopNavigator, Result, RuntimeError, SessionHandle};
pub use events::{EventBus, SessionEvent};
pub use repository::{GameStore, InMemoryGameStore, JsonFileStore, StoreError};
pub use runtime::{RuntimeConfig, SessionRuntime, SessionRuntimeBuilder};
pub use state::{GameViewState, StateContainer, ViewState};
pub use workers::{SessionPhase, SessionStatus};
