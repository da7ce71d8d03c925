//! High-level session runtime.
//!
//! The runtime owns the session worker, wires up command/state/event channels,
//! and exposes a builder-based API for clients to start a session.

use std::env;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Navigator, NoopNavigator, Result, RuntimeError, SessionHandle};
use crate::events::EventBus;
use crate::repository::GameStore;
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
            event_buffer_size: 100,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SESSION_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `SESSION_EVENT_BUFFER` - Event broadcast capacity (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("SESSION_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        if let Some(capacity) = read_env::<usize>("SESSION_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }
}

/// Running game session.
///
/// Design: the runtime owns the worker task. [`SessionHandle`] provides a
/// cloneable façade for views and input sources.
pub struct SessionRuntime {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
}

impl SessionRuntime {
    /// Create a new runtime builder
    pub fn builder() -> SessionRuntimeBuilder {
        SessionRuntimeBuilder::new()
    }

    /// Get a cloneable handle to this session
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Dispose the session and wait for the worker to stop.
    ///
    /// Store calls still in flight are aborted; their outcomes never reach
    /// the view state.
    pub async fn dispose(self) -> Result<()> {
        if let Err(error) = self.handle.dispose().await {
            tracing::debug!("Session worker already stopped: {}", error);
        }
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`SessionRuntime`].
pub struct SessionRuntimeBuilder {
    config: RuntimeConfig,
    store: Option<Arc<dyn GameStore>>,
    navigator: Option<Arc<dyn Navigator>>,
    event_bus: Option<EventBus>,
}

impl SessionRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            store: None,
            navigator: None,
            event_bus: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required game store
    pub fn store(mut self, store: impl GameStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set the navigator (optional, defaults to [`NoopNavigator`])
    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Arc::new(navigator));
        self
    }

    /// Publish session events on an existing bus.
    ///
    /// Lets callers subscribe before the session starts, so early events such
    /// as a failed game creation are not missed.
    pub fn event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Build the runtime and start the session.
    ///
    /// The worker requests a new game from the store as soon as it is spawned.
    pub async fn build(self) -> Result<SessionRuntime> {
        let store = self.store.ok_or(RuntimeError::MissingStore)?;
        let navigator = self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator));
        let event_bus = self
            .event_bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));

        let command_buffer = self.config.command_buffer_size.max(1);
        let (command_tx, command_rx) = mpsc::channel::<Command>(command_buffer);

        let worker = SessionWorker::new(store, navigator, command_rx, event_bus.clone());
        let handle = SessionHandle::new(command_tx, worker.subscribe_state(), event_bus);

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        tracing::debug!("Session runtime started");

        Ok(SessionRuntime {
            handle,
            worker_handle,
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
