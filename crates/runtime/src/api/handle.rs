//! Cloneable façade for issuing commands to the session worker.
//!
//! [`SessionHandle`] hides channel plumbing: commands travel over a bounded
//! queue and are applied by the worker in the order they were sent, while
//! state snapshots and events are read without involving the worker.
use std::sync::Arc;

use game_core::{SwipeDirection, SwipeOutcome};
use tokio::sync::{broadcast, mpsc, oneshot, watch};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, SessionEvent};
use crate::state::GameViewState;
use crate::workers::{Command, SessionStatus};

/// Client-facing handle to interact with a game session
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    state_rx: watch::Receiver<Arc<GameViewState>>,
    event_bus: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        state_rx: watch::Receiver<Arc<GameViewState>>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            command_tx,
            state_rx,
            event_bus,
        }
    }

    /// Register a swipe on the current card.
    ///
    /// Swipes are judged strictly in the order they are sent. A swipe sent
    /// before the game has loaded is ignored rather than queued.
    pub async fn swipe(&self, direction: SwipeDirection) -> Result<SwipeOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::Swipe {
            direction,
            reply: reply_tx,
        })
        .await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Ask the store for a game again after a failed attempt.
    ///
    /// Returns `false` when there is nothing to retry (a game is loaded or a
    /// request is still in flight).
    pub async fn retry(&self) -> Result<bool> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::Retry { reply: reply_tx }).await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query phase, cursor and answer log of the session.
    pub async fn status(&self) -> Result<SessionStatus> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::QueryStatus { reply: reply_tx }).await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Tear the session down. Pending store completions are discarded.
    pub async fn dispose(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::Dispose { reply: reply_tx }).await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Latest committed view state.
    pub fn state(&self) -> Arc<GameViewState> {
        Arc::clone(&*self.state_rx.borrow())
    }

    /// Observe every committed view state.
    pub fn subscribe_state(&self) -> watch::Receiver<Arc<GameViewState>> {
        self.state_rx.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe()
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
