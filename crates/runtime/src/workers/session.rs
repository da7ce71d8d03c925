//! Session worker that owns the view state, cursor and answer log.
//!
//! Receives commands from [`SessionHandle`](crate::SessionHandle), judges
//! swipes synchronously, and runs the two store calls in spawned tasks whose
//! outcomes are posted back over an internal channel. Every mutation happens
//! on this worker's task.

use std::sync::Arc;

use game_core::{
    Game, GameAnswer, GameResult, IgnoredSwipe, SessionProgress, SwipeDirection, SwipeOutcome,
};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::Navigator;
use crate::events::{EventBus, SessionEvent};
use crate::repository::{self, GameStore};
use crate::state::{GameViewState, StateContainer};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Judge the card under the cursor.
    Swipe {
        direction: SwipeDirection,
        reply: oneshot::Sender<SwipeOutcome>,
    },
    /// Re-request a game after a failed creation attempt.
    Retry { reply: oneshot::Sender<bool> },
    /// Query phase, cursor and answer log (read-only).
    QueryStatus {
        reply: oneshot::Sender<SessionStatus>,
    },
    /// Stop the worker and discard pending store completions.
    Dispose { reply: oneshot::Sender<()> },
}

/// Store outcomes handed back to the worker task.
enum Completion {
    GameCreated(repository::Result<Game>),
    ResultStored(repository::Result<()>),
}

/// Lifecycle of a single session.
///
/// `Loading` and `LoadFailed` both render as loading; `Ready` covers every
/// cursor value below the deck length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    LoadFailed,
    Ready,
    /// Last card judged; the result is being stored.
    Completing,
    /// Result stored and navigation requested.
    Finished,
    /// The store rejected the result. Terminal; nothing is retried.
    StoreFailed,
}

/// Read-only view of the controller's bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    pub phase: SessionPhase,
    pub cursor: usize,
    /// Judged answers in swipe order.
    pub answers: Vec<GameAnswer>,
    /// Number of committed view-state updates.
    pub state_revision: u64,
}

/// Background task driving one session from game creation to stored result.
pub struct SessionWorker {
    state: StateContainer<GameViewState>,
    progress: SessionProgress,
    phase: SessionPhase,
    store: Arc<dyn GameStore>,
    navigator: Arc<dyn Navigator>,
    command_rx: mpsc::Receiver<Command>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: Option<JoinHandle<()>>,
    event_bus: EventBus,
}

impl SessionWorker {
    /// Creates a new session worker with a freshly initialized state container.
    pub fn new(
        store: Arc<dyn GameStore>,
        navigator: Arc<dyn Navigator>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        Self {
            state: StateContainer::initialize(),
            progress: SessionProgress::new(),
            phase: SessionPhase::Loading,
            store,
            navigator,
            command_rx,
            completion_tx,
            completion_rx,
            in_flight: None,
            event_bus,
        }
    }

    /// Receiver for view-state snapshots; grab it before spawning [`run`](Self::run).
    pub fn subscribe_state(&self) -> watch::Receiver<Arc<GameViewState>> {
        self.state.subscribe()
    }

    /// Main worker loop.
    ///
    /// Starts the session immediately, then serves commands and store
    /// completions until disposed or every handle is dropped.
    pub async fn run(mut self) {
        self.request_game();

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => {
                        if !self.handle_command(command) {
                            break;
                        }
                    }
                    None => {
                        debug!(target: "runtime::session", "All handles dropped");
                        self.dispose();
                        break;
                    }
                },
                Some(completion) = self.completion_rx.recv() => {
                    self.handle_completion(completion);
                }
            }
        }

        debug!(target: "runtime::session", "Session worker stopped");
    }

    /// Returns `false` once the worker should stop.
    fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Swipe { direction, reply } => {
                let outcome = self.handle_swipe(direction);
                if reply.send(outcome).is_err() {
                    debug!(
                        target: "runtime::session",
                        "Swipe reply channel closed (caller dropped)"
                    );
                }
            }
            Command::Retry { reply } => {
                let retried = self.handle_retry();
                if reply.send(retried).is_err() {
                    debug!(
                        target: "runtime::session",
                        "Retry reply channel closed (caller dropped)"
                    );
                }
            }
            Command::QueryStatus { reply } => {
                if reply.send(self.status()).is_err() {
                    debug!(
                        target: "runtime::session",
                        "QueryStatus reply channel closed (caller dropped)"
                    );
                }
            }
            Command::Dispose { reply } => {
                self.dispose();
                if reply.send(()).is_err() {
                    debug!(
                        target: "runtime::session",
                        "Dispose reply channel closed (caller dropped)"
                    );
                }
                return false;
            }
        }

        true
    }

    fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase,
            cursor: self.progress.cursor(),
            answers: self.progress.answers().to_vec(),
            state_revision: self.state.revision(),
        }
    }

    /// Spawns the "create new game" store call.
    fn request_game(&mut self) {
        self.phase = SessionPhase::Loading;

        let store = Arc::clone(&self.store);
        let completions = self.completion_tx.clone();

        info!(target: "runtime::session", "Requesting new game");
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = store.create_new_game().await;
            if completions.send(Completion::GameCreated(outcome)).is_err() {
                debug!(target: "runtime::session", "Game creation resolved after session shutdown");
            }
        }));
    }

    /// Spawns the "store result" call for a finished session.
    fn submit_result(&mut self, result: GameResult) {
        self.phase = SessionPhase::Completing;

        self.event_bus.publish(SessionEvent::SessionCompleted {
            total_points: result.total_points,
            earned_points: result.earned_points,
        });
        info!(
            target: "runtime::session",
            title = %result.title,
            earned = result.earned_points,
            total = result.total_points,
            "Session complete, storing result"
        );

        let store = Arc::clone(&self.store);
        let completions = self.completion_tx.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let outcome = store.store_result(result).await;
            if completions.send(Completion::ResultStored(outcome)).is_err() {
                debug!(
                    target: "runtime::session",
                    "Result storage resolved after session shutdown"
                );
            }
        }));
    }

    fn handle_swipe(&mut self, direction: SwipeDirection) -> SwipeOutcome {
        let snapshot = self.state.snapshot();
        let Some(game) = snapshot.game.as_deref() else {
            debug!(target: "runtime::session", %direction, "Swipe before game loaded, ignoring");
            return SwipeOutcome::Ignored(IgnoredSwipe::NoGame);
        };

        let outcome = self.progress.register(game, direction);

        match &outcome {
            SwipeOutcome::Judged { answer, cursor } => {
                debug!(
                    target: "runtime::session",
                    %direction,
                    cursor,
                    correct = answer.is_right_answer,
                    "Swipe judged"
                );
                self.event_bus.publish(SessionEvent::SwipeJudged {
                    cursor: *cursor,
                    answer: answer.clone(),
                });
            }
            SwipeOutcome::Completed { answer, result } => {
                self.event_bus.publish(SessionEvent::SwipeJudged {
                    cursor: self.progress.cursor(),
                    answer: answer.clone(),
                });
                self.submit_result(result.clone());
            }
            SwipeOutcome::Ignored(reason) => {
                debug!(target: "runtime::session", ?reason, "Swipe ignored");
            }
        }

        outcome
    }

    fn handle_retry(&mut self) -> bool {
        if self.phase != SessionPhase::LoadFailed || self.state.snapshot().game.is_some() {
            debug!(target: "runtime::session", phase = ?self.phase, "Nothing to retry");
            return false;
        }

        self.request_game();
        true
    }

    fn handle_completion(&mut self, completion: Completion) {
        self.in_flight = None;

        match completion {
            Completion::GameCreated(Ok(game)) => self.on_game_created(game),
            Completion::GameCreated(Err(error)) => {
                self.phase = SessionPhase::LoadFailed;
                warn!(target: "runtime::session", %error, "Failed to create game");
                self.event_bus.publish(SessionEvent::GameCreationFailed {
                    error: error.to_string(),
                });
            }
            Completion::ResultStored(Ok(())) => {
                self.phase = SessionPhase::Finished;
                info!(target: "runtime::session", "Result stored, navigating to result screen");
                self.event_bus.publish(SessionEvent::ResultStored);
                self.navigator.go_to_result_screen();
            }
            Completion::ResultStored(Err(error)) => {
                self.phase = SessionPhase::StoreFailed;
                warn!(target: "runtime::session", %error, "Failed to store result");
                self.event_bus.publish(SessionEvent::ResultStoreFailed {
                    error: error.to_string(),
                });
            }
        }
    }

    fn on_game_created(&mut self, game: Game) {
        self.progress.reset();

        let title = game.title.clone();
        let cards = game.len();
        let game = Arc::new(game);

        self.state.update(|state| {
            state.game = Some(game);
            state.is_loading = false;
        });
        self.phase = SessionPhase::Ready;

        info!(target: "runtime::session", %title, cards, "Game loaded");
        self.event_bus.publish(SessionEvent::GameLoaded { title, cards });
    }

    /// Aborts the in-flight store call. The caller must stop the loop right
    /// after, so the completion receiver is dropped with the worker.
    fn dispose(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
            debug!(target: "runtime::session", "Aborted in-flight store call");
        }

        info!(target: "runtime::session", phase = ?self.phase, "Session disposed");
        self.event_bus.publish(SessionEvent::Disposed);
    }
}
