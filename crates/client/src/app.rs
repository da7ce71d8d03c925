//! Terminal loop driving one quiz session.
use std::sync::Arc;

use anyhow::Result;
use game_core::{IgnoredSwipe, SwipeDirection, SwipeOutcome};
use runtime::{GameStore, GameViewState, SessionEvent, SessionHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc, watch};

use crate::input::{HELP, InputCommand};
use crate::navigator::Screen;
use crate::presentation;

/// Reads commands from stdin and renders session state to stdout.
pub struct CliApp {
    handle: SessionHandle,
    store: Arc<dyn GameStore>,
    screens: mpsc::UnboundedReceiver<Screen>,
    events: broadcast::Receiver<SessionEvent>,
    intro_shown: bool,
}

/// Whether the loop keeps going after handling an input line.
enum Flow {
    Continue,
    Exit,
}

impl CliApp {
    /// `events` should be subscribed before the session starts so an early
    /// load failure is still reported.
    pub fn new(
        handle: SessionHandle,
        store: Arc<dyn GameStore>,
        screens: mpsc::UnboundedReceiver<Screen>,
        events: broadcast::Receiver<SessionEvent>,
    ) -> Self {
        Self {
            handle,
            store,
            screens,
            events,
            intro_shown: false,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut state_rx = self.handle.subscribe_state();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{}", presentation::LOADING);
        let initial = Arc::clone(&*state_rx.borrow_and_update());
        self.on_state(&initial);

        loop {
            tokio::select! {
                changed = state_rx.changed() => {
                    if changed.is_err() {
                        tracing::debug!("Session state channel closed");
                        break;
                    }
                    let state = Arc::clone(&*state_rx.borrow_and_update());
                    self.on_state(&state);
                }
                event = self.events.recv() => match event {
                    Ok(event) => {
                        if let Flow::Exit = self.on_event(event) {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::debug!("Skipped {} session events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                Some(screen) = self.screens.recv() => match screen {
                    Screen::Result => {
                        self.show_result().await;
                        break;
                    }
                },
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::debug!("Input closed");
                        break;
                    };
                    if let Flow::Exit = self.on_line(&line).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn on_state(&mut self, state: &GameViewState) {
        if self.intro_shown {
            return;
        }

        if let Some(game) = &state.game {
            self.intro_shown = true;
            println!("{}", presentation::render_intro(game));
            println!("{}", presentation::render_card(game, 0));
        }
    }

    fn on_event(&self, event: SessionEvent) -> Flow {
        match event {
            SessionEvent::GameCreationFailed { error } => {
                println!("Could not load a game: {error}");
                println!("Type 'retry' to try again or 'quit' to leave.");
            }
            SessionEvent::SessionCompleted {
                total_points,
                earned_points,
            } => {
                println!("All cards judged ({earned_points}/{total_points}). Saving result...");
            }
            SessionEvent::ResultStoreFailed { error } => {
                println!("Your result could not be saved: {error}");
                return Flow::Exit;
            }
            _ => {}
        }

        Flow::Continue
    }

    async fn on_line(&self, line: &str) -> Result<Flow> {
        let Some(command) = InputCommand::parse(line) else {
            if !line.trim().is_empty() {
                println!("Unknown command. Type 'help' for the list.");
            }
            return Ok(Flow::Continue);
        };

        match command {
            InputCommand::Swipe(direction) => self.swipe(direction).await?,
            InputCommand::Retry => {
                if self.handle.retry().await? {
                    println!("{}", presentation::LOADING);
                } else {
                    println!("Nothing to retry.");
                }
            }
            InputCommand::Status => {
                let status = self.handle.status().await?;
                println!("{}", presentation::render_status(&status));
            }
            InputCommand::Help => println!("{HELP}"),
            InputCommand::Quit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    async fn swipe(&self, direction: SwipeDirection) -> Result<()> {
        match self.handle.swipe(direction).await? {
            SwipeOutcome::Judged { answer, cursor } => {
                println!("{}", presentation::render_answer(&answer));
                if let Some(game) = &self.handle.state().game {
                    println!("{}", presentation::render_card(game, cursor));
                }
            }
            SwipeOutcome::Completed { answer, .. } => {
                println!("{}", presentation::render_answer(&answer));
            }
            SwipeOutcome::Ignored(IgnoredSwipe::NoGame) => println!("Still loading, hold on."),
            SwipeOutcome::Ignored(IgnoredSwipe::DeckExhausted) => println!("No cards left."),
        }

        Ok(())
    }

    async fn show_result(&self) {
        match self.store.latest_result().await {
            Ok(Some(result)) => println!("{}", presentation::render_result(&result)),
            Ok(None) => println!("No stored result to show."),
            Err(error) => {
                tracing::warn!("Failed to read stored result: {}", error);
                println!("Your result was saved but could not be read back: {error}");
            }
        }
    }
}
