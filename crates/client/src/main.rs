//! Swipe quiz terminal client.
//!
//! Composition root: picks a game store from the environment, wires the
//! session runtime to a line-based terminal view, and routes the result
//! screen through [`ScreenNavigator`](navigator::ScreenNavigator).
//!
//! ```bash
//! # Built-in demo deck, results in the platform data dir
//! cargo run -p quiz-client
//!
//! # Own deck and results file, logs under ./logs
//! QUIZ_DECK_PATH=deck.json QUIZ_RESULTS_PATH=results.jsonl QUIZ_LOG_DIR=logs cargo run -p quiz-client
//! ```
mod app;
mod config;
mod demo;
mod input;
mod logging;
mod navigator;
mod presentation;

use std::sync::Arc;

use anyhow::Result;
use app::CliApp;
use config::ClientConfig;
use navigator::ScreenNavigator;
use runtime::{
    EventBus, GameStore, InMemoryGameStore, JsonFileStore, RuntimeConfig, SessionRuntime,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let runtime_config = RuntimeConfig::from_env();

    let _log_guard = logging::setup_logging(&config)?;

    tracing::info!("Starting quiz client");

    let store = build_store(&config);
    let (navigator, screens) = ScreenNavigator::new();

    let event_bus = EventBus::with_capacity(runtime_config.event_buffer_size);
    let events = event_bus.subscribe();

    let session = SessionRuntime::builder()
        .config(runtime_config)
        .store(Arc::clone(&store))
        .navigator(navigator)
        .event_bus(event_bus)
        .build()
        .await?;

    let outcome = CliApp::new(session.handle(), store, screens, events)
        .run()
        .await;

    session.dispose().await?;
    tracing::info!("Quiz client stopped");

    outcome
}

fn build_store(config: &ClientConfig) -> Arc<dyn GameStore> {
    match &config.deck_path {
        Some(deck_path) => {
            let store = JsonFileStore::new(deck_path, &config.results_path);
            tracing::info!(
                "Deck: {}, results: {}",
                store.deck_path().display(),
                store.results_path().display()
            );
            Arc::new(store)
        }
        None => {
            tracing::info!("QUIZ_DECK_PATH not set, playing the demo deck");
            Arc::new(InMemoryGameStore::repeating(demo::demo_game()))
        }
    }
}
