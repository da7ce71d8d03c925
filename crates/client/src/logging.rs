//! Tracing subscriber setup for the terminal client.
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Install the global subscriber.
///
/// Logs always go to stderr so they stay out of the quiz prompts on stdout.
/// With `QUIZ_LOG_DIR` set, a copy is written to `<dir>/<session>/client.log`;
/// keep the returned guard alive until exit so buffered lines are flushed.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let session_id = config.session_id();
    let (file_layer, guard) = match &config.log_dir {
        Some(log_dir) => {
            let session_log_dir = log_dir.join(&session_id);
            std::fs::create_dir_all(&session_log_dir)?;

            let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    if let Some(log_dir) = &config.log_dir {
        tracing::info!(
            "Log file: {}/client.log",
            log_dir.join(&session_id).display()
        );
    }

    Ok(guard)
}
