//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const RESULTS_FILE: &str = "results.jsonl";

/// Everything the binary needs to wire a session together.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// JSON deck served by the file store. `None` plays the built-in demo deck.
    pub deck_path: Option<PathBuf>,
    pub results_path: PathBuf,
    /// Per-session log files are written below this directory when set.
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            deck_path: None,
            results_path: data_dir().join(RESULTS_FILE),
            log_dir: None,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `QUIZ_DECK_PATH` - JSON deck to play (default: built-in demo deck)
    /// - `QUIZ_RESULTS_PATH` - JSON-lines results file (default: platform data dir)
    /// - `QUIZ_LOG_DIR` - Directory for per-session log files (default: stderr only)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.deck_path = read_path("QUIZ_DECK_PATH");

        if let Some(path) = read_path("QUIZ_RESULTS_PATH") {
            config.results_path = path;
        }

        config.log_dir = read_path("QUIZ_LOG_DIR");
        config.session_id = env::var("GAME_SESSION_ID").ok().filter(|id| !id.is_empty());

        config
    }

    /// Configured session id, or one derived from the current time.
    pub fn session_id(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        })
    }
}

/// Platform data directory for the quiz.
///
/// - Linux: `~/.local/share/swipe-quiz` (or `$XDG_DATA_HOME/swipe-quiz`)
/// - macOS: `~/Library/Application Support/swipe-quiz`
/// - Windows: `%APPDATA%\swipe-quiz`
/// - Fallback: `./quiz_data`
fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "swipe-quiz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./quiz_data"))
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_results_live_in_data_dir() {
        let config = ClientConfig::default();
        assert!(config.deck_path.is_none());
        assert!(config.results_path.ends_with(RESULTS_FILE));
    }

    #[test]
    fn explicit_session_id_wins() {
        let config = ClientConfig {
            session_id: Some("friday".into()),
            ..ClientConfig::default()
        };
        assert_eq!(config.session_id(), "friday");
    }

    #[test]
    fn generated_session_id_is_prefixed() {
        let config = ClientConfig::default();
        assert!(config.session_id().starts_with("session_"));
    }
}
