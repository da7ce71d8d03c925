//! Worker tasks that back the runtime orchestration.
//!
//! The session worker is the single owner of a session's state; handles talk
//! to it exclusively through its command channel.

mod session;

pub use session::{Command, SessionPhase, SessionStatus, SessionWorker};
