//! Unified error types surfaced by the runtime API.
//!
//! Store failures never surface here: the session worker reports them through
//! session events and leaves the view state as the contract prescribes. These
//! errors cover handle/worker plumbing only.
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::repository::StoreError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a game store to be configured before building")]
    MissingStore,
}
