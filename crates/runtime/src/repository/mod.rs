//! Store layer backing game sessions.
//!
//! Stores hand out games for new sessions and persist finished results. The
//! session controller only sees the [`GameStore`] trait; concrete stores live
//! in the `memory` and `file` submodules.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use memory::InMemoryGameStore;
pub use traits::GameStore;
