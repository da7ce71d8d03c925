//! In-memory store implementations for testing and development.

mod store;

pub use store::InMemoryGameStore;
