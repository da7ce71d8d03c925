//! File-based store implementations.

mod store;

pub use store::JsonFileStore;
