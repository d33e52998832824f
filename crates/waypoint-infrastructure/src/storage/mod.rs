//! Storage layer for atomic file operations.

mod atomic_json;

pub use atomic_json::AtomicJsonFile;
