//! Bloomnote page state engine
//!
//! Platform-agnostic logic for the Bloomnote greeting page. This crate owns
//! the fixed bloom message pool, the storage abstraction, and the page
//! session controller, without any UI or browser dependencies.

#![forbid(unsafe_code)]

pub mod bloom;
pub mod constants;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use bloom::{Bloom, BloomDataError, BloomPool, bloom_pool};
pub use session::PageSession;
pub use storage::{KeyValueStore, MemoryStore};
