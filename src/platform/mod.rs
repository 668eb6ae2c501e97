//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - The DOM rendering surface (web only)

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use storage::{KeyValueStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use dom::DomPort;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
