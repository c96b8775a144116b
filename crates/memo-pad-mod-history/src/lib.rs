/// Undo/redo history built on whole-state snapshots.
///
/// Provides a `HistoryManager` that keeps an ordered list of opaque
/// snapshots and a cursor into it. Snapshots are never inspected; the
/// owner decides when to save and what to do with the snapshot handed
/// back by undo/redo.
pub mod config;
pub mod error;
pub mod manager;

pub use config::HistoryConfig;
pub use error::HistoryError;
pub use manager::{HistoryManager, HistoryState};
