//! Editing model for memo-pad: a rope-backed text document that can be
//! snapshotted and restored, plus the session that records those snapshots
//! in an undo/redo history.

pub mod buffer;
pub mod cursor;
pub mod document;
pub mod history;
pub mod originator;
pub mod session;

pub use buffer::TextBuffer;
pub use cursor::Position;
pub use document::{Document, DocumentSnapshot};
pub use originator::Originator;
pub use session::EditSession;
