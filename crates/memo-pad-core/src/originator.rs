/// Anything whose full state can be captured and later put back.
///
/// The history never calls these methods itself; the session owning both
/// the originator and the history does.
pub trait Originator {
    /// Captured state. Treated as opaque by the history.
    type Snapshot;

    /// Captures the complete current state.
    fn create_snapshot(&self) -> Self::Snapshot;

    /// Replaces the current state with a previously captured one.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}
