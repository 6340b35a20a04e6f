use crate::domain::Reading;

/// Port for the bounded reading log.
///
/// Any type providing these operations can back the service; the
/// bundled implementations are a bounded in-memory deque and the same
/// deque mirrored to a JSON snapshot file. Implementations take `&self`
/// and guard their internal sequence with a single lock, so one
/// instance can be shared across request handlers behind an `Arc`.
pub trait ReadingStore: Send + Sync {
    /// Append a reading at the tail, evicting from the head while the
    /// log exceeds its capacity
    fn append(&self, reading: Reading);

    /// The most recently appended reading, or `None` if the log has
    /// never received one. This is the system's current status.
    fn latest(&self) -> Option<Reading>;

    /// Up to `limit` most recent readings, newest first. A limit of 0
    /// yields an empty vec; a limit beyond the current length yields
    /// everything.
    fn recent(&self, limit: usize) -> Vec<Reading>;

    /// Every retained reading, oldest first, as an independent copy
    fn all(&self) -> Vec<Reading>;

    /// Empty the log back to its just-created state
    fn clear(&self);

    /// Number of retained readings
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
