use std::collections::VecDeque;
use std::sync::RwLock;

use tracing::debug;

use crate::domain::Reading;
use crate::ports::ReadingStore;

pub const DEFAULT_MAX_LOGS: usize = 100;

/// In-memory bounded store for sensor readings.
///
/// A FIFO deque behind a single `RwLock`: appends evict from the head
/// once the capacity is reached, reads take a consistent snapshot under
/// the same lock.
pub struct MemoryStore {
    readings: RwLock<VecDeque<Reading>>,
    max_logs: usize,
}

impl MemoryStore {
    pub fn new(max_logs: usize) -> Self {
        Self {
            readings: RwLock::new(VecDeque::with_capacity(max_logs)),
            max_logs,
        }
    }

    pub fn max_logs(&self) -> usize {
        self.max_logs
    }

    /// Seed the deque from a loaded snapshot, keeping only the newest
    /// `max_logs` entries
    pub(crate) fn replace_all(&self, readings: Vec<Reading>) {
        let mut guard = self.readings.write().unwrap();
        guard.clear();
        let skip = readings.len().saturating_sub(self.max_logs);
        guard.extend(readings.into_iter().skip(skip));
    }
}

impl ReadingStore for MemoryStore {
    fn append(&self, reading: Reading) {
        // A zero-capacity log retains nothing; bail out before the
        // eviction loop, which relies on max_logs > 0 to drain
        if self.max_logs == 0 {
            return;
        }

        let mut readings = self.readings.write().unwrap();

        while readings.len() >= self.max_logs {
            readings.pop_front();
        }

        debug!(
            "Added log entry: {} at {}",
            reading.status.as_str(),
            reading.timestamp
        );
        readings.push_back(reading);
    }

    fn latest(&self) -> Option<Reading> {
        self.readings.read().unwrap().back().cloned()
    }

    fn recent(&self, limit: usize) -> Vec<Reading> {
        self.readings
            .read()
            .unwrap()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    fn all(&self) -> Vec<Reading> {
        self.readings.read().unwrap().iter().cloned().collect()
    }

    fn clear(&self) {
        let mut readings = self.readings.write().unwrap();
        let count = readings.len();
        readings.clear();
        debug!("Cleared {} log entries from storage", count);
    }

    fn len(&self) -> usize {
        self.readings.read().unwrap().len()
    }
}
