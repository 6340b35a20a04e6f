use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{current_timestamp, LogStats, RawReading, Reading, ValidationError};
use crate::ports::ReadingStore;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Main application service for the sensor log.
///
/// The single entry point the HTTP layer uses: validates incoming
/// payloads, assigns acceptance timestamps, and delegates storage and
/// aggregation to the backing store.
pub struct SensorLogService {
    store: Arc<dyn ReadingStore>,
}

impl SensorLogService {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Validate and store one sensor payload, returning the stored
    /// reading. Either the full reading is validated and stored, or
    /// nothing is.
    pub fn submit(&self, raw: &RawReading) -> Result<Reading, ValidationError> {
        let mut reading = raw.validate()?;

        if reading.timestamp.is_empty() {
            reading.timestamp = current_timestamp();
        }

        self.store.append(reading.clone());

        info!(
            "Status updated: {} | Temp: {}°C | Gas: {} ppm",
            reading.status.as_str(),
            reading.temperature,
            reading.gas
        );

        Ok(reading)
    }

    /// The most recent reading, if any
    pub fn current(&self) -> Option<Reading> {
        self.store.latest()
    }

    /// Up to `limit` most recent readings, newest first
    pub fn history(&self, limit: usize) -> Vec<Reading> {
        self.store.recent(limit)
    }

    /// Counts over the current window
    pub fn statistics(&self) -> LogStats {
        LogStats::of(&self.store.all())
    }

    /// Destructive: drops every retained reading
    pub fn reset(&self) {
        self.store.clear();
        warn!("All logs cleared");
    }
}
