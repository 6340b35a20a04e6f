use serde::{Deserialize, Serialize};

use super::Reading;

/// Aggregate counts over the readings currently retained in the log.
///
/// Derived on demand, never stored: readings evicted from the bounded
/// window are gone from the counts as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStats {
    pub danger_count: usize,
    pub normal_count: usize,
    pub total_logs: usize,
}

impl LogStats {
    pub fn of(readings: &[Reading]) -> Self {
        let danger_count = readings.iter().filter(|r| r.status.is_danger()).count();

        Self {
            danger_count,
            normal_count: readings.len() - danger_count,
            total_logs: readings.len(),
        }
    }

    pub fn empty() -> Self {
        Self {
            danger_count: 0,
            normal_count: 0,
            total_logs: 0,
        }
    }
}
