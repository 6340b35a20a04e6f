pub mod reading;
pub mod stats;

pub use reading::{current_timestamp, RawReading, Reading, SensorStatus, ValidationError};
pub use stats::LogStats;
