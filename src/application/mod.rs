pub mod sensor_log;

pub use sensor_log::{SensorLogService, DEFAULT_HISTORY_LIMIT};
