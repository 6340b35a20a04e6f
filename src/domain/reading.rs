use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categorical state reported by the fire sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Danger,
    Normal,
}

impl SensorStatus {
    pub fn is_danger(&self) -> bool {
        matches!(self, Self::Danger)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Normal => "normal",
        }
    }
}

/// Validation failure for an incoming sensor payload
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("invalid status {0:?}: must be \"danger\" or \"normal\"")]
    InvalidStatus(String),

    #[error("{field} out of range: {value} is not within [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub const TEMPERATURE_MIN: f64 = -50.0;
pub const TEMPERATURE_MAX: f64 = 150.0;
pub const GAS_MIN: i64 = 0;
pub const GAS_MAX: i64 = 10_000;

/// One validated sensor sample.
///
/// A `Reading` only exists after its fields passed validation; it is
/// never mutated once constructed. Temperature is canonicalized to two
/// decimal places, gas is a ppm integer within [0, 10000].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub status: SensorStatus,
    pub temperature: f64,
    pub gas: i64,
    pub timestamp: String,
}

/// Unvalidated sensor payload as received on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct RawReading {
    pub status: String,
    pub temperature: f64,
    pub gas: i64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl RawReading {
    /// Validate the raw payload into a `Reading`.
    ///
    /// Pure function: no clock access, no logging. The timestamp, when
    /// absent, is left for the caller to assign at acceptance time. A
    /// client-supplied timestamp is accepted as opaque text.
    ///
    /// Temperature is rounded half-away-from-zero to two decimal
    /// places (25.555555 becomes 25.56).
    pub fn validate(&self) -> Result<Reading, ValidationError> {
        let status = match self.status.as_str() {
            "danger" => SensorStatus::Danger,
            "normal" => SensorStatus::Normal,
            other => return Err(ValidationError::InvalidStatus(other.to_string())),
        };

        if self.temperature < TEMPERATURE_MIN || self.temperature > TEMPERATURE_MAX {
            return Err(ValidationError::OutOfRange {
                field: "temperature",
                value: self.temperature,
                min: TEMPERATURE_MIN,
                max: TEMPERATURE_MAX,
            });
        }

        if self.gas < GAS_MIN || self.gas > GAS_MAX {
            return Err(ValidationError::OutOfRange {
                field: "gas",
                value: self.gas as f64,
                min: GAS_MIN as f64,
                max: GAS_MAX as f64,
            });
        }

        Ok(Reading {
            status,
            temperature: round_to_cents(self.temperature),
            gas: self.gas,
            timestamp: self.timestamp.clone().unwrap_or_default(),
        })
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Current wall-clock time in the fixed `YYYY-MM-DD HH:MM:SS` format
pub fn current_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
