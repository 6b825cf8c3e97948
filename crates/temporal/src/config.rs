// SPDX-License-Identifier: MIT

//!
//! Temporal runtime config
//!

use crate::{InvalidIntervalError, TemporalError};
use chrono::NaiveDate;
use grid_view_core::DateRange;
use serde::{Deserialize, Serialize};

/// Default playback speed: one frame per second
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// The runtime configuration of the temporal core
///
/// The date window is configuration, not a structural invariant: it mirrors
/// the extent of the weather archive the deployment serves.  Ranges handed
/// to the controller are clamped into this window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalConfig {
    /// The earliest date a range may start at
    pub min_date: NaiveDate,

    /// The latest date a range may end at
    pub max_date: NaiveDate,

    /// Playback speed in milliseconds per frame
    pub interval_ms: u64,
}

impl TemporalConfig {
    /// Check the window and interval before a controller is built from this
    pub fn validate(&self) -> Result<(), TemporalError> {
        DateRange::new(self.min_date, self.max_date)?;
        if self.interval_ms == 0 {
            return Err(InvalidIntervalError(self.interval_ms).into());
        }
        Ok(())
    }
}

impl Default for TemporalConfig {
    /// The observed extent of the historical weather archive
    fn default() -> Self {
        TemporalConfig {
            min_date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
            max_date: NaiveDate::from_ymd_opt(2022, 12, 31).expect("valid date"),
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod test {
    use super::TemporalConfig;

    #[test]
    fn default() {
        let config = TemporalConfig::default();
        assert_eq!(config.min_date.to_string(), "2020-01-01");
        assert_eq!(config.max_date.to_string(), "2022-12-31");
        assert_eq!(config.interval_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate() {
        // Reversed window
        let config = TemporalConfig {
            min_date: "2022-12-31".parse().unwrap(),
            max_date: "2020-01-01".parse().unwrap(),
            interval_ms: 1000,
        };
        assert!(config.validate().is_err());

        // Zero interval
        let config = TemporalConfig {
            interval_ms: 0,
            ..TemporalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn serde() {
        let json = r#"{ "min_date": "2020-01-01", "max_date": "2022-12-31", "interval_ms": 500 }"#;
        let config: TemporalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.interval_ms, 500);
        assert_eq!(config, serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap());
    }
}
