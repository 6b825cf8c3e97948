// SPDX-License-Identifier: MIT

//!
//! Heatmap parameters and frame identity
//!

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown heatmap parameter name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown heatmap parameter `{0}`")]
pub struct ParseParameterError(pub String);

/// The weather parameters heatmap frames can be requested for
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Debug, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapParameter {
    #[display("temperature")]
    Temperature,

    #[display("humidity")]
    Humidity,

    #[display("wind_speed")]
    WindSpeed,

    #[display("precipitation")]
    Precipitation,

    #[display("radiation")]
    Radiation,
}

impl HeatmapParameter {
    /// Every parameter the heatmap service serves
    pub const ALL: [HeatmapParameter; 5] = [
        HeatmapParameter::Temperature,
        HeatmapParameter::Humidity,
        HeatmapParameter::WindSpeed,
        HeatmapParameter::Precipitation,
        HeatmapParameter::Radiation,
    ];
}

impl FromStr for HeatmapParameter {
    type Err = ParseParameterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "temperature" => Ok(HeatmapParameter::Temperature),
            "humidity" => Ok(HeatmapParameter::Humidity),
            "wind_speed" => Ok(HeatmapParameter::WindSpeed),
            "precipitation" => Ok(HeatmapParameter::Precipitation),
            "radiation" => Ok(HeatmapParameter::Radiation),
            _ => Err(ParseParameterError(value.to_string())),
        }
    }
}

/// The identity of one heatmap frame: one parameter on one day
///
/// The temporal controller publishes cursor dates; data-fetch consumers pair
/// them with the selected parameter to form the frame they request next.
#[derive(Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub struct FrameKey {
    pub parameter: HeatmapParameter,
    pub date: NaiveDate,
}

impl FrameKey {
    pub fn new(parameter: HeatmapParameter, date: NaiveDate) -> FrameKey {
        FrameKey { parameter, date }
    }

    /// The key the heatmap service caches this frame's data under
    pub fn cache_key(&self) -> String {
        format!("heatmap:data:{}:{}", self.parameter, self.date)
    }
}

#[cfg(test)]
mod test {
    use super::{FrameKey, HeatmapParameter};

    #[test]
    fn parse() {
        // Every wire name round-trips through Display and FromStr
        for parameter in HeatmapParameter::ALL {
            let parsed: HeatmapParameter = parameter.to_string().parse().unwrap();
            assert_eq!(parsed, parameter);
        }

        // Unknown names are rejected
        assert!("visibility".parse::<HeatmapParameter>().is_err());
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&HeatmapParameter::WindSpeed).unwrap();
        assert_eq!(json, r#""wind_speed""#);
    }

    #[test]
    fn cache_key() {
        let key = FrameKey::new(
            HeatmapParameter::Temperature,
            "2020-07-21".parse().unwrap(),
        );
        assert_eq!(key.cache_key(), "heatmap:data:temperature:2020-07-21");
    }
}
