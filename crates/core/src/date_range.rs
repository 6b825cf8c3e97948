// SPDX-License-Identifier: MIT

//!
//! The GridView date range type
//!

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::FrameSequence;

/// Error returned when a range's start date falls after its end date
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Range start `{start}` is after end `{end}`")]
pub struct InvalidRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// An inclusive [start, end] calendar-day window
///
/// Construction enforces start <= end, so an instantiated range is always
/// valid.  Both bounds are part of the range: a range where start == end
/// covers exactly one day.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a new [`DateRange`] if start <= end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<DateRange, InvalidRangeError> {
        if start > end {
            return Err(InvalidRangeError { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// A range covering exactly one day
    pub fn single_day(date: NaiveDate) -> DateRange {
        DateRange {
            start: date,
            end: date,
        }
    }

    /// Get the range's first day
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Get the range's last day
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the range (inclusive at both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Pull `date` to the nearest bound if it falls outside the range
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }

    /// The number of calendar days covered, counting both ends
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// The daily frames the range covers
    pub fn frames(&self) -> FrameSequence {
        FrameSequence::new(*self)
    }
}

#[derive(Deserialize)]
struct RawRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_range = RawRange::deserialize(deserializer)?;
        DateRange::new(raw_range.start, raw_range.end).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::DateRange;
    use chrono::NaiveDate;

    fn date(iso: &str) -> NaiveDate {
        iso.parse().unwrap()
    }

    #[test]
    fn new() {
        // Should return error
        assert!(DateRange::new(date("2020-07-30"), date("2020-07-21")).is_err());
        assert!(DateRange::new(date("2021-01-01"), date("2020-12-31")).is_err());

        // Should be ok
        assert!(DateRange::new(date("2020-07-21"), date("2020-07-30")).is_ok());
        assert!(DateRange::new(date("2020-07-21"), date("2020-07-21")).is_ok());
    }

    #[test]
    fn contains() {
        let range = DateRange::new(date("2020-07-21"), date("2020-07-30")).unwrap();
        assert!(range.contains(date("2020-07-21")));
        assert!(range.contains(date("2020-07-25")));
        assert!(range.contains(date("2020-07-30")));
        assert!(!range.contains(date("2020-07-20")));
        assert!(!range.contains(date("2020-07-31")));
    }

    #[test]
    fn clamp() {
        let range = DateRange::new(date("2020-07-21"), date("2020-07-30")).unwrap();
        assert_eq!(range.clamp(date("2019-01-01")), date("2020-07-21"));
        assert_eq!(range.clamp(date("2020-07-25")), date("2020-07-25"));
        assert_eq!(range.clamp(date("2022-12-31")), date("2020-07-30"));
    }

    #[test]
    fn num_days() {
        let range = DateRange::new(date("2020-07-21"), date("2020-07-30")).unwrap();
        assert_eq!(range.num_days(), 10);

        let single = DateRange::single_day(date("2020-07-21"));
        assert_eq!(single.num_days(), 1);
    }

    #[test]
    fn deserialize() {
        // A reversed range must not deserialize
        let json = r#"{ "start": "2020-07-30", "end": "2020-07-21" }"#;
        assert!(serde_json::from_str::<DateRange>(json).is_err());

        // A valid one must
        let json = r#"{ "start": "2020-07-21", "end": "2020-07-30" }"#;
        let range: DateRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.start(), date("2020-07-21"));
        assert_eq!(range.end(), date("2020-07-30"));
    }
}
