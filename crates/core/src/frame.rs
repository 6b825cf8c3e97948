// SPDX-License-Identifier: MIT

//!
//! Frame sequences
//!

use chrono::{Days, NaiveDate};

use crate::DateRange;

/// The ordered daily frames a [`DateRange`] covers
///
/// Derived from a range on demand and never stored durably: consumers
/// recompute it whenever the range changes.  Used for rendering slider tick
/// marks and for computing the next frame during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSequence {
    range: DateRange,
}

impl FrameSequence {
    pub(crate) fn new(range: DateRange) -> FrameSequence {
        FrameSequence { range }
    }

    /// The range the frames were derived from
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The number of frames (one per day, counting both ends)
    pub fn len(&self) -> usize {
        self.range.num_days()
    }

    /// Always false: a range covers at least one day
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The position of `date` within the sequence, if it falls inside the
    /// range
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.range.contains(date) {
            return None;
        }
        Some((date - self.range.start()).num_days() as usize)
    }

    /// The date at `index`, if the index is within the sequence
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        if index >= self.len() {
            return None;
        }
        self.range.start().checked_add_days(Days::new(index as u64))
    }

    /// The frame after `date`, wrapping to the first frame after the last
    ///
    /// Dates outside the range are clamped before advancing.  A single-day
    /// sequence wraps onto itself.
    pub fn next_wrapping(&self, date: NaiveDate) -> NaiveDate {
        let index = self.index_of(self.range.clamp(date)).unwrap_or(0);
        let next = (index + 1) % self.len();
        self.date_at(next).unwrap_or(self.range.start())
    }

    /// Iterate the frames in order, first day to last
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        self.range.start().iter_days().take(self.len())
    }
}

#[cfg(test)]
mod test {
    use crate::DateRange;
    use chrono::NaiveDate;

    fn date(iso: &str) -> NaiveDate {
        iso.parse().unwrap()
    }

    fn july_range() -> DateRange {
        DateRange::new(date("2020-07-21"), date("2020-07-30")).unwrap()
    }

    #[test]
    fn len() {
        assert_eq!(july_range().frames().len(), 10);
        assert_eq!(DateRange::single_day(date("2020-07-21")).frames().len(), 1);
    }

    #[test]
    fn index_of() {
        let frames = july_range().frames();
        assert_eq!(frames.index_of(date("2020-07-21")), Some(0));
        assert_eq!(frames.index_of(date("2020-07-25")), Some(4));
        assert_eq!(frames.index_of(date("2020-07-30")), Some(9));
        assert_eq!(frames.index_of(date("2020-07-31")), None);
    }

    #[test]
    fn date_at() {
        let frames = july_range().frames();
        assert_eq!(frames.date_at(0), Some(date("2020-07-21")));
        assert_eq!(frames.date_at(9), Some(date("2020-07-30")));
        assert_eq!(frames.date_at(10), None);
    }

    #[test]
    fn next_wrapping() {
        let frames = july_range().frames();

        // Plain advance
        assert_eq!(frames.next_wrapping(date("2020-07-21")), date("2020-07-22"));

        // The last frame wraps to the first
        assert_eq!(frames.next_wrapping(date("2020-07-30")), date("2020-07-21"));

        // Out-of-range dates are clamped before advancing
        assert_eq!(frames.next_wrapping(date("2019-01-01")), date("2020-07-22"));
    }

    #[test]
    fn next_wrapping_single_day() {
        let frames = DateRange::single_day(date("2020-07-21")).frames();
        assert_eq!(frames.next_wrapping(date("2020-07-21")), date("2020-07-21"));
    }

    #[test]
    fn iter() {
        let frames = july_range().frames();
        let dates: Vec<NaiveDate> = frames.iter().collect();
        assert_eq!(dates.len(), 10);
        assert_eq!(dates.first(), Some(&date("2020-07-21")));
        assert_eq!(dates.last(), Some(&date("2020-07-30")));
    }
}
