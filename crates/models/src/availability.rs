use crate::{
    clock::{TimeParseError, parse_wall_clock},
    days::{DaySet, Weekday},
};
use chrono::NaiveTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),
    #[error("end time {end} must be after start time {start}")]
    EndNotAfterStart { start: NaiveTime, end: NaiveTime },
}

/// Wall-clock span with `end > start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, WindowError> {
        if end <= start {
            return Err(WindowError::EndNotAfterStart { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, WindowError> {
        Self::new(parse_wall_clock(start)?, parse_wall_clock(end)?)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

/// A contiguous time range on one weekday.
///
/// Construction guarantees `end > start`; overlapping or duplicate windows
/// on the same day are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvailabilityWindow {
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
}

impl AvailabilityWindow {
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Result<Self, WindowError> {
        TimeRange::new(start, end).map(|range| Self::from_range(day, range))
    }

    /// Builds a window from user-facing time strings such as `"09:00"` or `"02:30 PM"`
    pub fn parse(day: Weekday, start: &str, end: &str) -> Result<Self, WindowError> {
        TimeRange::parse(start, end).map(|range| Self::from_range(day, range))
    }

    pub fn from_range(day: Weekday, range: TimeRange) -> Self {
        Self {
            day,
            start: range.start,
            end: range.end,
        }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

/// A teacher's windows viewed per weekday
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule {
    windows: Vec<AvailabilityWindow>,
}

impl WeeklySchedule {
    pub fn new(windows: Vec<AvailabilityWindow>) -> Self {
        Self { windows }
    }

    /// Days with at least one window
    pub fn days(&self) -> DaySet {
        self.windows.iter().map(AvailabilityWindow::day).collect()
    }
}

impl FromIterator<AvailabilityWindow> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = AvailabilityWindow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn rejects_end_equal_to_start() {
        let err = AvailabilityWindow::new(Weekday::Monday, hm(9, 0), hm(9, 0)).unwrap_err();
        assert_eq!(
            err,
            WindowError::EndNotAfterStart {
                start: hm(9, 0),
                end: hm(9, 0)
            }
        );
    }

    #[test]
    fn rejects_end_before_start() {
        assert!(AvailabilityWindow::parse(Weekday::Friday, "05:00 PM", "09:00 AM").is_err());
    }

    #[test]
    fn time_range_parses_mixed_formats() {
        let range = TimeRange::parse("01:00 PM", "14:30").unwrap();
        assert_eq!(range.start(), hm(13, 0));
        assert_eq!(range.end(), hm(14, 30));

        assert!(matches!(
            TimeRange::parse("14:30", "13:00"),
            Err(WindowError::EndNotAfterStart { .. })
        ));
        assert!(matches!(
            TimeRange::parse("9am", "10:00"),
            Err(WindowError::InvalidTime(_))
        ));
    }

    #[test]
    fn accepts_one_minute_window() {
        let window = AvailabilityWindow::new(Weekday::Sunday, hm(9, 0), hm(9, 1)).unwrap();
        assert_eq!(window.end() - window.start(), chrono::Duration::minutes(1));
    }

    #[test]
    fn window_from_range_keeps_day() {
        let range = TimeRange::parse("02:00 PM", "03:00 PM").unwrap();
        let window = AvailabilityWindow::from_range(Weekday::Tuesday, range);
        assert_eq!(window.day(), Weekday::Tuesday);
        assert_eq!(window.start(), hm(14, 0));
        assert_eq!(window.end(), hm(15, 0));
    }

    #[test]
    fn weekly_schedule_groups_by_day() {
        let schedule: WeeklySchedule = [
            AvailabilityWindow::new(Weekday::Wednesday, hm(13, 0), hm(14, 0)).unwrap(),
            AvailabilityWindow::new(Weekday::Monday, hm(9, 0), hm(10, 0)).unwrap(),
            AvailabilityWindow::new(Weekday::Wednesday, hm(8, 0), hm(9, 0)).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(schedule.days().to_string(), "MW");
        assert!(!schedule.days().contains_day(Weekday::Friday));
        assert_eq!(WeeklySchedule::default().days().to_string(), "");
    }
}
