//! Wall-clock times without a date or timezone.

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// Accepted input layouts: 24-hour with or without seconds, and the
/// 12-hour `09:30 AM` form used by the booking forms
const FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time of day: {0:?}")]
pub struct TimeParseError(pub String);

pub fn parse_wall_clock(input: &str) -> Result<NaiveTime, TimeParseError> {
    let trimmed = input.trim();

    FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TimeParseError(input.to_string()))
}

/// Formats as `HH:MM`, keeping seconds only when they are set
pub fn format_wall_clock(time: NaiveTime) -> String {
    if time.second() == 0 && time.nanosecond() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}
