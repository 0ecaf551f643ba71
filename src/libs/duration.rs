//! Elapsed-time calculation between two `HH:MM` wall-clock times.
//!
//! Both times belong to the same calendar day. An end time that is not
//! strictly later than the start time is rejected; intervals crossing
//! midnight are not wrapped into the next day.
//!
//! Failures are reported through [`DurationResult`] rather than as errors, so
//! callers can show the message next to the offending form field.
//!
//! ## Examples
//!
//! ```rust
//! use tally::libs::duration::calculate_duration;
//!
//! let result = calculate_duration("09:00", "10:30");
//! assert!(result.is_valid);
//! assert_eq!(result.duration, 90);
//!
//! let result = calculate_duration("10:00", "09:00");
//! assert!(!result.is_valid);
//! assert_eq!(result.duration, 0);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Minutes in one calendar day, the upper bound for a single entry.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// 24-hour `H:MM` / `HH:MM`.
pub(crate) const TIME_PATTERN: &str = r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$";

static TIME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(TIME_PATTERN).expect("TIME_REGEX should compile"));

/// Why a start/end pair does not form a valid entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    InvalidTimeFormat,
    EndBeforeStart,
    ExceedsOneDay,
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DurationError::InvalidTimeFormat => "請輸入有效的時間格式",
            DurationError::EndBeforeStart => "結束時間必須晚於開始時間",
            DurationError::ExceedsOneDay => "單次記錄不能超過24小時",
        };
        f.write_str(text)
    }
}

/// Outcome of [`calculate_duration`].
///
/// `duration` is `0` whenever `is_valid` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationResult {
    pub duration: u32,
    pub is_valid: bool,
    pub error: Option<DurationError>,
}

impl DurationResult {
    fn valid(duration: u32) -> Self {
        Self {
            duration,
            is_valid: true,
            error: None,
        }
    }

    fn invalid(error: DurationError) -> Self {
        Self {
            duration: 0,
            is_valid: false,
            error: Some(error),
        }
    }
}

/// Returns `true` if `time` is a 24-hour `HH:MM` string.
pub fn is_valid_time(time: &str) -> bool {
    TIME_REGEX.is_match(time)
}

/// Converts an `HH:MM` string into minutes since midnight.
///
/// Returns `None` for anything [`is_valid_time`] rejects.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    if !is_valid_time(time) {
        return None;
    }
    let (hours, minutes) = time.split_once(':')?;
    Some(hours.parse::<u32>().ok()? * 60 + minutes.parse::<u32>().ok()?)
}

/// Computes the minutes elapsed from `start_time` to `end_time`.
pub fn calculate_duration(start_time: &str, end_time: &str) -> DurationResult {
    let (start, end) = match (time_to_minutes(start_time), time_to_minutes(end_time)) {
        (Some(start), Some(end)) => (start, end),
        _ => return DurationResult::invalid(DurationError::InvalidTimeFormat),
    };

    if end <= start {
        return DurationResult::invalid(DurationError::EndBeforeStart);
    }

    let duration = end - start;
    if duration > MINUTES_PER_DAY {
        return DurationResult::invalid(DurationError::ExceedsOneDay);
    }

    DurationResult::valid(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00"), Some(0));
        assert_eq!(time_to_minutes("9:05"), Some(545));
        assert_eq!(time_to_minutes("23:59"), Some(1439));
        assert_eq!(time_to_minutes("24:00"), None);
        assert_eq!(time_to_minutes("12:60"), None);
        assert_eq!(time_to_minutes("１２:００"), None);
    }

    #[test]
    fn test_error_text() {
        assert_eq!(DurationError::EndBeforeStart.to_string(), "結束時間必須晚於開始時間");
    }
}
