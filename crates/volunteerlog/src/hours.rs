//! Shift time parsing and the whole-hour rule.
//!
//! Shifts are entered as two wall-clock times of day with no date. The hours
//! credited for a shift are the whole hours between them, truncated.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Accepted time-of-day format (24-hour clock).
pub const TIME_FORMAT: &str = "%H:%M";

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// What to do with a shift whose end time is earlier than its start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvernightPolicy {
    /// Refuse the shift with [`Error::EndBeforeStart`].
    #[default]
    Reject,
    /// Accept the shift but credit no hours.
    Zero,
    /// Treat the shift as running past midnight into the next day.
    WrapMidnight,
}

impl std::fmt::Display for OvernightPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Zero => write!(f, "zero"),
            Self::WrapMidnight => write!(f, "wrap_midnight"),
        }
    }
}

/// Parse a `HH:MM` time of day, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] if the input is not a valid
/// 24-hour time with two-digit fields (e.g. `"25:99"`, `"9:00"` or `"noon"`).
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    if !is_two_digit_clock(trimmed) {
        return Err(Error::invalid_time(input));
    }
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT).map_err(|_| Error::invalid_time(input))
}

/// chrono's `%H` and `%M` also accept a single digit.
fn is_two_digit_clock(s: &str) -> bool {
    matches!(
        s.as_bytes(),
        [h1, h2, b':', m1, m2] if [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
    )
}

/// Whole hours between two times of day on the same day.
///
/// Partial hours are dropped, so 09:00 to 13:59 is 4 hours.
///
/// # Errors
///
/// Returns [`Error::EndBeforeStart`] when `end < start` under
/// [`OvernightPolicy::Reject`].
pub fn whole_hours_between(
    start: NaiveTime,
    end: NaiveTime,
    policy: OvernightPolicy,
) -> Result<u64> {
    let mut seconds = end.signed_duration_since(start).num_seconds();

    if seconds < 0 {
        match policy {
            OvernightPolicy::Reject => {
                return Err(Error::EndBeforeStart {
                    start: start.format(TIME_FORMAT).to_string(),
                    end: end.format(TIME_FORMAT).to_string(),
                });
            }
            OvernightPolicy::Zero => seconds = 0,
            OvernightPolicy::WrapMidnight => seconds += SECONDS_PER_DAY,
        }
    }

    Ok((seconds / SECONDS_PER_HOUR).unsigned_abs())
}

/// Parse both shift times and compute the hours worked.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] or [`Error::EndBeforeStart`].
pub fn shift_hours(start: &str, end: &str, policy: OvernightPolicy) -> Result<u64> {
    let start = parse_time_of_day(start)?;
    let end = parse_time_of_day(end)?;
    whole_hours_between(start, end, policy)
}
