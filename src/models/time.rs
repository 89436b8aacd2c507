//! Wall-clock time-of-day and minute arithmetic.
//!
//! All scheduling computations run on a linear minute scale
//! (minutes since midnight, `[0, 1440)`); the wall-clock `"HH:MM"`
//! form exists only at the serialization boundary.
//!
//! # Interval Semantics
//! Intervals are half-open: `[from, to)`. Two intervals that merely touch
//! (one's end equals the other's start) do NOT overlap, so back-to-back
//! classes are schedulable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a full day. Valid `TimeOfDay` values are strictly below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error parsing a wall-clock time string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not of the form `H:MM` / `HH:MM`, or a field is non-numeric.
    #[error("malformed time {0:?}: expected HH:MM")]
    Malformed(String),
    /// Fields parsed but hours are not in 0-23 or minutes not in 0-59.
    #[error("time {0:?} out of range: hours 0-23, minutes 0-59")]
    OutOfRange(String),
}

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Serializes as the zero-padded `"HH:MM"` string, so catalog JSON keeps
/// the wall-clock form while everything downstream works in minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from minutes since midnight.
    ///
    /// Caller contract: `minutes < MINUTES_PER_DAY`. Inverse of [`minutes`].
    ///
    /// [`minutes`]: TimeOfDay::minutes
    pub fn from_minutes(minutes: u16) -> Self {
        debug_assert!(minutes < MINUTES_PER_DAY);
        Self(minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(':');
        let (Some(h), Some(m), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(ParseError::Malformed(s.to_string()));
        };
        if h.is_empty() || m.is_empty() || !is_digits(h) || !is_digits(m) {
            return Err(ParseError::Malformed(s.to_string()));
        }
        let hours: u16 = h.parse().map_err(|_| ParseError::Malformed(s.to_string()))?;
        let minutes: u16 = m.parse().map_err(|_| ParseError::Malformed(s.to_string()))?;
        if hours > 23 || minutes > 59 {
            return Err(ParseError::OutOfRange(s.to_string()));
        }
        Ok(Self(hours * 60 + minutes))
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

/// Formats raw minutes as `HH:MM`.
///
/// Unlike [`TimeOfDay`], this accepts the full-day boundary value 1440
/// (renders as `"24:00"`), which range endpoints may legitimately reach.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Whether two half-open minute intervals `[a_from, a_to)` and
/// `[b_from, b_to)` overlap.
///
/// Touching endpoints are not an overlap. Pure integer math, never fails;
/// a zero/negative-length interval overlaps nothing.
#[inline]
pub fn intervals_overlap(a_from: u16, a_to: u16, b_from: u16, b_to: u16) -> bool {
    a_from < b_to && b_from < a_to
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!("09:30".parse::<TimeOfDay>().unwrap().minutes(), 9 * 60 + 30);
        assert_eq!("00:00".parse::<TimeOfDay>().unwrap().minutes(), 0);
        assert_eq!("23:59".parse::<TimeOfDay>().unwrap().minutes(), 1439);
        // Single-digit hour is accepted
        assert_eq!("8:05".parse::<TimeOfDay>().unwrap().minutes(), 8 * 60 + 5);
    }

    #[test]
    fn test_parse_malformed() {
        for s in ["", "12", "12:34:56", "ab:cd", "12:", ":30", "12:3x", "-1:00"] {
            assert!(
                matches!(s.parse::<TimeOfDay>(), Err(ParseError::Malformed(_))),
                "expected Malformed for {s:?}"
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        for s in ["24:00", "25:10", "10:60", "99:99"] {
            assert!(
                matches!(s.parse::<TimeOfDay>(), Err(ParseError::OutOfRange(_))),
                "expected OutOfRange for {s:?}"
            );
        }
    }

    #[test]
    fn test_format_zero_padded() {
        assert_eq!(TimeOfDay::from_minutes(8 * 60 + 5).to_string(), "08:05");
        assert_eq!(TimeOfDay::from_minutes(0).to_string(), "00:00");
        assert_eq!(TimeOfDay::from_minutes(1439).to_string(), "23:59");
    }

    #[test]
    fn test_round_trip_all_minutes() {
        for m in 0..MINUTES_PER_DAY {
            let t = TimeOfDay::from_minutes(m);
            let back: TimeOfDay = t.to_string().parse().unwrap();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn test_format_minutes_day_boundary() {
        assert_eq!(format_minutes(MINUTES_PER_DAY), "24:00");
        assert_eq!(format_minutes(20 * 60 + 30), "20:30");
    }

    #[test]
    fn test_overlap_strict_boundaries() {
        // Touching endpoints do not overlap
        assert!(!intervals_overlap(0, 60, 60, 120));
        assert!(intervals_overlap(0, 60, 59, 120));
        assert!(!intervals_overlap(60, 120, 0, 60));
    }

    #[test]
    fn test_overlap_symmetric() {
        let cases = [(0, 60, 30, 90), (0, 60, 60, 120), (100, 130, 0, 60), (0, 1440, 700, 701)];
        for (af, at, bf, bt) in cases {
            assert_eq!(
                intervals_overlap(af, at, bf, bt),
                intervals_overlap(bf, bt, af, at)
            );
        }
    }

    #[test]
    fn test_overlap_degenerate_interval() {
        // Zero-length interval overlaps nothing, not even inside another
        assert!(!intervals_overlap(30, 30, 0, 60));
        assert!(!intervals_overlap(0, 60, 30, 30));
    }

    #[test]
    fn test_serde_wall_clock_form() {
        let t: TimeOfDay = serde_json::from_str("\"14:15\"").unwrap();
        assert_eq!(t.minutes(), 14 * 60 + 15);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:15\"");
        assert!(serde_json::from_str::<TimeOfDay>("\"24:30\"").is_err());
    }
}
