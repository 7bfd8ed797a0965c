//! Time utilities: strict deadline parsing and formatting.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SchedulerError};

/// Textual deadline pattern, e.g. "2026-02-20 23:59".
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Textual date pattern used by date searches, e.g. "2026-02-20" or "2026-2-5".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono accepts unpadded fields and surrounding noise in some positions;
// the shape check pins the input to exactly zero-padded digits.
static DEADLINE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("static regex"));

// Search dates are typed by hand, so month and day may drop the leading zero.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("static regex"));

/// Parse a deadline like "2026-02-20 23:59" (24-hour clock, zero-padded).
pub fn parse_deadline(text: &str) -> Result<NaiveDateTime> {
    if !DEADLINE_SHAPE.is_match(text) {
        return Err(SchedulerError::Parse {
            input: text.to_string(),
            reason: "expected YYYY-MM-DD HH:MM".to_string(),
        });
    }

    NaiveDateTime::parse_from_str(text, DEADLINE_FORMAT).map_err(|e| SchedulerError::Parse {
        input: text.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a calendar date like "2026-02-20"; "2026-2-20" is accepted too.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    if !DATE_SHAPE.is_match(text) {
        return Err(SchedulerError::Parse {
            input: text.to_string(),
            reason: "expected YYYY-MM-DD (month and day may be unpadded)".to_string(),
        });
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| SchedulerError::Parse {
        input: text.to_string(),
        reason: e.to_string(),
    })
}

/// Format a deadline back into the input pattern.
pub fn format_deadline(dt: NaiveDateTime) -> String {
    dt.format(DEADLINE_FORMAT).to_string()
}

/// Serde adapter keeping deadlines in their textual form.
pub mod deadline_text {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_deadline(*dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(d)?;
        super::parse_deadline(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_deadline() {
        let dt = parse_deadline("2026-02-20 23:59").unwrap();
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.month(), 2);
        assert_eq!(dt.day(), 20);
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 59);
    }

    #[test]
    fn test_round_trip() {
        for text in ["2026-02-20 23:59", "1999-12-31 00:00", "2024-02-29 12:05"] {
            let dt = parse_deadline(text).unwrap();
            assert_eq!(format_deadline(dt), text);
            assert_eq!(parse_deadline(&format_deadline(dt)).unwrap(), dt);
        }
    }

    #[test]
    fn test_rejects_other_shapes() {
        for bad in [
            "",
            "2026-2-20 23:59",
            "2026-02-20 9:05",
            "2026-02-20T23:59",
            "2026-02-20 23:59:00",
            "2026/02/20 23:59",
            " 2026-02-20 23:59",
            "tomorrow",
        ] {
            let err = parse_deadline(bad).unwrap_err();
            assert!(matches!(err, SchedulerError::Parse { .. }), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_rejects_impossible_values() {
        assert!(parse_deadline("2026-02-30 10:00").is_err());
        assert!(parse_deadline("2026-13-01 10:00").is_err());
        assert!(parse_deadline("2026-01-01 24:00").is_err());
        assert!(parse_deadline("2025-02-29 10:00").is_err());
    }

    #[test]
    fn test_parse_date() {
        let d = parse_date("2026-02-20").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());
        assert!(parse_date("2026-02-20 10:00").is_err());
        assert!(parse_date("20-02-2026").is_err());
    }

    #[test]
    fn test_parse_date_unpadded() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(parse_date("2026-3-1").unwrap(), d);
        assert_eq!(parse_date("2026-03-1").unwrap(), d);
        assert!(parse_date("2026-3-32").is_err());
        assert!(parse_date("2026-003-01").is_err());
        assert!(parse_date("2026--1").is_err());
    }
}
