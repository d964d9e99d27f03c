//! Calendar-date and wall-clock arithmetic shared by the materializer.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{CourseViewError, CourseViewResult};

/// Sunday-based day indices, the convention the calendar widget's
/// `daysOfWeek` field uses.
const DAY_INDICES: [(&str, i8); 7] = [
    ("Sun", 0),
    ("Mon", 1),
    ("Tue", 2),
    ("Wed", 3),
    ("Thu", 4),
    ("Fri", 5),
    ("Sat", 6),
];

/// Long-to-short weekday names for the five teaching days.
const SHORT_FORMS: [(&str, &str); 5] = [
    ("Monday", "Mon"),
    ("Tuesday", "Tue"),
    ("Wednesday", "Wed"),
    ("Thursday", "Thu"),
    ("Friday", "Fri"),
];

/// Sunday-based index (Sun=0 .. Sat=6) for a short weekday name.
///
/// The empty string is the "no day selected" sentinel and maps to -1; any
/// other unrecognized name is an error.
pub fn day_index(name: &str) -> CourseViewResult<i8> {
    if name.is_empty() {
        return Ok(-1);
    }
    DAY_INDICES
        .iter()
        .find(|(short, _)| *short == name)
        .map(|(_, index)| *index)
        .ok_or_else(|| CourseViewError::InvalidDayOfWeek(name.to_string()))
}

/// Three-letter short form for a long weekday name. Empty input stays empty.
pub fn short_form(long_name: &str) -> CourseViewResult<&'static str> {
    if long_name.is_empty() {
        return Ok("");
    }
    SHORT_FORMS
        .iter()
        .find(|(long, _)| *long == long_name)
        .map(|(_, short)| *short)
        .ok_or_else(|| CourseViewError::InvalidDayOfWeek(long_name.to_string()))
}

/// Elapsed wall-clock time between two times as zero-padded "HH:MM".
///
/// An end before the start is rejected rather than yielding a negative span.
pub fn duration(start: NaiveTime, end: NaiveTime) -> CourseViewResult<String> {
    if end < start {
        return Err(CourseViewError::TimeRangeInverted { start, end });
    }
    let minutes = (end - start).num_minutes();
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// Push a course end date forward one calendar day.
///
/// Recurrence end bounds are exclusive downstream while course end dates are
/// inclusive, so the last teaching day must stay inside the range.
pub fn inclusive_end(date: NaiveDate) -> NaiveDate {
    date + Duration::days(1)
}

/// Serde helper for "HH:MM" wall-clock times, the registrar wire format.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
