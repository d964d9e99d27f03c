//! Error types for the courseview core.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Errors that can occur while materializing schedule views.
///
/// Well-formed input never errors; every variant is a local validation
/// failure surfaced synchronously to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseViewError {
    #[error("Unrecognized day of week: '{0}'")]
    InvalidDayOfWeek(String),

    #[error("Time range ends before it starts: {start}..{end}")]
    TimeRangeInverted { start: NaiveTime, end: NaiveTime },

    #[error("Date range ends before it starts: {start}..{end}")]
    DateRangeInverted { start: NaiveDate, end: NaiveDate },

    #[error("No reading week bounds for term '{0}'")]
    UnknownTerm(String),
}

/// Result type alias for courseview operations.
pub type CourseViewResult<T> = Result<T, CourseViewError>;
