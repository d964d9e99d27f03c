//! Raw registrar-shaped input types.
//!
//! These mirror the JSON produced by the schedule-generation service: a set
//! of candidate schedules, each an ordered list of course meetings. The core
//! never mutates them; each pipeline run reads them and produces fresh
//! display views.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::date::hhmm;
use crate::parity::WeekParity;

/// One query's worth of candidate schedules, in generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScheduleSet {
    #[serde(rename = "Schedules")]
    pub schedules: Vec<RawSchedule>,
}

/// One candidate combination of course sections (a bare array on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSchedule {
    pub meetings: Vec<RawCourseMeeting>,
}

/// One section's term-long meeting record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCourseMeeting {
    pub course_code: String,
    #[serde(rename = "SectionID")]
    pub section_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "CRN")]
    pub crn: String,
    pub instructor: String,
    pub status: String,
    pub times: Vec<RawMeetingTime>,
}

impl RawCourseMeeting {
    /// Display title: course code immediately followed by the section id,
    /// e.g. "SYSC 2006" + "A" -> "SYSC 2006A".
    pub fn title(&self) -> String {
        format!("{}{}", self.course_code, self.section_id)
    }

    /// A section with no scheduled times is asynchronous: it gets a list
    /// entry instead of calendar events.
    pub fn is_async(&self) -> bool {
        self.times.is_empty()
    }
}

/// A weekly (or biweekly) meeting slot within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMeetingTime {
    /// Short weekday name ("Sun".."Sat").
    pub day_of_week: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(rename = "WeekSchedule")]
    pub week_parity: WeekParity,
}

/// Reading-week boundary dates for one term, supplied by the term service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingWeekBounds {
    /// Last recurrence bound before the recess (exclusive downstream).
    #[serde(rename = "ReadingWeekStart")]
    pub recess_start: NaiveDate,
    /// First teaching day after the recess.
    #[serde(rename = "ReadingWeekEnd")]
    pub recess_end: NaiveDate,
    /// One week past the recess, for biweekly continuations that skip a week.
    #[serde(rename = "ReadingWeekNext")]
    pub recess_next_week_end: NaiveDate,
}
