//! Calendar-widget-facing display types.
//!
//! A [`ScheduleView`] is the materialized, display-ready form of one
//! candidate schedule: the recurring events the calendar draws, plus the
//! asynchronous sections that have no calendar footprint.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One renderable recurring event.
///
/// Serialized untagged: the widget distinguishes the two shapes by their
/// fields (`daysOfWeek`/`startRecur` vs. `rrule`/`duration`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DisplayEvent {
    SingleRange(SingleRangeEvent),
    Biweekly(BiweeklyEvent),
}

impl DisplayEvent {
    pub fn title(&self) -> &str {
        match self {
            DisplayEvent::SingleRange(event) => &event.title,
            DisplayEvent::Biweekly(event) => &event.title,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            DisplayEvent::SingleRange(event) => event.color.as_deref(),
            DisplayEvent::Biweekly(event) => event.color.as_deref(),
        }
    }

    pub(crate) fn set_color(&mut self, color: &str) {
        let slot = match self {
            DisplayEvent::SingleRange(event) => &mut event.color,
            DisplayEvent::Biweekly(event) => &mut event.color,
        };
        *slot = Some(color.to_string());
    }
}

/// An every-week recurrence over a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleRangeEvent {
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Sunday-based weekday indices (the widget accepts a list).
    pub days_of_week: Vec<i8>,
    pub start_recur: NaiveDate,
    /// Exclusive.
    pub end_recur: NaiveDate,
    pub crn: String,
    pub instructor: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A biweekly recurrence, expressed as a rule for the widget's rrule plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiweeklyEvent {
    pub title: String,
    pub rrule: BiweeklyRule,
    /// Event length as zero-padded "HH:MM"; rrule occurrences carry no end
    /// time of their own.
    pub duration: String,
    pub crn: String,
    pub instructor: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The recurrence rule itself: weekly frequency at a two-week interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiweeklyRule {
    pub freq: RecurrenceFreq,
    pub interval: u8,
    /// First occurrence, date and start-of-class time combined.
    pub dtstart: NaiveDateTime,
    /// Exclusive end bound.
    pub until: NaiveDate,
    /// Monday-based weekday indices (Mon=0 .. Sun=6).
    pub byweekday: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFreq {
    Weekly,
}

/// An asynchronous section: rendered as a list entry, not a calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsyncCourse {
    pub title: String,
    pub crn: String,
}

/// The display-ready form of one candidate schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleView {
    #[serde(rename = "sync")]
    pub sync_events: Vec<DisplayEvent>,
    #[serde(rename = "async")]
    pub async_courses: Vec<AsyncCourse>,
}
