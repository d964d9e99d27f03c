//! The materialization pipeline: raw candidate schedules in, deduplicated
//! display-ready schedule views out.
//!
//! Every meeting time yields exactly two events: the run up to the
//! reading-week recess and the continuation after it. Weekly meetings resume
//! on the first post-recess teaching day; biweekly labs resume wherever the
//! odd/even cadence lands once the recess gap is accounted for.

use std::collections::HashMap;

use crate::color::assign_colors;
use crate::course::{RawCourseMeeting, RawMeetingTime, RawScheduleSet, ReadingWeekBounds};
use crate::date::{day_index, duration, inclusive_end};
use crate::dedup::dedup_views;
use crate::error::{CourseViewError, CourseViewResult};
use crate::event::{
    AsyncCourse, BiweeklyEvent, BiweeklyRule, DisplayEvent, RecurrenceFreq, ScheduleView,
    SingleRangeEvent,
};
use crate::parity::{resolve_parity, WeekParity};

/// Materialize every candidate in `raw` for `term`, colorize each view, and
/// collapse candidates that render identically. The result preserves
/// first-seen candidate order.
pub fn materialize(
    raw: &RawScheduleSet,
    term: &str,
    reading_week_by_term: &HashMap<String, ReadingWeekBounds>,
) -> CourseViewResult<Vec<ScheduleView>> {
    let bounds = reading_week_by_term
        .get(term)
        .ok_or_else(|| CourseViewError::UnknownTerm(term.to_string()))?;

    let mut views = Vec::with_capacity(raw.schedules.len());
    for schedule in &raw.schedules {
        let mut sync_events = Vec::new();
        let mut async_courses = Vec::new();
        for meeting in &schedule.meetings {
            materialize_meeting(meeting, bounds, &mut sync_events, &mut async_courses)?;
        }
        if !sync_events.is_empty() {
            assign_colors(&mut sync_events);
        }
        views.push(ScheduleView {
            sync_events,
            async_courses,
        });
    }
    Ok(dedup_views(views))
}

/// Emit the display events (or the async entry) for one course meeting, in
/// meeting-time order.
fn materialize_meeting(
    meeting: &RawCourseMeeting,
    bounds: &ReadingWeekBounds,
    sync_events: &mut Vec<DisplayEvent>,
    async_courses: &mut Vec<AsyncCourse>,
) -> CourseViewResult<()> {
    if meeting.end_date < meeting.start_date {
        return Err(CourseViewError::DateRangeInverted {
            start: meeting.start_date,
            end: meeting.end_date,
        });
    }

    let title = meeting.title();
    let end_bound = inclusive_end(meeting.end_date);

    for time in &meeting.times {
        if time.end_time < time.start_time {
            return Err(CourseViewError::TimeRangeInverted {
                start: time.start_time,
                end: time.end_time,
            });
        }
        match time.week_parity {
            WeekParity::Odd | WeekParity::Even => {
                sync_events.push(biweekly_event(
                    meeting,
                    time,
                    &title,
                    meeting.start_date,
                    bounds.recess_start,
                )?);

                // Where the lab resumes depends on how many calendar weeks
                // elapsed before the recess: if the cadence lands on the
                // first post-recess week it continues there, otherwise it
                // skips one more week.
                let resolved =
                    resolve_parity(meeting.start_date, bounds.recess_start, time.week_parity);
                let continuation_start =
                    if resolved == WeekParity::Odd && time.week_parity == WeekParity::Odd {
                        bounds.recess_end
                    } else {
                        bounds.recess_next_week_end
                    };
                sync_events.push(biweekly_event(
                    meeting,
                    time,
                    &title,
                    continuation_start,
                    end_bound,
                )?);
            }
            WeekParity::None => {
                sync_events.push(single_range_event(
                    meeting,
                    time,
                    &title,
                    meeting.start_date,
                    bounds.recess_start,
                )?);
                sync_events.push(single_range_event(
                    meeting,
                    time,
                    &title,
                    bounds.recess_end,
                    end_bound,
                )?);
            }
        }
    }

    if meeting.times.is_empty() {
        async_courses.push(AsyncCourse {
            title,
            crn: meeting.crn.clone(),
        });
    }
    Ok(())
}

fn single_range_event(
    meeting: &RawCourseMeeting,
    time: &RawMeetingTime,
    title: &str,
    start_recur: chrono::NaiveDate,
    end_recur: chrono::NaiveDate,
) -> CourseViewResult<DisplayEvent> {
    Ok(DisplayEvent::SingleRange(SingleRangeEvent {
        title: title.to_string(),
        start_time: time.start_time,
        end_time: time.end_time,
        days_of_week: vec![day_index(&time.day_of_week)?],
        start_recur,
        end_recur,
        crn: meeting.crn.clone(),
        instructor: meeting.instructor.clone(),
        status: meeting.status.clone(),
        color: None,
    }))
}

fn biweekly_event(
    meeting: &RawCourseMeeting,
    time: &RawMeetingTime,
    title: &str,
    start: chrono::NaiveDate,
    until: chrono::NaiveDate,
) -> CourseViewResult<DisplayEvent> {
    // The rrule plugin counts weekdays from Monday where the widget's
    // daysOfWeek counts from Sunday.
    let byweekday = (day_index(&time.day_of_week)? + 6).rem_euclid(7) as u8;
    Ok(DisplayEvent::Biweekly(BiweeklyEvent {
        title: title.to_string(),
        rrule: BiweeklyRule {
            freq: RecurrenceFreq::Weekly,
            interval: 2,
            dtstart: start.and_time(time.start_time),
            until,
            byweekday: vec![byweekday],
        },
        duration: duration(time.start_time, time.end_time)?,
        crn: meeting.crn.clone(),
        instructor: meeting.instructor.clone(),
        status: meeting.status.clone(),
        color: None,
    }))
}
