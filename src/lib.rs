//! Core transform for the course-schedule viewer.
//!
//! Converts raw, per-term course-meeting records into a deduplicated set of
//! calendar-renderable schedule views:
//! - splits every meeting's date range around the term's reading-week recess,
//! - resolves odd/even week parity for biweekly labs,
//! - assigns stable per-course colors within each view,
//! - collapses candidates that render identical calendars.
//!
//! The crate is a pure in-process boundary: no I/O, no shared state, and no
//! mutation of its inputs. Candidate generation, network retrieval, and the
//! rendering widget all live in the embedding application.

pub mod color;
pub mod course;
pub mod date;
pub mod dedup;
pub mod error;
pub mod event;
pub mod materialize;
pub mod parity;

pub use color::COLOR_PALETTE;
pub use course::{
    RawCourseMeeting, RawMeetingTime, RawSchedule, RawScheduleSet, ReadingWeekBounds,
};
pub use error::{CourseViewError, CourseViewResult};
pub use event::{
    AsyncCourse, BiweeklyEvent, BiweeklyRule, DisplayEvent, RecurrenceFreq, ScheduleView,
    SingleRangeEvent,
};
pub use materialize::materialize;
pub use parity::{resolve_parity, WeekParity};
