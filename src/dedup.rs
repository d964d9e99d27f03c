//! Collapses candidate views that render identical calendars.

use std::collections::HashSet;

use crate::event::ScheduleView;

/// Keep the first view per distinct sync-event rendering, in first-seen
/// order.
///
/// The equality key is the canonical JSON serialization of the colorized
/// sync events. The async list is deliberately not part of the key: two
/// candidates whose only difference is which asynchronous section was chosen
/// draw the same calendar, and the first one seen keeps its async list.
pub fn dedup_views(views: Vec<ScheduleView>) -> Vec<ScheduleView> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(views.len());
    for view in views {
        let key = serde_json::to_string(&view.sync_events)
            .expect("display events always serialize");
        if seen.insert(key) {
            unique.push(view);
        }
    }
    unique
}
