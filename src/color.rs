//! Stable color assignment for one schedule's sync events.

use std::collections::HashMap;

use crate::event::DisplayEvent;

/// Fixed palette shared by every pipeline run. Assignment cycles back to the
/// start after the ninth distinct course group.
pub const COLOR_PALETTE: [&str; 9] = [
    "#003B49", "#1D4289", "#BF122B", "#DC582A", "#007A78", "#1B365D", "#5D3754", "#41B6E6",
    "#FFC845",
];

/// Group key for color sharing: the "letters, one whitespace, four digits"
/// course code inside the title (e.g. "SYSC 2006" out of "SYSC 2006A"),
/// searched anywhere in the title. Titles without such a code keep the full
/// title as their own group.
fn group_key(title: &str) -> &str {
    let bytes = title.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            if bytes.len() >= i + 5
                && bytes[i].is_ascii_whitespace()
                && bytes[i + 1..i + 5].iter().all(u8::is_ascii_digit)
            {
                return &title[start..i + 5];
            }
        } else {
            i += 1;
        }
    }
    title
}

/// Color events in place, scanning in order: the first event of a new group
/// claims the next palette entry, later events of the group reuse it.
pub fn assign_colors(events: &mut [DisplayEvent]) {
    let mut claimed: HashMap<String, &'static str> = HashMap::new();
    let mut next = 0;
    for event in events.iter_mut() {
        let key = group_key(event.title()).to_string();
        let color = *claimed.entry(key).or_insert_with(|| {
            let color = COLOR_PALETTE[next % COLOR_PALETTE.len()];
            next += 1;
            color
        });
        event.set_color(color);
    }
}
