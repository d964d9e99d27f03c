//! Week-parity bookkeeping for biweekly lab meetings.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Whether a meeting runs every week or only on odd/even calendar weeks.
///
/// The wire values come from the registrar's `WeekSchedule` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekParity {
    #[serde(rename = "Every Week")]
    None,
    #[serde(rename = "Odd Week")]
    Odd,
    #[serde(rename = "Even Week")]
    Even,
}

impl WeekParity {
    /// Flip odd/even; weekly meetings have no parity to flip.
    pub fn toggled(self) -> WeekParity {
        match self {
            WeekParity::Odd => WeekParity::Even,
            WeekParity::Even => WeekParity::Odd,
            WeekParity::None => WeekParity::None,
        }
    }
}

/// Effective parity label at `recess_boundary` for a meeting whose own label
/// is `own_label` and whose first occurrence is at `term_start`.
///
/// Every Monday strictly between the two dates starts a new calendar week and
/// toggles the running label. Equal dates mean zero toggles and an unchanged
/// label.
pub fn resolve_parity(
    term_start: NaiveDate,
    recess_boundary: NaiveDate,
    own_label: WeekParity,
) -> WeekParity {
    let mut parity = own_label;
    let mut day = term_start + Duration::days(1);
    while day < recess_boundary {
        if day.weekday() == Weekday::Mon {
            parity = parity.toggled();
        }
        day = day + Duration::days(1);
    }
    parity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_toggle_swaps_odd_and_even() {
        assert_eq!(WeekParity::Odd.toggled(), WeekParity::Even);
        assert_eq!(WeekParity::Even.toggled(), WeekParity::Odd);
        assert_eq!(WeekParity::None.toggled(), WeekParity::None);
    }

    #[test]
    fn test_equal_dates_leave_label_unchanged() {
        let day = date(2024, 1, 8);
        assert_eq!(resolve_parity(day, day, WeekParity::Odd), WeekParity::Odd);
        assert_eq!(resolve_parity(day, day, WeekParity::Even), WeekParity::Even);
    }

    #[test]
    fn test_monday_start_does_not_count_itself() {
        // Term starts Monday 2024-01-08; the recess boundary is Friday
        // 2024-02-16. Mondays strictly between: 01-15, 01-22, 01-29, 02-05,
        // 02-12, so five toggles.
        let start = date(2024, 1, 8);
        let boundary = date(2024, 2, 16);
        assert_eq!(
            resolve_parity(start, boundary, WeekParity::Odd),
            WeekParity::Even
        );
        assert_eq!(
            resolve_parity(start, boundary, WeekParity::Even),
            WeekParity::Odd
        );
    }

    #[test]
    fn test_midweek_start_counts_the_same_mondays() {
        // Wednesday 2024-01-10 crosses the same five Mondays before 02-16.
        let start = date(2024, 1, 10);
        let boundary = date(2024, 2, 16);
        assert_eq!(
            resolve_parity(start, boundary, WeekParity::Odd),
            WeekParity::Even
        );
    }

    #[test]
    fn test_single_week_gap_toggles_once() {
        // Monday 2024-02-05 to Friday 2024-02-16 crosses only 02-12.
        assert_eq!(
            resolve_parity(date(2024, 2, 5), date(2024, 2, 16), WeekParity::Odd),
            WeekParity::Even
        );
    }

    #[test]
    fn test_final_partial_week_toggles_zero_times() {
        // Monday 2024-02-12 to Friday 2024-02-16 crosses no Monday.
        assert_eq!(
            resolve_parity(date(2024, 2, 12), date(2024, 2, 16), WeekParity::Odd),
            WeekParity::Odd
        );
    }

    #[test]
    fn test_weekly_label_is_inert() {
        assert_eq!(
            resolve_parity(date(2024, 1, 8), date(2024, 2, 16), WeekParity::None),
            WeekParity::None
        );
    }
}
