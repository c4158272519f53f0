// src/domain/due_dates.rs

use chrono::{Days, NaiveDate};

/// Days relative to the move date (negative = before the move).
/// Institutions not listed here are due on the move date itself.
pub const DUE_DATE_RULES: &[(&str, i64)] = &[
    ("utilities-broadband", -14),
    ("bank", -3),
    ("tv-licence", -3),
    ("council-tax", -7),
    ("dvla-v5c", 1),
    ("dvla-licence", 3),
    ("voter", 3),
    ("hmrc", 7),
    ("gp", 7),
    ("dentist", 7),
    // two weeks to settle in before looking for clubs
    ("clubs-societies", 14),
];

pub fn due_offset_days(institution_id: &str) -> i64 {
    DUE_DATE_RULES
        .iter()
        .find(|(id, _)| *id == institution_id)
        .map(|(_, offset)| *offset)
        .unwrap_or(0)
}

/// Due date for a task: calendar-day arithmetic on a plain date, so no time
/// zone or DST shift can move it.
pub fn due_date(institution_id: &str, move_date: NaiveDate) -> NaiveDate {
    let offset = due_offset_days(institution_id);
    let days = Days::new(offset.unsigned_abs());

    let shifted = if offset < 0 {
        move_date.checked_sub_days(days)
    } else {
        move_date.checked_add_days(days)
    };

    // Only out of range at the edges of the calendar.
    shifted.unwrap_or(move_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn every_rule_is_exact_offset() {
        let move_date = d(2024, 6, 15);
        for (id, offset) in DUE_DATE_RULES {
            let expected = move_date + chrono::Duration::days(*offset);
            assert_eq!(due_date(id, move_date), expected, "rule {id}");
        }
    }

    #[test]
    fn crosses_month_boundary() {
        assert_eq!(due_date("hmrc", d(2024, 1, 28)), d(2024, 2, 4));
    }

    #[test]
    fn crosses_year_boundary_both_ways() {
        assert_eq!(due_date("utilities-broadband", d(2025, 1, 5)), d(2024, 12, 22));
        assert_eq!(due_date("clubs-societies", d(2024, 12, 25)), d(2025, 1, 8));
    }

    #[test]
    fn handles_leap_day() {
        assert_eq!(due_date("council-tax", d(2024, 3, 6)), d(2024, 2, 28));
        assert_eq!(due_date("dvla-v5c", d(2024, 2, 28)), d(2024, 2, 29));
    }

    #[test]
    fn across_uk_dst_change_is_still_whole_days() {
        // Clocks go forward on 2024-03-31.
        assert_eq!(due_date("gp", d(2024, 3, 28)), d(2024, 4, 4));
    }

    #[test]
    fn unknown_ids_default_to_move_date() {
        let move_date = d(2024, 6, 15);
        assert_eq!(due_date("post-office", move_date), move_date);
        assert_eq!(due_date("", move_date), move_date);
        assert_eq!(due_date("HMRC", move_date), move_date);
    }
}
