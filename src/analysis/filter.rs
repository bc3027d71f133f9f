//! Month/year filtering of the review collection.

use anyhow::{Result, bail};
use chrono::Datelike;

use crate::dataset::Review;

/// Calendar month names in display order; the selector and the 1-based
/// ordinal conversion both index into this list.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The scraped dataset only covers this year.
pub const TARGET_YEAR: i32 = 2023;

/// Converts a month name to its 1-based ordinal. Case-insensitive.
pub fn month_ordinal(name: &str) -> Result<u32> {
    let needle = name.trim();
    for (idx, month) in MONTHS.iter().enumerate() {
        if month.eq_ignore_ascii_case(needle) {
            return Ok(idx as u32 + 1);
        }
    }
    bail!("unknown month name: {name}");
}

/// Retains reviews whose parsed date falls in `month` of [`TARGET_YEAR`].
///
/// Rows with unparseable dates never pass. An empty result is a valid
/// outcome; the caller renders a "no data for this period" state.
pub fn filter_by_month<'a>(reviews: &'a [Review], month: u32) -> Vec<&'a Review> {
    reviews
        .iter()
        .filter(|r| {
            r.parsed_date()
                .is_some_and(|d| d.month() == month && d.year() == TARGET_YEAR)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(date: &str) -> Review {
        Review {
            date: date.to_string(),
            rating: 4,
            text: String::new(),
        }
    }

    #[test]
    fn test_month_ordinal() {
        assert_eq!(month_ordinal("January").unwrap(), 1);
        assert_eq!(month_ordinal("may").unwrap(), 5);
        assert_eq!(month_ordinal(" December ").unwrap(), 12);
        assert!(month_ordinal("Sunday").is_err());
    }

    #[test]
    fn test_filter_keeps_only_selected_month_and_year() {
        let reviews = vec![
            review("2023-05-02"),
            review("2023-05-31"),
            review("2023-06-01"),
            review("2022-05-10"), // right month, wrong year
        ];

        let filtered = filter_by_month(&reviews, 5);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.date.starts_with("2023-05")));
    }

    #[test]
    fn test_filter_drops_unparseable_dates() {
        let reviews = vec![review("2023-05-02"), review("sometime in May")];
        let filtered = filter_by_month(&reviews, 5);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let reviews = vec![review("2023-05-02"), review("2023-05-03")];
        let once: Vec<Review> = filter_by_month(&reviews, 5)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_by_month(&once, 5);

        assert_eq!(twice.len(), once.len());
        for (a, b) in twice.iter().zip(once.iter()) {
            assert_eq!(a.date, b.date);
        }
    }

    #[test]
    fn test_filter_empty_month_is_empty_not_error() {
        let reviews = vec![review("2023-05-02")];
        assert!(filter_by_month(&reviews, 12).is_empty());
    }
}
