// Ordering and presentation fields for normalized reviews

use reviews_widget_models::{DisplayReview, RelativeAge, ReviewRecord, StarRow};

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const DEFAULT_NAME_MAX_LENGTH: usize = 11;
pub const ELLIPSIS: &str = "...";

/// Sort most recent first.
///
/// `sort_by` is stable, so reviews sharing a timestamp keep their
/// provider order.
pub fn sort_by_recency(records: &mut [ReviewRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Shorten `name` to `max_length` characters plus an ellipsis.
///
/// Counts `char`s, not bytes, so multi-byte names are never split mid
/// character. A name of exactly `max_length` characters is returned as is.
pub fn display_name(name: &str, max_length: usize) -> String {
    if name.chars().count() > max_length {
        let mut truncated: String = name.chars().take(max_length).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        name.to_string()
    }
}

/// Whole days between `timestamp` and `now`, floored.
///
/// Zero or negative differences (including timestamps in the future) are
/// "Today".
pub fn relative_age(timestamp: i64, now: i64) -> RelativeAge {
    let diff_days = now.saturating_sub(timestamp).div_euclid(SECONDS_PER_DAY);
    if diff_days <= 0 {
        RelativeAge::Today
    } else {
        RelativeAge::DaysAgo(diff_days as u64)
    }
}

/// Star row for a rating, rounding half away from zero (4.5 -> 5).
///
/// Ratings are not validated: anything above 5 fills the row, anything
/// below 0.5 (or NaN) leaves it empty.
pub fn stars(rating: f64) -> StarRow {
    let rounded = rating.round();
    let filled = (1..=StarRow::LEN)
        .take_while(|i| *i as f64 <= rounded)
        .count();
    StarRow::with_filled(filled)
}

pub fn to_display(record: ReviewRecord, now: i64, name_max_length: usize) -> DisplayReview {
    DisplayReview {
        display_name: display_name(&record.author_name, name_max_length),
        relative_age: relative_age(record.timestamp, now),
        stars: stars(record.rating),
        record,
    }
}

/// Sort records by recency and derive every display field.
pub fn transform_reviews(
    mut records: Vec<ReviewRecord>,
    now: i64,
    name_max_length: usize,
) -> Vec<DisplayReview> {
    sort_by_recency(&mut records);
    records
        .into_iter()
        .map(|record| to_display(record, now, name_max_length))
        .collect()
}
