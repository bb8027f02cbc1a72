// Raw provider review -> fully populated record

use reviews_widget_models::{RawReview, ReviewRecord, DEFAULT_AUTHOR_NAME, PLACEHOLDER_PHOTO_URL};

/// Apply defaults to every absent field of a raw review.
///
/// Never fails. `now` stands in for a missing timestamp so that undated
/// reviews read as posted "Today".
pub fn normalize_review(raw: &RawReview, now: i64) -> ReviewRecord {
    ReviewRecord {
        author_name: raw
            .author_name
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
        photo_url: raw
            .profile_photo_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_PHOTO_URL.to_string()),
        rating: raw.rating.unwrap_or(0.0),
        text: raw.text.clone().unwrap_or_default(),
        timestamp: raw.time.unwrap_or(now),
    }
}

pub fn normalize_reviews(raw: &[RawReview], now: i64) -> Vec<ReviewRecord> {
    raw.iter().map(|r| normalize_review(r, now)).collect()
}
