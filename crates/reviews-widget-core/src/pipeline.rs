// One-shot pipeline from provider payload to renderable widget

use reviews_widget_models::{PlaceDetails, SlideLayout, Summary, Widget};
use tracing::debug;
use crate::normalize::normalize_reviews;
use crate::partition::partition;
use crate::transform::{stars, transform_reviews, DEFAULT_NAME_MAX_LENGTH};

/// Knobs for the presentation fields
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub name_max_length: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

pub fn summarize(details: &PlaceDetails) -> Summary {
    let overall_rating = details.rating.unwrap_or(0.0);
    Summary {
        overall_rating,
        total_review_count: details.user_ratings_total.unwrap_or(0),
        stars: stars(overall_rating),
    }
}

/// Normalize, sort, derive and partition a place's reviews.
///
/// `now` is the render time in Unix seconds; it fills in missing review
/// timestamps and anchors every relative age.
pub fn build_widget(details: &PlaceDetails, now: i64, options: PipelineOptions) -> Widget {
    let raw = details.reviews.as_deref().unwrap_or(&[]);
    let records = normalize_reviews(raw, now);
    let display = transform_reviews(records, now, options.name_max_length);

    let review_count = display.len();
    debug!(
        operation = "build_widget",
        review_count,
        "Transformed reviews for rendering"
    );

    Widget {
        summary: summarize(details),
        desktop: partition(&display, SlideLayout::Desktop),
        mobile: partition(&display, SlideLayout::Mobile),
    }
}

/// [`build_widget`] anchored at the current wall-clock time
pub fn build_widget_now(details: &PlaceDetails, options: PipelineOptions) -> Widget {
    build_widget(details, chrono::Utc::now().timestamp(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviews_widget_models::{RawReview, RelativeAge};

    const NOW: i64 = 1_700_000_000;

    fn raw(name: &str, time: Option<i64>) -> RawReview {
        RawReview {
            author_name: Some(name.to_string()),
            profile_photo_url: None,
            rating: Some(5.0),
            text: Some(format!("Review by {}", name)),
            time,
        }
    }

    #[test]
    fn test_summary_defaults() {
        let summary = summarize(&PlaceDetails::default());
        assert_eq!(summary.overall_rating, 0.0);
        assert_eq!(summary.total_review_count, 0);
        assert_eq!(summary.stars.filled_count(), 0);
        assert_eq!(summary.formatted_rating(), "0.0");
    }

    #[test]
    fn test_summary_from_details() {
        let details = PlaceDetails {
            rating: Some(4.6),
            user_ratings_total: Some(128),
            ..Default::default()
        };
        let summary = summarize(&details);
        assert_eq!(summary.total_review_count, 128);
        assert_eq!(summary.stars.filled_count(), 5);
        assert_eq!(summary.formatted_rating(), "4.6");
    }

    #[test]
    fn test_build_widget_counts_and_order() {
        let details = PlaceDetails {
            name: Some("Corner Bakery".to_string()),
            rating: Some(4.2),
            user_ratings_total: Some(57),
            reviews: Some(vec![
                raw("second", Some(NOW - 2 * 86_400)),
                raw("first", Some(NOW - 3600)),
                raw("fourth", Some(NOW - 40 * 86_400)),
                raw("third", Some(NOW - 5 * 86_400)),
            ]),
        };
        let widget = build_widget(&details, NOW, PipelineOptions::default());

        assert_eq!(widget.desktop.len(), 1);
        assert_eq!(widget.mobile.len(), 4);
        assert_eq!(widget.mobile.review_count(), 4);

        let desktop_names: Vec<&str> = widget.desktop.slides[0]
            .reviews
            .iter()
            .map(|r| r.record.author_name.as_str())
            .collect();
        assert_eq!(desktop_names, vec!["first", "second", "third", "fourth"]);

        let mobile_names: Vec<&str> = widget
            .mobile
            .iter()
            .map(|s| s.reviews[0].record.author_name.as_str())
            .collect();
        assert_eq!(mobile_names, desktop_names);

        assert_eq!(widget.desktop.slides[0].reviews[3].relative_age, RelativeAge::DaysAgo(40));
    }

    #[test]
    fn test_build_widget_without_reviews() {
        let widget = build_widget(&PlaceDetails::default(), NOW, PipelineOptions::default());

        assert_eq!(widget.desktop.len(), 1);
        assert!(widget.desktop.slides[0].is_empty());
        assert!(widget.mobile.is_empty());
    }

    #[test]
    fn test_undated_review_sorts_as_now() {
        let details = PlaceDetails {
            reviews: Some(vec![raw("dated", Some(NOW - 86_400)), raw("undated", None)]),
            ..Default::default()
        };
        let widget = build_widget(&details, NOW, PipelineOptions::default());
        let first = &widget.desktop.slides[0].reviews[0];

        assert_eq!(first.record.author_name, "undated");
        assert_eq!(first.record.timestamp, NOW);
        assert_eq!(first.relative_age, RelativeAge::Today);
    }

    #[test]
    fn test_custom_name_length() {
        let details = PlaceDetails {
            reviews: Some(vec![raw("Maximilian", Some(NOW))]),
            ..Default::default()
        };
        let widget = build_widget(&details, NOW, PipelineOptions { name_max_length: 4 });

        assert_eq!(widget.desktop.slides[0].reviews[0].display_name, "Maxi...");
    }

    #[test]
    fn test_round_trip_many_distinct_timestamps() {
        let reviews: Vec<RawReview> = (0..23)
            .map(|i| raw(&format!("r{}", i), Some(NOW - ((i * 7919) % 97) as i64 * 3600 - i as i64)))
            .collect();
        let details = PlaceDetails {
            reviews: Some(reviews),
            ..Default::default()
        };
        let widget = build_widget(&details, NOW, PipelineOptions::default());

        assert_eq!(widget.mobile.review_count(), 23);
        assert_eq!(widget.desktop.len(), 1);
        let desktop = &widget.desktop.slides[0].reviews;
        assert_eq!(desktop.len(), 23);
        assert!(desktop
            .windows(2)
            .all(|w| w[0].record.timestamp > w[1].record.timestamp));
    }
}
