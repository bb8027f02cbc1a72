// Grouping display reviews into slides

use reviews_widget_models::{DisplayReview, Slide, SlideLayout, SlideSet};

/// Group reviews for a layout, keeping their order.
///
/// Desktop always yields exactly one slide, even when there are no reviews,
/// so the renderer can show a placeholder card. Mobile yields one slide per
/// review and nothing at all for an empty list.
pub fn partition(reviews: &[DisplayReview], layout: SlideLayout) -> SlideSet {
    let slides = match layout {
        SlideLayout::Desktop => vec![Slide { reviews: reviews.to_vec() }],
        SlideLayout::Mobile => reviews
            .chunks(1)
            .map(|chunk| Slide { reviews: chunk.to_vec() })
            .collect(),
    };

    SlideSet { layout, slides }
}
