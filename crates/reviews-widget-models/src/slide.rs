use serde::Serialize;
use crate::display::DisplayReview;

/// Which presentation a slide set is built for
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlideLayout {
    /// One grid slide holding every review
    Desktop,
    /// One accordion entry per review
    Mobile,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Slide {
    pub reviews: Vec<DisplayReview>,
}

impl Slide {
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlideSet {
    pub layout: SlideLayout,
    pub slides: Vec<Slide>,
}

impl SlideSet {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Total number of reviews across all slides
    pub fn review_count(&self) -> usize {
        self.slides.iter().map(|s| s.reviews.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
