use serde::Serialize;
use crate::display::StarRow;

/// Place-wide rating shown in the widget header.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub overall_rating: f64,
    pub total_review_count: u64,
    pub stars: StarRow,
}

impl Summary {
    /// Overall rating with one decimal place, e.g. `4.0`
    pub fn formatted_rating(&self) -> String {
        format!("{:.1}", self.overall_rating)
    }
}
