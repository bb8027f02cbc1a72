use serde::Serialize;
use std::fmt;
use crate::record::ReviewRecord;

/// A review with every presentation field already derived.
///
/// Renderers read these fields as-is; no truncation, date math or rating
/// rounding happens after this point.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayReview {
    #[serde(flatten)]
    pub record: ReviewRecord,
    pub display_name: String,
    pub relative_age: RelativeAge,
    pub stars: StarRow,
}

/// How long ago a review was posted, bucketed by whole days.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(into = "String")]
pub enum RelativeAge {
    Today,
    DaysAgo(u64),
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeAge::Today => write!(f, "Today"),
            RelativeAge::DaysAgo(days) => write!(f, "{} days ago", days),
        }
    }
}

impl From<RelativeAge> for String {
    fn from(age: RelativeAge) -> Self {
        age.to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StarGlyph {
    Filled,
    Empty,
}

/// Five star glyphs, filled ones first.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StarRow([StarGlyph; StarRow::LEN]);

impl StarRow {
    pub const LEN: usize = 5;

    /// Build a row whose first `filled` glyphs are filled (clamped to the row length)
    pub fn with_filled(filled: usize) -> Self {
        let mut glyphs = [StarGlyph::Empty; Self::LEN];
        for glyph in glyphs.iter_mut().take(filled) {
            *glyph = StarGlyph::Filled;
        }
        Self(glyphs)
    }

    pub fn glyphs(&self) -> &[StarGlyph; Self::LEN] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = StarGlyph> + '_ {
        self.0.iter().copied()
    }

    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|g| **g == StarGlyph::Filled).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_age_display() {
        assert_eq!(RelativeAge::Today.to_string(), "Today");
        assert_eq!(RelativeAge::DaysAgo(1).to_string(), "1 days ago");
        assert_eq!(RelativeAge::DaysAgo(12).to_string(), "12 days ago");
    }

    #[test]
    fn test_relative_age_serializes_as_text() {
        let json = serde_json::to_value(RelativeAge::DaysAgo(3)).unwrap();
        assert_eq!(json, serde_json::json!("3 days ago"));
    }

    #[test]
    fn test_star_row_with_filled() {
        let row = StarRow::with_filled(3);
        assert_eq!(row.filled_count(), 3);
        assert_eq!(row.glyphs()[2], StarGlyph::Filled);
        assert_eq!(row.glyphs()[3], StarGlyph::Empty);

        assert_eq!(StarRow::with_filled(0).filled_count(), 0);
        assert_eq!(StarRow::with_filled(9).filled_count(), StarRow::LEN);
    }

    #[test]
    fn test_star_row_serializes_as_glyph_names() {
        let json = serde_json::to_value(StarRow::with_filled(1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["filled", "empty", "empty", "empty", "empty"])
        );
    }
}
