use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR_NAME: &str = "Anonymous";
pub const PLACEHOLDER_PHOTO_URL: &str = "https://via.placeholder.com/40";

/// A review with every field resolved.
///
/// Text is kept exactly as the provider sent it; escaping belongs to the
/// renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
    pub author_name: String,
    pub photo_url: String,
    pub rating: f64, // 0-5, not validated
    pub text: String,
    pub timestamp: i64, // Unix epoch seconds
}
