use async_trait::async_trait;
use reviews_widget_models::PlaceDetails;
use crate::error::SourceError;

/// Something that can hand over a place's rating summary and reviews.
///
/// Implementations do one attempt per call: no retries, no caching.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    fn source_name(&self) -> &str;

    /// Place id used for "Review us" links, if the source knows one
    fn place_id(&self) -> Option<&str> {
        None
    }

    async fn fetch_place_details(&self) -> Result<PlaceDetails, SourceError>;
}
