use async_trait::async_trait;
use reviews_widget_models::PlaceDetails;
use std::path::PathBuf;
use tracing::info;
use crate::error::SourceError;
use crate::google::api::parse_place_details;
use crate::traits::ReviewSource;

/// Reads a saved place details response instead of calling the provider.
///
/// Useful for previewing the widget offline and for tests.
pub struct FileSource {
    path: PathBuf,
    place_id: Option<String>,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path, place_id: None }
    }

    pub fn with_place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }
}

#[async_trait]
impl ReviewSource for FileSource {
    fn source_name(&self) -> &str {
        "file"
    }

    fn place_id(&self) -> Option<&str> {
        self.place_id.as_deref()
    }

    async fn fetch_place_details(&self) -> Result<PlaceDetails, SourceError> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SourceError::fetch(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        let details = parse_place_details(&body)?;
        info!(
            operation = "place_details_loaded",
            path = %self.path.display(),
            review_count = details.reviews.as_ref().map(|r| r.len()).unwrap_or(0),
            "Loaded place details from file"
        );
        Ok(details)
    }
}
