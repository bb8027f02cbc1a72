use async_trait::async_trait;
use reqwest::Client;
use reviews_widget_config::GoogleConfig;
use reviews_widget_models::PlaceDetails;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use crate::error::SourceError;
use crate::google::api::{self, DetailsRequest};
use crate::traits::ReviewSource;

/// Google Places "place details" client for a single place
#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Arc<Client>,
    api_key: String,
    place_id: String,
    fields: String,
    endpoint: String,
    language: Option<String>,
}

impl GooglePlacesClient {
    pub fn new(config: &GoogleConfig, api_key: String) -> Result<Self, SourceError> {
        if api_key.trim().is_empty() {
            return Err(SourceError::NotConfigured("Google API key is empty".to_string()));
        }
        if config.place_id.trim().is_empty() {
            return Err(SourceError::NotConfigured("Google place id is empty".to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("reviews-widget/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key,
            place_id: config.place_id.trim().to_string(),
            fields: config.fields.clone(),
            endpoint: config.endpoint.clone(),
            language: config.language.clone(),
        })
    }

    fn request(&self) -> DetailsRequest<'_> {
        DetailsRequest {
            endpoint: &self.endpoint,
            place_id: &self.place_id,
            fields: &self.fields,
            api_key: &self.api_key,
            language: self.language.as_deref(),
        }
    }
}

#[async_trait]
impl ReviewSource for GooglePlacesClient {
    fn source_name(&self) -> &str {
        "google"
    }

    fn place_id(&self) -> Option<&str> {
        Some(&self.place_id)
    }

    async fn fetch_place_details(&self) -> Result<PlaceDetails, SourceError> {
        let details = api::get_place_details(&self.client, &self.request()).await?;
        info!(
            operation = "place_details_fetched",
            place_id = %self.place_id,
            rating = details.rating.unwrap_or(0.0),
            review_count = details.reviews.as_ref().map(|r| r.len()).unwrap_or(0),
            "Fetched place details"
        );
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn google_config(place_id: &str) -> GoogleConfig {
        GoogleConfig {
            place_id: place_id.to_string(),
            ..GoogleConfig::default()
        }
    }

    #[test]
    fn test_new_requires_key_and_place() {
        assert!(matches!(
            GooglePlacesClient::new(&google_config("abc"), String::new()),
            Err(SourceError::NotConfigured(_))
        ));
        assert!(matches!(
            GooglePlacesClient::new(&google_config(" "), "key".to_string()),
            Err(SourceError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_client_exposes_place_id() {
        let client = GooglePlacesClient::new(&google_config(" abc "), "key".to_string()).unwrap();
        assert_eq!(client.source_name(), "google");
        assert_eq!(client.place_id(), Some("abc"));
        assert_eq!(
            client.request().query(),
            vec![
                ("place_id", "abc"),
                ("fields", "name,rating,reviews,user_ratings_total"),
                ("key", "key"),
            ]
        );
    }
}
