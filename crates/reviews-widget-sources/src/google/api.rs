use reqwest::Client;
use reviews_widget_models::{PlaceDetails, PlaceDetailsResponse};
use tracing::{debug, warn};
use crate::error::SourceError;

const REVIEW_PAGE_BASE: &str = "https://search.google.com/local/reviews";

/// Parameters of one place details call
#[derive(Debug, Clone)]
pub struct DetailsRequest<'a> {
    pub endpoint: &'a str,
    pub place_id: &'a str,
    pub fields: &'a str,
    pub api_key: &'a str,
    pub language: Option<&'a str>,
}

impl<'a> DetailsRequest<'a> {
    pub fn query(&self) -> Vec<(&'static str, &'a str)> {
        let mut query = vec![
            ("place_id", self.place_id),
            ("fields", self.fields),
            ("key", self.api_key),
        ];
        if let Some(language) = self.language {
            query.push(("language", language));
        }
        query
    }
}

/// Public reviews page for a place, where visitors can read and leave reviews
pub fn review_page_url(place_id: &str) -> String {
    format!("{}?placeid={}", REVIEW_PAGE_BASE, urlencoding::encode(place_id))
}

/// Fetch place details in a single attempt
pub async fn get_place_details(
    client: &Client,
    request: &DetailsRequest<'_>,
) -> Result<PlaceDetails, SourceError> {
    debug!(
        operation = "place_details_request",
        endpoint = request.endpoint,
        place_id = request.place_id,
        fields = request.fields,
        "Requesting place details"
    );

    let response = client
        .get(request.endpoint)
        .query(&request.query())
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(SourceError::fetch(format!(
            "place details returned {} - {}",
            status, error_text
        )));
    }

    let body = response.text().await?;
    parse_place_details(&body)
}

/// Decode a place details body and unwrap its `result`.
///
/// Anything that is not JSON, or JSON without a `result`, is an invalid
/// response; the provider's `status` and `error_message` are carried along
/// for the logs.
pub fn parse_place_details(body: &str) -> Result<PlaceDetails, SourceError> {
    let response: PlaceDetailsResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::invalid(None, Some(format!("malformed JSON: {}", e))))?;

    match response.result {
        Some(details) => {
            if let Some(status) = response.status.as_deref().filter(|s| *s != "OK") {
                warn!(
                    operation = "place_details_status",
                    status,
                    "Place details returned a result with a non-OK status"
                );
            }
            if details.reviews.as_ref().map_or(true, |r| r.is_empty()) {
                warn!(operation = "place_details_reviews", "Place details contain no reviews");
            }
            Ok(details)
        }
        None => Err(SourceError::invalid(response.status, response.error_message)),
    }
}
