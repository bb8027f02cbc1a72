/// Shown in place of the widget when the provider could not be reached
pub const FETCH_FAILED_MESSAGE: &str =
    "Could not fetch reviews. Please check server logs or API configuration.";

/// Shown in place of the widget when the provider answered with something unusable
pub const INVALID_RESPONSE_MESSAGE: &str =
    "Invalid response from Google. Check your Place ID or API key.";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Transport error, non-success HTTP status, or unreadable body
    #[error("failed to fetch reviews: {0}")]
    Fetch(String),

    /// Body was not JSON or had no top-level `result`
    #[error("invalid response from provider: {}", describe_invalid(.status, .message))]
    InvalidResponse {
        status: Option<String>,
        message: Option<String>,
    },

    /// API key or place id missing
    #[error("review source not configured: {0}")]
    NotConfigured(String),
}

fn describe_invalid(status: &Option<String>, message: &Option<String>) -> String {
    match (status, message) {
        (Some(status), Some(message)) => format!("{} ({})", status, message),
        (Some(status), None) => status.clone(),
        (None, Some(message)) => message.clone(),
        (None, None) => "missing result".to_string(),
    }
}

impl SourceError {
    pub fn fetch(message: impl Into<String>) -> Self {
        SourceError::Fetch(message.into())
    }

    pub fn invalid(status: Option<String>, message: Option<String>) -> Self {
        SourceError::InvalidResponse { status, message }
    }

    /// Fixed text for end users; details stay in the logs
    pub fn user_message(&self) -> &'static str {
        match self {
            SourceError::InvalidResponse { .. } => INVALID_RESPONSE_MESSAGE,
            SourceError::Fetch(_) | SourceError::NotConfigured(_) => FETCH_FAILED_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Fetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(SourceError::fetch("timed out").user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(
            SourceError::NotConfigured("no key".to_string()).user_message(),
            FETCH_FAILED_MESSAGE
        );
        assert_eq!(SourceError::invalid(None, None).user_message(), INVALID_RESPONSE_MESSAGE);
    }

    #[test]
    fn test_invalid_response_display() {
        let err = SourceError::invalid(
            Some("REQUEST_DENIED".to_string()),
            Some("The provided API key is invalid.".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "invalid response from provider: REQUEST_DENIED (The provided API key is invalid.)"
        );
        assert_eq!(
            SourceError::invalid(None, None).to_string(),
            "invalid response from provider: missing result"
        );
    }
}
