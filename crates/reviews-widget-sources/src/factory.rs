//! Picks the review source for a run from configuration and credentials.

use reviews_widget_config::{Config, CredentialStore};
use std::path::PathBuf;
use tracing::debug;
use crate::error::SourceError;
use crate::file::FileSource;
use crate::google::GooglePlacesClient;
use crate::traits::ReviewSource;

/// Build the source for this run.
///
/// A saved response file wins over the live API; it still picks up the
/// configured place id (when there is one) so links in the widget work.
pub fn create_source(
    config: &Config,
    credentials: &CredentialStore,
    input: Option<PathBuf>,
) -> Result<Box<dyn ReviewSource>, SourceError> {
    if let Some(path) = input {
        debug!(operation = "create_source", source = "file", path = %path.display());
        let mut source = FileSource::new(path);
        if config.is_place_configured() {
            source = source.with_place_id(config.google.place_id.trim());
        }
        return Ok(Box::new(source));
    }

    if !config.is_place_configured() {
        return Err(SourceError::NotConfigured(
            "google.place_id is not set (config.toml or GOOGLE_PLACE_ID)".to_string(),
        ));
    }

    let api_key = credentials.resolve_google_api_key().ok_or_else(|| {
        SourceError::NotConfigured(
            "Google API key is not set (run `reviews-widget config set-key` or set GOOGLE_API_KEY)"
                .to_string(),
        )
    })?;

    debug!(operation = "create_source", source = "google");
    Ok(Box::new(GooglePlacesClient::new(&config.google, api_key)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_key() -> CredentialStore {
        let mut store = CredentialStore::new(PathBuf::from("/tmp/reviews-widget-test-credentials.toml"));
        store.set_google_api_key("stored-key".to_string());
        store
    }

    #[test]
    fn test_input_file_wins() {
        let mut config = Config::default();
        config.google.place_id = "abc".to_string();
        let source = create_source(&config, &store_with_key(), Some(PathBuf::from("saved.json"))).unwrap();

        assert_eq!(source.source_name(), "file");
        assert_eq!(source.place_id(), Some("abc"));
    }

    #[test]
    fn test_google_source_from_config() {
        let mut config = Config::default();
        config.google.place_id = "abc".to_string();
        let source = create_source(&config, &store_with_key(), None).unwrap();

        assert_eq!(source.source_name(), "google");
        assert_eq!(source.place_id(), Some("abc"));
    }

    #[test]
    fn test_missing_place_id() {
        let result = create_source(&Config::default(), &store_with_key(), None);
        assert!(matches!(result, Err(SourceError::NotConfigured(_))));
    }
}
