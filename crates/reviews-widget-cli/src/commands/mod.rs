pub mod config;
pub mod prompts;
pub mod render;
pub mod reviews;
pub mod serve;

use color_eyre::eyre::{eyre, Result};
use reviews_widget_config::{Config, CredentialStore, PathManager};
use reviews_widget_core::{build_widget_now, PipelineOptions};
use reviews_widget_render::{render_failure, WidgetRenderer};
use reviews_widget_sources::{create_source, ReviewSource, SourceError};
use std::path::{Path, PathBuf};
use tracing::error;

/// Where this invocation reads and writes its config, credentials and logs
pub struct Workspace {
    paths: PathManager,
    config_file: PathBuf,
}

impl Workspace {
    /// `--config` wins; credentials and logs then live next to that file
    pub fn resolve(config_override: Option<PathBuf>) -> Self {
        match config_override {
            Some(config_file) => {
                let base = config_file
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                Self {
                    paths: PathManager::from_base(base),
                    config_file,
                }
            }
            None => {
                let paths = PathManager::default();
                Self {
                    config_file: paths.config_file(),
                    paths,
                }
            }
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.paths.credentials_file()
    }

    /// Default log file for `serve`, with its directory created
    pub fn prepare_server_log(&self) -> Result<PathBuf> {
        self.paths
            .ensure_directories()
            .map_err(|e| eyre!("Failed to create log directory: {}", e))?;
        Ok(self.paths.server_log_file())
    }

    /// Config as written on disk, without environment overrides
    pub fn load_stored_config(&self) -> Result<Config> {
        Config::load_or_default(&self.config_file).map_err(|e| {
            eyre!("Failed to load config from {}: {}", self.config_file.display(), e)
        })
    }

    /// Config for a run: file (or defaults) plus `GOOGLE_PLACE_ID`
    pub fn load_config(&self) -> Result<Config> {
        let mut config = self.load_stored_config()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// [`load_config`](Self::load_config), rejecting settings no fetch could work with
    pub fn load_run_config(&self) -> Result<Config> {
        let config = self.load_config()?;
        config.validate_settings().map_err(|e| {
            eyre!("Invalid configuration in {}: {}", self.config_file.display(), e)
        })?;
        Ok(config)
    }

    pub fn load_credentials(&self) -> Result<CredentialStore> {
        let credentials_file = self.credentials_file();
        let mut store = CredentialStore::new(credentials_file.clone());
        store.load().map_err(|e| {
            eyre!("Failed to load credentials from {}: {}", credentials_file.display(), e)
        })?;
        Ok(store)
    }

    /// Config, review source and renderer for `render` and `serve`
    pub fn widget_context(&self, input: Option<PathBuf>) -> Result<WidgetContext> {
        let config = self.load_run_config()?;
        let credentials = self.load_credentials()?;
        let source = create_source(&config, &credentials, input);
        let renderer = WidgetRenderer::new(
            &config.widget,
            source.as_ref().ok().and_then(|s| s.place_id()),
        );
        let options = PipelineOptions {
            name_max_length: config.widget.name_max_length,
        };
        Ok(WidgetContext { config, source, renderer, options })
    }
}

pub struct WidgetContext {
    pub config: Config,
    /// A misconfigured source is kept as its error so it can be rendered as the failure page
    pub source: std::result::Result<Box<dyn ReviewSource>, SourceError>,
    pub renderer: WidgetRenderer,
    pub options: PipelineOptions,
}

/// Outcome of one fetch-and-render pass
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Widget(String),
    Failure(String),
}

impl Page {
    pub fn html(&self) -> &str {
        match self {
            Page::Widget(html) | Page::Failure(html) => html,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Page::Failure(_))
    }
}

/// Fetch once and render either the widget or the failure paragraph
pub async fn render_page(
    source: &dyn ReviewSource,
    renderer: &WidgetRenderer,
    options: PipelineOptions,
) -> Page {
    match source.fetch_place_details().await {
        Ok(details) => {
            let widget = build_widget_now(&details, options);
            Page::Widget(renderer.render(&widget))
        }
        Err(err) => failure_page(source.source_name(), &err),
    }
}

pub fn failure_page(source_name: &str, err: &SourceError) -> Page {
    log_source_error(source_name, err);
    Page::Failure(render_failure(err))
}

pub fn log_source_error(source_name: &str, err: &SourceError) {
    match err {
        SourceError::InvalidResponse { status, message } => error!(
            operation = "fetch_place_details",
            source = source_name,
            status = status.as_deref().unwrap_or_default(),
            error_message = message.as_deref().unwrap_or_default(),
            "Invalid response from review provider"
        ),
        _ => error!(
            operation = "fetch_place_details",
            source = source_name,
            error = %err,
            "Could not fetch reviews"
        ),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;
    use tempfile::NamedTempFile;

    pub const SAVED_RESPONSE: &str = r#"{
        "result": {
            "name": "Corner Bakery",
            "rating": 4.4,
            "user_ratings_total": 87,
            "reviews": [
                {"author_name": "Christophers", "rating": 5, "text": "Great <b>bread</b>", "time": 1700000000},
                {"author_name": "Ann", "rating": 3, "text": "Fine", "time": 1700086400},
                {"rating": 4}
            ]
        },
        "status": "OK"
    }"#;

    pub fn saved_response(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use reviews_widget_config::WidgetConfig;
    use reviews_widget_sources::{FileSource, FETCH_FAILED_MESSAGE, INVALID_RESPONSE_MESSAGE};

    fn renderer() -> WidgetRenderer {
        WidgetRenderer::new(&WidgetConfig::default(), Some("abc"))
    }

    #[tokio::test]
    async fn test_render_page_widget() {
        let file = saved_response(SAVED_RESPONSE);
        let source = FileSource::new(file.path().to_path_buf());

        let page = render_page(&source, &renderer(), PipelineOptions::default()).await;

        assert!(!page.is_failure());
        assert!(page.html().contains("(87 reviews)"));
        assert!(page.html().contains("Christopher..."));
        assert!(page.html().contains("Anonymous"));
        assert!(page.html().contains("Great &lt;b&gt;bread&lt;/b&gt;"));
    }

    #[tokio::test]
    async fn test_render_page_invalid_response() {
        let file = saved_response(r#"{"status": "REQUEST_DENIED", "error_message": "bad key"}"#);
        let source = FileSource::new(file.path().to_path_buf());

        let page = render_page(&source, &renderer(), PipelineOptions::default()).await;

        assert_eq!(page, Page::Failure(format!("<p>{}</p>", INVALID_RESPONSE_MESSAGE)));
    }

    #[tokio::test]
    async fn test_render_page_unreadable_input() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));

        let page = render_page(&source, &renderer(), PipelineOptions::default()).await;

        assert_eq!(page, Page::Failure(format!("<p>{}</p>", FETCH_FAILED_MESSAGE)));
    }

    #[test]
    fn test_workspace_credentials_next_to_config_override() {
        let workspace = Workspace::resolve(Some(PathBuf::from("/srv/widget/config.toml")));
        assert_eq!(workspace.config_file(), Path::new("/srv/widget/config.toml"));
        assert_eq!(workspace.credentials_file(), Path::new("/srv/widget/credentials.toml"));
    }

    #[test]
    fn test_prepare_server_log_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::resolve(Some(dir.path().join("config.toml")));

        let log_file = workspace.prepare_server_log().unwrap();

        assert_eq!(log_file, dir.path().join("logs/reviews-widget.log"));
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_widget_context_rejects_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.toml");
        std::fs::write(&config_file, "[google]\ntimeout_seconds = 0\n").unwrap();

        let workspace = Workspace::resolve(Some(config_file));
        let err = workspace
            .widget_context(Some(dir.path().join("saved.json")))
            .err()
            .unwrap();

        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn test_widget_context_with_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.toml");
        std::fs::write(&config_file, "[widget]\nname_max_length = 5\n").unwrap();

        let workspace = Workspace::resolve(Some(config_file));
        let context = workspace
            .widget_context(Some(dir.path().join("saved.json")))
            .unwrap();

        assert!(context.source.is_ok());
        assert_eq!(context.options.name_max_length, 5);
        assert_eq!(context.config.widget.name_max_length, 5);
    }
}
