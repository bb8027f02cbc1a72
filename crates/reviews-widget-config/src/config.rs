use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const PLACE_ID_ENV: &str = "GOOGLE_PLACE_ID";

const PLACEHOLDER_PLACE_ID: &str = "YOUR_PLACE_ID";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("google.place_id is not configured (set it in config.toml or via GOOGLE_PLACE_ID)")]
    MissingPlaceId,
    #[error("widget.name_max_length must be greater than zero")]
    InvalidNameLength,
    #[error("google.timeout_seconds must be greater than zero")]
    InvalidTimeout,
    #[error("server.bind is not a valid socket address: {0}")]
    InvalidBind(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Place details request settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleConfig {
    #[serde(default)]
    pub place_id: String,
    #[serde(default = "default_fields")]
    pub fields: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    /// Link an external stylesheet
    #[default]
    External,
    /// Embed the stylesheet in a `<style>` block
    Inline,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WidgetConfig {
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default = "default_name_max_length")]
    pub name_max_length: usize,
    #[serde(default)]
    pub style: StyleMode,
    #[serde(default = "default_stylesheet_href")]
    pub stylesheet_href: String,
    #[serde(default = "default_logo_src")]
    pub logo_src: String,
    #[serde(default = "default_badge_src")]
    pub badge_src: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_fields() -> String {
    "name,rating,reviews,user_ratings_total".to_string()
}

fn default_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/place/details/json".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_heading() -> String {
    "What Our Customers Say".to_string()
}

fn default_name_max_length() -> usize {
    11
}

fn default_stylesheet_href() -> String {
    "assets/css/styles.css".to_string()
}

fn default_logo_src() -> String {
    "assets/images/google-reviews-logo.png".to_string()
}

fn default_badge_src() -> String {
    "assets/images/verified-badge.png".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            place_id: String::new(),
            fields: default_fields(),
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            language: None,
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            name_max_length: default_name_max_length(),
            style: StyleMode::default(),
            stylesheet_href: default_stylesheet_href(),
            logo_src: default_logo_src(),
            badge_src: default_badge_src(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise start from defaults.
    ///
    /// A missing file is fine as long as the environment supplies the place
    /// id; `validate` catches the rest.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `GOOGLE_PLACE_ID` from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(place_id) = lookup(PLACE_ID_ENV).filter(|v| !v.trim().is_empty()) {
            self.google.place_id = place_id;
        }
    }

    pub fn is_place_configured(&self) -> bool {
        let place_id = self.google.place_id.trim();
        !place_id.is_empty() && place_id != PLACEHOLDER_PLACE_ID
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.server.bind.clone()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_place_configured() {
            return Err(ConfigError::MissingPlaceId);
        }
        self.validate_settings()
    }

    /// Everything `validate` checks except the place id.
    ///
    /// Runs before every fetch; a missing place id is reported by the
    /// source instead, and does not matter when reading a saved response.
    pub fn validate_settings(&self) -> Result<(), ConfigError> {
        if self.widget.name_max_length == 0 {
            return Err(ConfigError::InvalidNameLength);
        }
        if self.google.timeout_seconds == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        self.bind_addr()?;
        Ok(())
    }
}
