pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{Config, ConfigError, GoogleConfig, ServerConfig, StyleMode, WidgetConfig, PLACE_ID_ENV};
pub use credentials::{CredentialStore, mask_secret, API_KEY_ENV};
pub use paths::{PathManager, container_base_path};
