use super::{prompts, Workspace};
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use reviews_widget_config::{mask_secret, Config, ConfigError, CredentialStore, StyleMode, API_KEY_ENV};
use serde_json::json;

pub fn run_config(workspace: &Workspace, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(workspace, full, output),
        ConfigCommands::SetKey { key } => set_key(workspace, key, output),
        ConfigCommands::Set { place_id, style, heading, name_max_length, bind } => {
            let changes = ConfigChanges {
                place_id,
                style: style.map(StyleMode::from),
                heading,
                name_max_length,
                bind,
            };
            set_values(workspace, changes, output)
        }
    }
}

/// Where the API key for this run comes from
fn key_origin(credentials: &CredentialStore) -> &'static str {
    let env_set = std::env::var(API_KEY_ENV)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);
    if env_set {
        "environment"
    } else if credentials.get_google_api_key().is_some() {
        "credentials file"
    } else {
        "not set"
    }
}

fn section(title: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(title).fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn show_config(workspace: &Workspace, full: bool, output: &Output) -> Result<()> {
    let config = workspace.load_config()?;
    let credentials = workspace.load_credentials()?;
    let api_key = credentials.resolve_google_api_key();
    let api_key_display = match &api_key {
        Some(key) if full => key.clone(),
        Some(key) => mask_secret(key),
        None => "(not set)".to_string(),
    };

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "config_file": workspace.config_file().display().to_string(),
            "config_file_exists": workspace.config_file().exists(),
            "credentials_file": workspace.credentials_file().display().to_string(),
            "google": {
                "place_id": config.google.place_id,
                "api_key": api_key.as_ref().map(|_| api_key_display.clone()),
                "api_key_origin": key_origin(&credentials),
                "fields": config.google.fields,
                "endpoint": config.google.endpoint,
                "timeout_seconds": config.google.timeout_seconds,
                "language": config.google.language,
            },
            "widget": config.widget,
            "server": config.server,
        }));
        return Ok(());
    }
    if output.is_quiet() {
        return Ok(());
    }

    if !workspace.config_file().exists() {
        output.warn(format!(
            "Configuration file not found at {}; showing defaults",
            workspace.config_file().display()
        ));
    }

    let mut files = section("Files");
    files.add_row(vec![Cell::new("Config"), Cell::new(workspace.config_file().display())]);
    files.add_row(vec![Cell::new("Credentials"), Cell::new(workspace.credentials_file().display())]);
    println!("{}\n", files);

    let place_id = if config.is_place_configured() {
        config.google.place_id.clone()
    } else {
        "(not set)".to_string()
    };
    let mut google = section("Google Places");
    google.add_row(vec![Cell::new("Place ID"), Cell::new(place_id)]);
    google.add_row(vec![
        Cell::new("API Key"),
        Cell::new(format!("{} [{}]", api_key_display, key_origin(&credentials))),
    ]);
    google.add_row(vec![Cell::new("Fields"), Cell::new(&config.google.fields)]);
    google.add_row(vec![Cell::new("Endpoint"), Cell::new(&config.google.endpoint)]);
    google.add_row(vec![
        Cell::new("Timeout"),
        Cell::new(format!("{} seconds", config.google.timeout_seconds)),
    ]);
    google.add_row(vec![
        Cell::new("Language"),
        Cell::new(config.google.language.as_deref().unwrap_or("(provider default)")),
    ]);
    println!("{}\n", google);

    let mut widget = section("Widget");
    widget.add_row(vec![Cell::new("Heading"), Cell::new(&config.widget.heading)]);
    widget.add_row(vec![
        Cell::new("Name Max Length"),
        Cell::new(config.widget.name_max_length),
    ]);
    widget.add_row(vec![Cell::new("Style"), Cell::new(format!("{:?}", config.widget.style))]);
    widget.add_row(vec![Cell::new("Stylesheet"), Cell::new(&config.widget.stylesheet_href)]);
    widget.add_row(vec![Cell::new("Logo"), Cell::new(&config.widget.logo_src)]);
    widget.add_row(vec![Cell::new("Badge"), Cell::new(&config.widget.badge_src)]);
    println!("{}\n", widget);

    let mut server = section("Server");
    server.add_row(vec![Cell::new("Bind"), Cell::new(&config.server.bind)]);
    println!("{}", server);

    if let Err(e) = config.validate() {
        output.warn(e.to_string());
    }
    Ok(())
}

fn set_key(workspace: &Workspace, key: Option<String>, output: &Output) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => prompts::prompt_password("Google API key")?,
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let mut credentials = workspace.load_credentials()?;
    credentials.set_google_api_key(key);
    credentials.save().map_err(|e| {
        eyre!("Failed to save credentials to {}: {}", workspace.credentials_file().display(), e)
    })?;

    output.success(format!("API key saved to {}", workspace.credentials_file().display()));
    Ok(())
}

#[derive(Debug, Default)]
struct ConfigChanges {
    place_id: Option<String>,
    style: Option<StyleMode>,
    heading: Option<String>,
    name_max_length: Option<usize>,
    bind: Option<String>,
}

impl ConfigChanges {
    fn is_empty(&self) -> bool {
        self.place_id.is_none()
            && self.style.is_none()
            && self.heading.is_none()
            && self.name_max_length.is_none()
            && self.bind.is_none()
    }

    fn apply(self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(place_id) = self.place_id {
            config.google.place_id = place_id.trim().to_string();
        }
        if let Some(style) = self.style {
            config.widget.style = style;
        }
        if let Some(heading) = self.heading {
            config.widget.heading = heading;
        }
        if let Some(name_max_length) = self.name_max_length {
            if name_max_length == 0 {
                return Err(ConfigError::InvalidNameLength);
            }
            config.widget.name_max_length = name_max_length;
        }
        if let Some(bind) = self.bind {
            config.server.bind = bind;
            config.bind_addr()?;
        }
        Ok(())
    }
}

fn set_values(workspace: &Workspace, mut changes: ConfigChanges, output: &Output) -> Result<()> {
    // Environment overrides are not written back to the file
    let mut config = workspace.load_stored_config()?;

    if changes.is_empty() {
        let current = config.google.place_id.clone();
        let default = (!current.is_empty()).then_some(current.as_str());
        changes.place_id = Some(prompts::prompt_string("Google Place ID", default)?);
    }

    changes.apply(&mut config).map_err(|e| eyre!("{}", e))?;

    config.save_to_file(&workspace.config_file().to_path_buf()).map_err(|e| {
        eyre!("Failed to save config to {}: {}", workspace.config_file().display(), e)
    })?;

    output.success(format!("Configuration saved to {}", workspace.config_file().display()));
    if !config.is_place_configured() {
        output.warn("google.place_id is still not set; run `reviews-widget config set --place-id <ID>`");
    }
    Ok(())
}
