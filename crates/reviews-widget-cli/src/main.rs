use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use commands::{config, render, reviews, serve, Workspace};
use reviews_widget_config::StyleMode;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reviews-widget")]
#[command(about = "Render a business's Google reviews as an embeddable HTML widget")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to a daily-rotated file instead of stderr (`serve` defaults to logs/reviews-widget.log)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Link the stylesheet
    External,
    /// Embed the stylesheet in the page
    Inline,
}

impl From<StyleArg> for StyleMode {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::External => StyleMode::External,
            StyleArg::Inline => StyleMode::Inline,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch reviews and write the widget HTML
    #[command(long_about = "Fetch the configured place's reviews (or read a saved place details response with --input) and write the widget HTML to stdout or --out. If fetching fails, the fixed failure paragraph is written instead.")]
    Render {
        /// Write HTML here instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Override widget.style from the config
        #[arg(long, value_enum)]
        style: Option<StyleArg>,

        /// Read a saved place details JSON response instead of calling Google
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Also write the widget stylesheet to this file
        #[arg(long, value_name = "FILE")]
        write_css: Option<PathBuf>,
    },
    /// Print the display-ready reviews
    Reviews {
        /// Read a saved place details JSON response instead of calling Google
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Serve the widget over HTTP
    #[command(long_about = "Run an HTTP server that renders the widget on every GET / request. GET /health answers `ok`.")]
    Serve {
        /// Listen address, overriding server.bind
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Serve from a saved place details JSON response instead of calling Google
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// View or change configuration and credentials
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Store the Google API key in the credentials file
    SetKey {
        /// API key (prompts with hidden input if omitted)
        #[arg(long)]
        key: Option<String>,
    },

    /// Update configuration values
    Set {
        /// Google Place ID
        #[arg(long)]
        place_id: Option<String>,

        /// Stylesheet mode
        #[arg(long, value_enum)]
        style: Option<StyleArg>,

        /// Widget heading
        #[arg(long)]
        heading: Option<String>,

        /// Maximum characters of a reviewer name on desktop cards
        #[arg(long)]
        name_max_length: Option<usize>,

        /// Server listen address
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let workspace = Workspace::resolve(cli.config);

    // The server logs to a rotating file unless told otherwise
    let log_file = match (cli.log_file, &cli.command) {
        (Some(path), _) => Some(path),
        (None, Commands::Serve { .. }) => Some(workspace.prepare_server_log()?),
        (None, _) => None,
    };

    logging::init_logging_with_file(cli.verbose, cli.quiet, log_file.clone())
        .map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    if let (Some(path), Commands::Serve { .. }) = (&log_file, &cli.command) {
        output.info(format!("Logging to {}", path.display()));
    }

    match cli.command {
        Commands::Render { out, style, input, write_css } => {
            render::run_render(&workspace, out, style.map(StyleMode::from), input, write_css, &output).await
        }
        Commands::Reviews { input } => reviews::run_reviews(&workspace, input, &output).await,
        Commands::Serve { bind, input } => serve::run_serve(&workspace, bind, input, &output).await,
        Commands::Config { cmd } => config::run_config(&workspace, cmd, &output),
    }
}
