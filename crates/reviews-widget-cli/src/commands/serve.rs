use super::{log_source_error, render_page, Workspace};
use crate::output::Output;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use reviews_widget_core::PipelineOptions;
use reviews_widget_render::WidgetRenderer;
use reviews_widget_sources::ReviewSource;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared by every request; each request still does its own fetch and render
pub struct AppState {
    source: Box<dyn ReviewSource>,
    renderer: WidgetRenderer,
    options: PipelineOptions,
}

pub async fn run_serve(
    workspace: &Workspace,
    bind: Option<String>,
    input: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let context = workspace.widget_context(input)?;
    let mut config = context.config;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    let addr = config.bind_addr().map_err(|e| eyre!("{}", e))?;

    // Refuse to start rather than serve the failure page forever
    let source = context.source.map_err(|e| {
        log_source_error("unconfigured", &e);
        eyre!("{}", e)
    })?;

    let state = Arc::new(AppState {
        source,
        renderer: context.renderer,
        options: context.options,
    });

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| eyre!("Failed to bind {}: {}", addr, e))?;

    info!(
        operation = "serve",
        address = %addr,
        source = state.source.source_name(),
        "Widget server listening"
    );
    output.success(format!("Serving widget on http://{}", addr));

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {}", e))?;

    info!(operation = "serve", "Widget server stopped");
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(widget_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn widget_handler(State(state): State<Arc<AppState>>) -> Response {
    let page = render_page(state.source.as_ref(), &state.renderer, state.options).await;
    info!(
        operation = "serve_widget",
        failed = page.is_failure(),
        bytes = page.html().len(),
        "Served widget"
    );

    // Fetch failures are still a 200 with the failure paragraph, so embedding pages show the message
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=UTF-8"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        page.html().to_string(),
    )
        .into_response()
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(operation = "serve", error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(operation = "serve", "Shutdown signal received");
}
