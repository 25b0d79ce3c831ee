//! Interactive web form and JSON API.
//!
//! Thin adapter over [`crate::analysis::evaluate`]: it parses form input,
//! runs the agent and renders the report. It holds no state between
//! requests apart from the read-only form settings.

pub mod form;
pub mod handlers;
pub mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::models::InputPair;

/// Read-only settings shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Title shown in the browser tab and page header.
    pub page_title: String,
    /// Values prefilled into the form.
    pub defaults: InputPair,
}

impl AppState {
    pub fn from_config(config: &Config) -> Arc<Self> {
        Arc::new(Self {
            page_title: config.web.page_title.clone(),
            defaults: InputPair {
                a: config.inputs.a,
                b: config.inputs.b,
            },
        })
    }
}

/// Build the Axum router with all routes
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/evaluate", get(handlers::api_evaluate))
        .route("/tools", get(handlers::list_tools))
        .route("/tools/call", post(handlers::call_tool));

    Router::new()
        .route("/", get(handlers::index))
        .route("/evaluate", get(handlers::evaluate_page))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the form until Ctrl-C is received.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = format!("{}:{}", config.web.host, config.web.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let local: SocketAddr = listener.local_addr()?;
    info!("MathAgent form listening on http://{}", local);
    println!("🧮 Open http://{} in your browser (Ctrl-C to stop)", local);

    let app = build_router(AppState::from_config(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
