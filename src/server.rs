//! HTTP surface: one route, `GET /`, serving the pre-rendered page.

use crate::app::ROOT_ROUTE;
use crate::config::server::ServerConfig;
use crate::utils::error::Result;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// The rendered document plus the time it was built.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub rendered_at: DateTime<Utc>,
}

impl RenderedPage {
    pub fn new(html: String) -> Self {
        Self {
            html,
            rendered_at: Utc::now(),
        }
    }

    pub fn last_modified(&self) -> String {
        self.rendered_at
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string()
    }
}

#[derive(Clone)]
struct AppState {
    page: Arc<RenderedPage>,
}

pub fn router(page: RenderedPage) -> Router {
    let state = AppState {
        page: Arc::new(page),
    };

    Router::new()
        .route(ROOT_ROUTE, get(index))
        .fallback(not_found)
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> impl IntoResponse {
    debug!(bytes = state.page.html.len(), "serving landing page");
    (
        [(header::LAST_MODIFIED, state.page.last_modified())],
        Html(state.page.html.clone()),
    )
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!(path = %uri.path(), "no route");
    (StatusCode::NOT_FOUND, "Not Found")
}

pub async fn serve(config: &ServerConfig, page: RenderedPage) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(bind = %addr, env = ?config.env, "terrigo-landing listening");

    axum::serve(listener, router(page))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
