//! Dev/static server for the admin console.
//!
//! Serves the built console, falls back to `index.html` for client-side
//! routes, and forwards `/api/*` to the BFF so the browser only ever talks to
//! one origin. That keeps the session and CSRF cookies first-party.

use std::sync::Arc;

use axum::{Router, routing::any, routing::get};
use chrono::{DateTime, Utc};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod handlers;

pub use config::ProxyConfig;

pub struct AppState {
    pub http: reqwest::Client,
    pub config: ProxyConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        // Redirects and cookies are the browser's business, not ours.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            config,
            started_at: Utc::now(),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    let base_path = state.config.base_path.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let app = Router::new()
        .route("/healthz", get(handlers::health::get))
        .route("/api/{*path}", any(handlers::proxy::forward))
        .fallback_service(spa)
        .with_state(state);

    let app = if base_path.is_empty() {
        app
    } else {
        Router::new().nest(&base_path, app)
    };

    app.layer(TraceLayer::new_for_http())
}
