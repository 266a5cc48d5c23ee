//! Tài/Xỉu Prediction Server
//!
//! Fetches the latest sessions from the upstream feed and predicts the next
//! outcome on every request.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    TÀI/XỈU PREDICTOR                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌─────────────────────┐  │
//! │  │  API      │──►│  History     │──►│  Predictor          │  │
//! │  │  (Axum)   │   │  Source      │   │  (freq/EMA/Markov)  │  │
//! │  └───────────┘   └──────┬───────┘   └─────────────────────┘  │
//! │                         ▼                                    │
//! │                  ┌─────────────┐                             │
//! │                  │ Upstream    │                             │
//! │                  │ feed (HTTP) │                             │
//! │                  └─────────────┘                             │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod predictor;
mod source;
mod error;

use axum::{routing::get, Router};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::{net::SocketAddr, sync::Arc, time::Duration};

pub use error::{AppError, AppResult};

use predictor::ModelConfig;
use source::{HistorySource, HttpHistorySource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "taixiu_predictor=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        environment = %config.environment,
        production = config.is_production(),
        "Tài/Xỉu prediction server starting..."
    );
    tracing::info!("Upstream history: {}", config.history_api_url);

    let source = HttpHistorySource::new(
        config.history_api_url.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?;

    // Build application state
    let state = AppState {
        config: config.clone(),
        source: Arc::new(source),
        model: ModelConfig::default(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub source: Arc<dyn HistorySource>,
    pub model: ModelConfig,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::welcome))
        .route("/health", get(handlers::health::check))
        .route("/api/2k15", get(handlers::predict::next_session))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
