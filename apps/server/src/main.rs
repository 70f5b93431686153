// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PlanRast Server - floor-plan container to PNG conversion server.
//!
//! Accepts a floor-plan container upload, runs the decode/render/encode
//! pipeline in an isolated per-request scratch directory, and streams the
//! resulting PNG back.
//!
//! # Endpoints
//!
//! - `GET /api/v1/health` - Health check
//! - `POST /api/v1/convert` - Convert an uploaded container to PNG

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

mod config;
mod error;
mod routes;

use config::Config;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tower_http=debug,planrast_server=debug".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        max_file_size_mb = config.max_file_size_mb,
        image_size = config.image_size,
        "Starting PlanRast Server"
    );

    let state = AppState {
        config: Arc::new(config.clone()),
    };

    let app = Router::new()
        .route("/", get(routes::health::info))
        .route("/api/v1/health", get(routes::health::check))
        .route("/api/v1/convert", post(routes::convert::convert_upload))
        .layer(DefaultBodyLimit::max(config.max_file_size_mb * 1024 * 1024))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server task failed");
}
