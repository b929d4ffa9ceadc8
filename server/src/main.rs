mod config;
mod token_guard;

use axum::{Router, http::StatusCode, response::Json, routing::get};
use config::ServerConfig;
use dotenvy::dotenv;
use serde_json::json;
use std::sync::Arc;
use token_guard::{TokenParam, no_store_token_urls};
use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::{NotForContentType, Predicate as _, SizeAbove};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "writer-studio-web",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

/// Serves the client bundle. Unknown paths get `index.html` so the client
/// router can resolve them.
fn router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_root).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_handler))
        .fallback_service(site)
        .layer(axum::middleware::from_fn_with_state(
            TokenParam(Arc::from(config.token_param.as_str())),
            no_store_token_urls,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CompressionLayer::new()
                .compress_when(NotForContentType::IMAGES.and(SizeAbove::new(1024))),
        )
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    if dotenv().is_err() {
        warn!("There is no corresponding .env file");
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load configuration: {err}");
            return;
        }
    };
    if !config.index_file().exists() {
        warn!(
            "No index.html under {}; build the client bundle first",
            config.site_root.display()
        );
    }

    let app = router(&config);
    let listener = match tokio::net::TcpListener::bind(config.site_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind tcp listener to {}: {}", config.site_addr, err);
            return;
        }
    };
    info!("Listening on http://{}", config.site_addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => info!("Server shutdown gracefully"),
        Err(err) => error!("Failed to serve app: {err:?}"),
    }
}
