//! HTTP server for the Child Care Subsidy engine.
//!
//! Environment:
//! - `CCS_CONFIG_DIR`: rate table directory (default `./config/ccs`)
//! - `CCS_LISTEN_ADDR`: bind address (default `0.0.0.0:8080`)
//! - `CCS_CORS_ORIGINS`: comma-separated allowed origins (default: any)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;

use axum::http::{HeaderValue, Method, header};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ccs_engine::api::{AppState, create_router};
use ccs_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/ccs";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ()> {
    let config_dir = env::var("CCS_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let listen_addr =
        env::var("CCS_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir).map_err(|e| {
        error!(config_dir = %config_dir, "failed to load configuration: {e}");
    })?;
    info!(
        config_dir = %config_dir,
        financial_year = %config.scheme().financial_year,
        "Loaded CCS rate table"
    );

    let app = create_router(AppState::new(config))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&listen_addr).await.map_err(|e| {
        error!(listen_addr = %listen_addr, "failed to bind: {e}");
    })?;
    info!(listen_addr = %listen_addr, "Listening");

    axum::serve(listener, app).await.map_err(|e| {
        error!("server error: {e}");
    })
}

fn cors_layer() -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let origins: Vec<HeaderValue> = env::var("CCS_CORS_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
