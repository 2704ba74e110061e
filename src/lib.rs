//! Monastery360: booking, payment and cultural-calendar web service.

pub mod booking;
pub mod cache;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod payment;
pub mod pricing;
pub mod site;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::cache::{AppCache, CacheStats};
use crate::config::Config;
use crate::payment::{PaymentGateway, SimulatedGateway};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: AppCache,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    /// State backed by the simulated gateway
    pub fn new(config: Config) -> Self {
        Self::with_gateway(config, Arc::new(SimulatedGateway))
    }

    pub fn with_gateway(config: Config, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            cache: AppCache::new(config.session_ttl),
            config: Arc::new(config),
            gateway,
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    gateway: &'static str,
    cache: CacheStats,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        gateway: state.gateway.name(),
        cache: state.cache.stats(),
    })
}

/// Full application router
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(pricing::router())
        .merge(booking::router())
        .merge(payment::router())
        .merge(calendar::router())
        .merge(site::router())
        .nest_service("/static", static_files)
        .fallback(site::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
