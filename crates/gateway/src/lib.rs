//! HTTP API gateway for Propuestas.
//!
//! Serves proposal generation, stored execution traces and the
//! architecture/orchestration skills as JSON over HTTP.
//!
//! Built on Axum.

pub mod api_v1;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

use propuestas_agent::{GeneratorSettings, ProposalGenerator};
use propuestas_config::AppConfig;
use propuestas_telemetry::TraceStore;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub generator: ProposalGenerator,
    pub traces: TraceStore,
    /// Whether proposals carry a trace when the request does not say.
    pub include_trace: bool,
}

impl GatewayState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            generator: ProposalGenerator::new(
                Arc::new(config.template_registry()),
                GeneratorSettings::from(&config.generator),
            ),
            traces: TraceStore::with_capacity(config.gateway.max_stored_traces),
            include_trace: config.generator.include_trace,
        }
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the full router: `/health` plus the v1 API under `/v1`.
///
/// Layers applied:
/// - CORS restricted to local origins
/// - Request body size limit (1 MB)
/// - HTTP trace logging
pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
            is_local_origin(origin)
        }))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_v1::v1_router(state))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

fn is_local_origin(origin: &HeaderValue) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    ["http://localhost", "http://127.0.0.1"].iter().any(|prefix| {
        origin
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(':'))
    })
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let state = Arc::new(GatewayState::from_config(&config));
    info!(
        areas = state.generator.registry().len(),
        max_traces = state.traces.capacity(),
        "Gateway state ready"
    );

    let app = build_router(state);

    info!(addr = %addr, "Gateway starting with v1 API");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
