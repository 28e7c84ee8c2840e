//! HTTP API v1.
//!
//! Endpoints:
//!
//! - `GET  /v1/areas`                  : Registered business areas
//! - `POST /v1/proposals`              : Generate a proposal
//! - `GET  /v1/traces`                 : Most recent stored traces
//! - `GET  /v1/traces/{id}`            : A stored trace with its summary
//! - `GET  /v1/architecture/{style}`   : Architecture blueprint
//! - `GET  /v1/orchestration/{pattern}`: Orchestration execution plan

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::SharedState;
use propuestas_agent::ProposalResult;
use propuestas_skills::{
    ArchitecturePlan, ArchitectureStyle, ExecutionPlan, OrchestrationPattern, execution_plan,
    full_architecture,
};
use propuestas_telemetry::{ExecutionTrace, TraceSummary};

/// Default number of traces returned by `GET /v1/traces`.
const DEFAULT_TRACE_LIMIT: usize = 50;

// ── Router ────────────────────────────────────────────────────────────────

/// Build the v1 API router. Nest this under "/v1" in the main router.
pub fn v1_router(state: SharedState) -> Router {
    Router::new()
        .route("/areas", get(list_areas_handler))
        .route("/proposals", post(create_proposal_handler))
        .route("/traces", get(list_traces_handler))
        .route("/traces/{id}", get(get_trace_handler))
        .route("/architecture/{style}", get(architecture_handler))
        .route("/orchestration/{pattern}", get(orchestration_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct AreaListResponse {
    areas: Vec<AreaDto>,
}

#[derive(Serialize, Deserialize)]
struct AreaDto {
    id: String,
    nombre: String,
    descripcion: String,
}

#[derive(Deserialize)]
struct ProposalRequest {
    necesidad: String,
    /// Area id that bypasses detection.
    #[serde(default)]
    area: Option<String>,
    /// Overrides the configured trace default.
    #[serde(default)]
    trazabilidad: Option<bool>,
}

#[derive(Serialize, Deserialize)]
struct TraceResponse {
    traza: ExecutionTrace,
    resumen: TraceSummary,
}

#[derive(Deserialize)]
struct TraceListQuery {
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Serialize, Deserialize)]
struct TraceListResponse {
    count: usize,
    traces: Vec<TraceListItem>,
}

#[derive(Serialize, Deserialize)]
struct TraceListItem {
    id: String,
    resumen: TraceSummary,
}

#[derive(Deserialize)]
struct ArchitectureQuery {
    /// Comma-separated service (or function) names.
    #[serde(default)]
    servicios: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn list_areas_handler(State(state): State<SharedState>) -> Json<AreaListResponse> {
    let areas = state
        .generator
        .registry()
        .iter()
        .map(|t| AreaDto {
            id: t.id.clone(),
            nombre: t.name.clone(),
            descripcion: t.description.clone(),
        })
        .collect();

    Json(AreaListResponse { areas })
}

async fn create_proposal_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ProposalRequest>,
) -> (StatusCode, Json<ProposalResult>) {
    let want_trace = payload.trazabilidad.unwrap_or(state.include_trace);
    info!(
        need_chars = payload.necesidad.chars().count(),
        area = ?payload.area,
        want_trace,
        "v1/proposals request"
    );

    let result = state
        .generator
        .generate(&payload.necesidad, payload.area.as_deref(), want_trace);

    if let Some(trace) = &result.trace {
        state.traces.record(trace.clone());
    }

    let status = if result.successful {
        StatusCode::OK
    } else if result.is_validation_failure() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(result))
}

async fn list_traces_handler(
    State(state): State<SharedState>,
    Query(query): Query<TraceListQuery>,
) -> Json<TraceListResponse> {
    let traces: Vec<TraceListItem> = state
        .traces
        .recent(query.limit.unwrap_or(DEFAULT_TRACE_LIMIT))
        .into_iter()
        .map(|t| TraceListItem {
            resumen: t.summary(),
            id: t.id,
        })
        .collect();

    Json(TraceListResponse {
        count: traces.len(),
        traces,
    })
}

async fn get_trace_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<TraceResponse>, ApiError> {
    let trace = state
        .traces
        .get(&id)
        .map_err(|e| api_error(StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(TraceResponse {
        resumen: trace.summary(),
        traza: trace,
    }))
}

async fn architecture_handler(
    Path(style): Path<String>,
    Query(query): Query<ArchitectureQuery>,
) -> Result<Json<ArchitecturePlan>, ApiError> {
    let style: ArchitectureStyle = style
        .parse()
        .map_err(|e: propuestas_skills::SkillError| {
            api_error(StatusCode::BAD_REQUEST, e.to_string())
        })?;

    let services: Vec<String> = query
        .servicios
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Json(full_architecture(style, &services)))
}

async fn orchestration_handler(
    Path(pattern): Path<String>,
) -> Result<Json<ExecutionPlan>, ApiError> {
    let pattern: OrchestrationPattern = pattern
        .parse()
        .map_err(|e: propuestas_skills::SkillError| {
            api_error(StatusCode::BAD_REQUEST, e.to_string())
        })?;

    execution_plan(pattern).map(Json).ok_or_else(|| {
        api_error(
            StatusCode::NOT_FOUND,
            format!("Sin plan de ejecución para el patrón {pattern}"),
        )
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────
