//! Data model for execution traces: states, steps, errors and summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// ── State ─────────────────────────────────────────────────────────────────

/// Pipeline stage a trace step belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionState {
    Iniciado,
    AnalizandoEntrada,
    DetectandoArea,
    IdentificandoProblema,
    GenerandoSolucion,
    #[serde(rename = "diseñando_arquitectura")]
    DisenandoArquitectura,
    AnalizandoRiesgos,
    GenerandoOutput,
    Completado,
    /// Kept for wire compatibility; the pipeline records failures in
    /// `ExecutionTrace::errors`, never as a step.
    Error,
}

impl ExecutionState {
    /// Wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iniciado => "iniciado",
            Self::AnalizandoEntrada => "analizando_entrada",
            Self::DetectandoArea => "detectando_area",
            Self::IdentificandoProblema => "identificando_problema",
            Self::GenerandoSolucion => "generando_solucion",
            Self::DisenandoArquitectura => "diseñando_arquitectura",
            Self::AnalizandoRiesgos => "analizando_riesgos",
            Self::GenerandoOutput => "generando_output",
            Self::Completado => "completado",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Entries ───────────────────────────────────────────────────────────────

/// One recorded pipeline step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    #[serde(rename = "estado")]
    pub state: ExecutionState,
    #[serde(rename = "detalle")]
    pub detail: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// One recorded failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceError {
    /// Error kind, e.g. `ValidationError`.
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    /// Pipeline phase the error was raised in.
    #[serde(rename = "contexto")]
    pub context: String,
    pub timestamp: DateTime<Utc>,
}

// ── Trace ─────────────────────────────────────────────────────────────────

/// Step and error log of one `generate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionTrace {
    /// Unique trace id.
    pub id: String,
    /// When the trace started.
    #[serde(rename = "inicio")]
    pub started_at: DateTime<Utc>,
    /// When the trace was finalized.
    #[serde(rename = "fin")]
    pub ended_at: Option<DateTime<Utc>>,
    /// Duration in milliseconds (computed on finalize).
    #[serde(rename = "duracion_ms")]
    pub duration_ms: Option<u64>,
    #[serde(rename = "pasos")]
    pub steps: Vec<TraceStep>,
    #[serde(rename = "errores")]
    pub errors: Vec<TraceError>,
}

impl ExecutionTrace {
    /// Start a new trace now.
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            ended_at: None,
            duration_ms: None,
            steps: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Append a step.
    pub fn add_step(
        &mut self,
        state: ExecutionState,
        detail: impl Into<String>,
        metadata: Map<String, Value>,
    ) {
        let detail = detail.into();
        tracing::debug!(trace_id = %self.id, state = %state, "{detail}");
        self.steps.push(TraceStep {
            state,
            detail,
            timestamp: Utc::now(),
            metadata,
        });
    }

    /// Append an error entry.
    pub fn add_error(
        &mut self,
        kind: impl Into<String>,
        message: impl Into<String>,
        context: impl Into<String>,
    ) {
        self.errors.push(TraceError {
            kind: kind.into(),
            message: message.into(),
            context: context.into(),
            timestamp: Utc::now(),
        });
    }

    /// Set the end time and fix the duration. Later calls are no-ops.
    pub fn finalize(&mut self) {
        if self.ended_at.is_some() {
            return;
        }
        let now = Utc::now();
        self.ended_at = Some(now);
        self.duration_ms = Some(
            now.signed_duration_since(self.started_at)
                .num_milliseconds()
                .max(0) as u64,
        );
    }

    pub fn is_finalized(&self) -> bool {
        self.ended_at.is_some()
    }

    /// States of the recorded steps, in order.
    pub fn states(&self) -> Vec<ExecutionState> {
        self.steps.iter().map(|s| s.state).collect()
    }

    pub fn summary(&self) -> TraceSummary {
        TraceSummary {
            started_at: self.started_at,
            ended_at: self.ended_at,
            duration_ms: self.duration_ms,
            total_steps: self.steps.len(),
            total_errors: self.errors.len(),
            successful: self.errors.is_empty(),
        }
    }
}

/// Condensed view of a trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceSummary {
    #[serde(rename = "inicio")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "fin")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(rename = "duracion_ms")]
    pub duration_ms: Option<u64>,
    #[serde(rename = "total_pasos")]
    pub total_steps: usize,
    #[serde(rename = "total_errores")]
    pub total_errors: usize,
    #[serde(rename = "exitoso")]
    pub successful: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn state_wire_names() {
        let all = [
            (ExecutionState::Iniciado, "iniciado"),
            (ExecutionState::AnalizandoEntrada, "analizando_entrada"),
            (ExecutionState::DetectandoArea, "detectando_area"),
            (ExecutionState::IdentificandoProblema, "identificando_problema"),
            (ExecutionState::GenerandoSolucion, "generando_solucion"),
            (ExecutionState::DisenandoArquitectura, "diseñando_arquitectura"),
            (ExecutionState::AnalizandoRiesgos, "analizando_riesgos"),
            (ExecutionState::GenerandoOutput, "generando_output"),
            (ExecutionState::Completado, "completado"),
            (ExecutionState::Error, "error"),
        ];
        for (state, name) in all {
            assert_eq!(state.as_str(), name);
            assert_eq!(serde_json::to_value(state).unwrap(), json!(name));
        }
    }

    #[test]
    fn new_trace_is_open_and_successful() {
        let trace = ExecutionTrace::start();
        assert!(!trace.is_finalized());
        let summary = trace.summary();
        assert_eq!(summary.total_steps, 0);
        assert!(summary.successful);
        assert!(summary.duration_ms.is_none());
    }

    #[test]
    fn finalize_fixes_duration_once() {
        let mut trace = ExecutionTrace::start();
        trace.finalize();
        let first_end = trace.ended_at;
        let first_duration = trace.duration_ms;
        assert!(first_end.is_some());

        std::thread::sleep(std::time::Duration::from_millis(5));
        trace.finalize();
        assert_eq!(trace.ended_at, first_end);
        assert_eq!(trace.duration_ms, first_duration);
    }

    #[test]
    fn summary_counts_errors() {
        let mut trace = ExecutionTrace::start();
        trace.add_step(ExecutionState::Iniciado, "Inicio", Map::new());
        trace.add_error("ValidationError", "demasiado corto", "Validación de entrada");
        trace.finalize();

        let summary = trace.summary();
        assert_eq!(summary.total_steps, 1);
        assert_eq!(summary.total_errors, 1);
        assert!(!summary.successful);
    }

    #[test]
    fn trace_serializes_spanish_keys() {
        let mut trace = ExecutionTrace::start();
        let mut metadata = Map::new();
        metadata.insert("area".into(), json!("fintech"));
        trace.add_step(ExecutionState::DetectandoArea, "Área detectada", metadata);
        trace.add_error("InternalError", "boom", "Ejecución del agente");

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["pasos"][0]["estado"], "detectando_area");
        assert_eq!(value["pasos"][0]["detalle"], "Área detectada");
        assert_eq!(value["pasos"][0]["metadata"]["area"], "fintech");
        assert_eq!(value["errores"][0]["tipo"], "InternalError");
        assert_eq!(value["errores"][0]["contexto"], "Ejecución del agente");
        assert!(value["fin"].is_null());

        let summary = serde_json::to_value(trace.summary()).unwrap();
        assert_eq!(summary["total_pasos"], 1);
        assert_eq!(summary["total_errores"], 1);
        assert_eq!(summary["exitoso"], false);
    }

    #[test]
    fn trace_round_trips_through_json() {
        let mut trace = ExecutionTrace::start();
        trace.add_step(ExecutionState::Completado, "Listo", Map::new());
        trace.finalize();

        let text = serde_json::to_string(&trace).unwrap();
        let back: ExecutionTrace = serde_json::from_str(&text).unwrap();
        assert_eq!(back.id, trace.id);
        assert_eq!(back.states(), vec![ExecutionState::Completado]);
        assert_eq!(back.duration_ms, trace.duration_ms);
    }
}
