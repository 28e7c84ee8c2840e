//! Architecture and orchestration skills.
//!
//! Deterministic helpers that complement a generated proposal:
//! - [`architecture`]: component catalogs, ASCII diagrams and summaries
//! - [`orchestration`]: specialist roles and execution plans
//!
//! [`hybrid_plan`] combines both for a single need.

pub mod architecture;
pub mod orchestration;

pub use architecture::{
    ArchitectureComponent, ArchitecturePlan, ArchitectureStyle, components_summary, diagram,
    full_architecture, microservices_components, serverless_components,
};
pub use orchestration::{
    AreaSpecialists, ExecutionPlan, ExecutionStep, OrchestrationConfig, OrchestrationPattern,
    SPECIALISTS, Specialist, execution_plan, flow_for_area, specialist_setup,
};

use serde::Serialize;

/// Errors from parsing skill selectors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SkillError {
    #[error("Tipo de arquitectura desconocido: {0}")]
    UnknownStyle(String),

    #[error("Patrón de orquestación desconocido: {0}")]
    UnknownPattern(String),
}

/// Architecture blueprint plus orchestration plan for one need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HybridPlan {
    pub necesidad: String,
    pub arquitectura: ArchitecturePlan,
    /// `None` for patterns without an execution plan.
    pub orquestacion: Option<ExecutionPlan>,
}

/// Combine an architecture blueprint (no named services) with the execution
/// plan of `pattern`.
pub fn hybrid_plan(
    need: &str,
    style: ArchitectureStyle,
    pattern: OrchestrationPattern,
) -> HybridPlan {
    tracing::debug!(%style, %pattern, "Building hybrid plan");
    HybridPlan {
        necesidad: need.to_string(),
        arquitectura: full_architecture(style, &[]),
        orquestacion: execution_plan(pattern),
    }
}
