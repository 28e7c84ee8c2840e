//! Multi-specialist orchestration descriptions.
//!
//! Nothing here runs agents. These are declarative plans describing which
//! specialist roles would work on a proposal and in what arrangement.

use crate::SkillError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How specialists are arranged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrchestrationPattern {
    Secuencial,
    Paralelo,
    Jerarquico,
    ConsumerProducer,
}

impl OrchestrationPattern {
    pub const ALL: [OrchestrationPattern; 4] = [
        Self::Secuencial,
        Self::Paralelo,
        Self::Jerarquico,
        Self::ConsumerProducer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secuencial => "secuencial",
            Self::Paralelo => "paralelo",
            Self::Jerarquico => "jerarquico",
            Self::ConsumerProducer => "consumer_producer",
        }
    }
}

impl fmt::Display for OrchestrationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrchestrationPattern {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == s.trim())
            .ok_or_else(|| SkillError::UnknownPattern(s.to_string()))
    }
}

/// A specialist role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specialist {
    /// Catalog key, e.g. `arquitecto`.
    #[serde(skip)]
    pub key: &'static str,
    pub rol: &'static str,
    pub responsabilidad: &'static str,
    pub prompt_base: &'static str,
}

pub const SPECIALISTS: [Specialist; 5] = [
    Specialist {
        key: "analista",
        rol: "Analista de Requisitos",
        responsabilidad: "Analizar y documentar necesidades",
        prompt_base: "Eres un analista de negocio experto en levantar requisitos funcionales y no funcionales.",
    },
    Specialist {
        key: "arquitecto",
        rol: "Arquitecto de Soluciones",
        responsabilidad: "Diseñar arquitectura técnica",
        prompt_base: "Eres un arquitecto de software senior especializado en sistemas escalables.",
    },
    Specialist {
        key: "desarrollador",
        rol: "Desarrollador Full Stack",
        responsabilidad: "Implementar código",
        prompt_base: "Eres un desarrollador experimentado en backend y frontend.",
    },
    Specialist {
        key: "qa",
        rol: "Ingeniero de Calidad",
        responsabilidad: "Diseñar pruebas y validación",
        prompt_base: "Eres un experto en testing y aseguramiento de calidad.",
    },
    Specialist {
        key: "devops",
        rol: "Ingeniero DevOps",
        responsabilidad: "Infraestructura y despliegue",
        prompt_base: "Eres un ingeniero DevOps experimentado en CI/CD y nube.",
    },
];

/// Look up a specialist by catalog key.
pub fn specialist(key: &str) -> Option<&'static Specialist> {
    SPECIALISTS.iter().find(|s| s.key == key)
}

/// Specialist keys that work on a proposal for `area`, in order.
pub fn flow_for_area(area: &str) -> Vec<&'static str> {
    match area {
        "fintech" => vec!["analista", "arquitecto", "devops", "qa"],
        "app_moviles" => vec!["analista", "arquitecto", "desarrollador", "qa"],
        "blockchain" => vec!["analista", "arquitecto", "desarrollador", "devops"],
        _ => SPECIALISTS.iter().map(|s| s.key).collect(),
    }
}

/// Specialists assigned to one area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaSpecialists {
    pub area: String,
    /// Role descriptions, in flow order.
    pub agentes: Vec<&'static Specialist>,
    pub flujo: Vec<&'static str>,
}

/// Per-area specialist setup, in input order.
pub fn specialist_setup<S: AsRef<str>>(areas: &[S]) -> Vec<AreaSpecialists> {
    areas
        .iter()
        .map(|area| {
            let area = area.as_ref();
            let flujo = flow_for_area(area);
            let agentes = flujo.iter().filter_map(|key| specialist(key)).collect();
            AreaSpecialists {
                area: area.to_string(),
                agentes,
                flujo,
            }
        })
        .collect()
}

/// Declarative orchestration of a set of specialists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationConfig {
    pub tipo: OrchestrationPattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    /// Specialists in execution order; empty for the hierarchical case.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agentes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workers: Vec<String>,
    pub input_inicial: String,
    pub descripcion: String,
}

impl OrchestrationConfig {
    /// Each specialist receives the previous one's output.
    pub fn sequential(agents: Vec<String>, input: impl Into<String>) -> Self {
        Self {
            tipo: OrchestrationPattern::Secuencial,
            manager: None,
            agentes: agents,
            workers: Vec::new(),
            input_inicial: input.into(),
            descripcion:
                "Los agentes ejecutan en secuencia, pasando output como input al siguiente".into(),
        }
    }

    /// Every specialist receives the same input.
    pub fn parallel(agents: Vec<String>, input: impl Into<String>) -> Self {
        Self {
            tipo: OrchestrationPattern::Paralelo,
            manager: None,
            agentes: agents,
            workers: Vec::new(),
            input_inicial: input.into(),
            descripcion: "Todos los agentes reciben el mismo input y ejecutan concurrentemente"
                .into(),
        }
    }

    /// A manager splits the work among workers.
    pub fn hierarchical(
        manager: impl Into<String>,
        workers: Vec<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            tipo: OrchestrationPattern::Jerarquico,
            manager: Some(manager.into()),
            agentes: Vec::new(),
            workers,
            input_inicial: input.into(),
            descripcion: "Un agente manager coordina trabajadores especializados".into(),
        }
    }
}

/// One step of an execution plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orden: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agente: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agentes: Vec<String>,
    pub descripcion: String,
}

impl ExecutionStep {
    fn single(orden: u32, agente: &str, descripcion: &str) -> Self {
        Self {
            orden: Some(orden),
            agente: Some(agente.to_string()),
            agentes: Vec::new(),
            descripcion: descripcion.to_string(),
        }
    }

    fn group(orden: Option<u32>, agentes: &[&str], descripcion: &str) -> Self {
        Self {
            orden,
            agente: None,
            agentes: agentes.iter().map(|a| (*a).to_string()).collect(),
            descripcion: descripcion.to_string(),
        }
    }
}

/// Steps plus trade-offs of a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub pasos: Vec<ExecutionStep>,
    pub ventajas: Vec<String>,
    pub desventajas: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Execution plan for `pattern`. `consumer_producer` has none.
pub fn execution_plan(pattern: OrchestrationPattern) -> Option<ExecutionPlan> {
    match pattern {
        OrchestrationPattern::Secuencial => Some(ExecutionPlan {
            pasos: vec![
                ExecutionStep::single(1, "analista", "Analizar necesidad"),
                ExecutionStep::single(2, "arquitecto", "Diseñar solución"),
                ExecutionStep::single(3, "desarrollador", "Implementar"),
                ExecutionStep::single(4, "qa", "Validar"),
            ],
            ventajas: strings(&["Orden claro", "Dependencias manejadas"]),
            desventajas: strings(&["Tiempo total = suma de todos"]),
        }),
        OrchestrationPattern::Paralelo => Some(ExecutionPlan {
            pasos: vec![ExecutionStep::group(
                None,
                &["arquitecto", "devops", "qa"],
                "Ejecución paralela",
            )],
            ventajas: strings(&["Más rápido", "Independencia"]),
            desventajas: strings(&["Puede haber trabajo duplicado"]),
        }),
        OrchestrationPattern::Jerarquico => Some(ExecutionPlan {
            pasos: vec![
                ExecutionStep::single(1, "manager", "Planificar y dividir tareas"),
                ExecutionStep::group(Some(2), &["analista", "arquitecto"], "Ejecutar en paralelo"),
                ExecutionStep::single(3, "manager", "Consolidar resultados"),
            ],
            ventajas: strings(&["Escalable", "Inteligente"]),
            desventajas: strings(&["Más complejo"]),
        }),
        OrchestrationPattern::ConsumerProducer => None,
    }
}
