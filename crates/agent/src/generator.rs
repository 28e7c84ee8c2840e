//! The template-based proposal generator.
//!
//! `generate` runs the whole pipeline: validate the need, pick an area,
//! assemble the sections and render the document, recording a trace step
//! at every stage. Failures are folded into the result; nothing escapes.

use crate::assembler::{self, ProposalSections};
use propuestas_config::GeneratorConfig;
use propuestas_core::error::{Error, Result};
use propuestas_telemetry::{ExecutionState, ExecutionTrace};
use propuestas_templates::{TemplateRegistry, detect_area, extract_keywords};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Characters of the need quoted in the `analizando_entrada` step.
const NEED_PREVIEW_CHARS: usize = 100;

/// Tunables for [`ProposalGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Minimum length of the trimmed need, in characters.
    pub min_need_chars: usize,
    /// Keywords quoted in the problem section.
    pub max_keywords: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            min_need_chars: 10,
            max_keywords: 10,
        }
    }
}

impl From<&GeneratorConfig> for GeneratorSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            min_need_chars: config.min_need_chars,
            max_keywords: config.max_keywords,
        }
    }
}

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalInputs {
    #[serde(rename = "necesidad")]
    pub need: String,
    #[serde(rename = "area_especifica")]
    pub forced_area: Option<String>,
}

/// The individual sections behind a successful proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalOutputs {
    /// Id of the template actually used.
    pub area: String,
    #[serde(rename = "problema")]
    pub problem: String,
    #[serde(rename = "solucion")]
    pub solution: String,
    #[serde(rename = "arquitectura")]
    pub architecture: String,
    #[serde(rename = "riesgos")]
    pub risks: Vec<String>,
    #[serde(rename = "tecnologias")]
    pub technologies: Vec<String>,
}

/// Outcome of one `generate` call.
///
/// `successful` is true exactly when `error` is `None` and `proposal` is
/// non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalResult {
    /// Rendered Markdown document, empty on failure.
    #[serde(rename = "propuesta")]
    pub proposal: String,
    /// Area chosen by detection or forcing, empty on failure.
    #[serde(rename = "area_detectada")]
    pub detected_area: String,
    pub inputs: ProposalInputs,
    /// Serialized as `{}` when absent.
    #[serde(with = "outputs_or_empty")]
    pub outputs: Option<ProposalOutputs>,
    #[serde(rename = "exitoso")]
    pub successful: bool,
    #[serde(
        rename = "trazabilidad",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trace: Option<ExecutionTrace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Kind of the failure (`ValidationError`, `InternalError`).
    #[serde(skip)]
    pub error_kind: Option<&'static str>,
}

impl ProposalResult {
    pub fn is_validation_failure(&self) -> bool {
        self.error_kind == Some("ValidationError")
    }
}

mod outputs_or_empty {
    use super::ProposalOutputs;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Empty {}

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Full(ProposalOutputs),
        Empty(Empty),
    }

    pub fn serialize<S: Serializer>(
        value: &Option<ProposalOutputs>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(outputs) => outputs.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ProposalOutputs>, D::Error> {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Full(outputs) => Some(outputs),
            Repr::Empty(_) => None,
        })
    }
}

/// Check the need against the minimum length.
pub fn validate_need(need: &str, min_chars: usize) -> Result<()> {
    if need.trim().chars().count() < min_chars {
        return Err(Error::Validation(format!(
            "La descripción debe tener al menos {min_chars} caracteres"
        )));
    }
    Ok(())
}

/// A successful pipeline run, before it is wrapped into a result.
struct Generated {
    area: String,
    document: String,
    outputs: ProposalOutputs,
}

/// Template-based proposal generator.
///
/// Holds only a shared registry and settings, so one instance can serve
/// any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct ProposalGenerator {
    registry: Arc<TemplateRegistry>,
    settings: GeneratorSettings,
}

impl ProposalGenerator {
    pub fn new(registry: Arc<TemplateRegistry>, settings: GeneratorSettings) -> Self {
        Self { registry, settings }
    }

    /// Generator over the built-in templates with default settings.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(propuestas_templates::default_registry()),
            GeneratorSettings::default(),
        )
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Registered area ids, in registration order.
    pub fn list_areas(&self) -> Vec<String> {
        self.registry
            .area_ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Generate a proposal for `need`.
    ///
    /// `forced_area` bypasses detection when it names a registered area and
    /// is ignored otherwise. The trace is attached only when `want_trace`.
    pub fn generate(
        &self,
        need: &str,
        forced_area: Option<&str>,
        want_trace: bool,
    ) -> ProposalResult {
        let mut trace = ExecutionTrace::start();
        let inputs = ProposalInputs {
            need: need.to_string(),
            forced_area: forced_area.map(str::to_string),
        };

        match self.run(need, forced_area, &mut trace) {
            Ok(generated) => {
                info!(
                    area = %generated.area,
                    template = %generated.outputs.area,
                    duration_ms = ?trace.duration_ms,
                    "Proposal generated"
                );
                ProposalResult {
                    proposal: generated.document,
                    detected_area: generated.area,
                    inputs,
                    outputs: Some(generated.outputs),
                    successful: true,
                    trace: want_trace.then_some(trace),
                    error: None,
                    error_kind: None,
                }
            }
            Err(err) => {
                let (kind, context, message) = if err.is_validation() {
                    warn!(error = %err, "Need rejected");
                    ("ValidationError", "Validación de entrada", err.to_string())
                } else {
                    warn!(error = %err, "Proposal generation failed");
                    (
                        "InternalError",
                        "Ejecución del agente",
                        format!("Error inesperado: {err}"),
                    )
                };

                trace.finalize();
                trace.add_error(kind, err.to_string(), context);

                ProposalResult {
                    proposal: String::new(),
                    detected_area: String::new(),
                    inputs,
                    outputs: None,
                    successful: false,
                    trace: want_trace.then_some(trace),
                    error: Some(message),
                    error_kind: Some(kind),
                }
            }
        }
    }

    fn run(
        &self,
        need: &str,
        forced_area: Option<&str>,
        trace: &mut ExecutionTrace,
    ) -> Result<Generated> {
        trace.add_step(
            ExecutionState::Iniciado,
            "Inicialización del agente generador",
            metadata(json!({ "necesidad_length": need.chars().count() })),
        );

        validate_need(need, self.settings.min_need_chars)?;

        let keywords = extract_keywords(need);
        trace.add_step(
            ExecutionState::AnalizandoEntrada,
            "Analizando entrada del usuario",
            metadata(json!({
                "necesidad": preview(need),
                "palabras_clave": keywords.len(),
            })),
        );

        let (area, detail) = match forced_area.filter(|a| self.registry.contains(a)) {
            Some(forced) => (
                forced.to_string(),
                format!("Área forzada por el usuario: {forced}"),
            ),
            None => {
                if let Some(ignored) = forced_area {
                    debug!(area = %ignored, "Forced area not registered, detecting instead");
                }
                let detected = detect_area(need, &self.registry);
                let detail = format!("Área detectada automáticamente: {detected}");
                (detected, detail)
            }
        };
        trace.add_step(
            ExecutionState::DetectandoArea,
            detail,
            metadata(json!({ "area": area })),
        );

        let template = self
            .registry
            .resolve(&area)
            .ok_or_else(|| Error::Internal("no hay plantillas registradas".into()))?;
        template
            .validate()
            .map_err(|e| Error::Internal(e.to_string()))?;

        trace.add_step(
            ExecutionState::IdentificandoProblema,
            "Identificando problema específico",
            metadata(json!({ "template": template.id })),
        );
        let problem =
            assembler::identify_problem(need, template, &keywords, self.settings.max_keywords);

        trace.add_step(
            ExecutionState::GenerandoSolucion,
            "Generando solución técnica",
            metadata(json!({ "componentes": template.components.len() })),
        );
        let solution = assembler::generate_solution(template);

        trace.add_step(
            ExecutionState::DisenandoArquitectura,
            "Diseñando arquitectura de alto nivel",
            Map::new(),
        );
        let architecture = assembler::design_architecture(template);

        trace.add_step(
            ExecutionState::AnalizandoRiesgos,
            "Analizando principales riesgos",
            Map::new(),
        );
        let risks = assembler::analyze_risks(template);

        trace.add_step(
            ExecutionState::GenerandoOutput,
            "Generando propuesta final",
            Map::new(),
        );
        let sections = ProposalSections {
            problem,
            solution,
            architecture,
            risks,
        };
        let document = assembler::render_document(template, &sections);

        trace.finalize();
        trace.add_step(
            ExecutionState::Completado,
            "Propuesta generada exitosamente",
            metadata(json!({ "duracion_ms": trace.duration_ms })),
        );

        Ok(Generated {
            area,
            document,
            outputs: ProposalOutputs {
                area: template.id.clone(),
                problem: sections.problem,
                solution: sections.solution,
                architecture: sections.architecture,
                risks: sections.risks,
                technologies: template.technologies.clone(),
            },
        })
    }
}

fn metadata(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// First characters of the need followed by an ellipsis.
fn preview(need: &str) -> String {
    let head: String = need.chars().take(NEED_PREVIEW_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use propuestas_templates::TemplateRecord;

    const PAYMENTS: &str = "Necesitamos optimizar el proceso de pagos con tarjeta de crédito";

    fn generator() -> ProposalGenerator {
        ProposalGenerator::with_defaults()
    }

    #[test]
    fn successful_generation_fills_every_field() {
        let result = generator().generate(PAYMENTS, None, true);

        assert!(result.successful);
        assert!(result.error.is_none());
        assert_eq!(result.detected_area, "fintech");
        assert!(result.proposal.starts_with("# PROPUESTA TÉCNICA\n\n## Área: Fintech"));

        let outputs = result.outputs.as_ref().unwrap();
        assert_eq!(outputs.area, "fintech");
        assert_eq!(outputs.risks.len(), 5);
        assert!(outputs.problem.contains(PAYMENTS));
        assert!(outputs.problem.contains("optimizar, proceso, pagos, tarjeta, crédito"));
        assert!(outputs.technologies.contains(&"Stripe API".to_string()));
    }

    #[test]
    fn successful_trace_has_nine_ordered_steps() {
        let result = generator().generate(PAYMENTS, None, true);
        let trace = result.trace.unwrap();

        assert_eq!(
            trace.states(),
            vec![
                ExecutionState::Iniciado,
                ExecutionState::AnalizandoEntrada,
                ExecutionState::DetectandoArea,
                ExecutionState::IdentificandoProblema,
                ExecutionState::GenerandoSolucion,
                ExecutionState::DisenandoArquitectura,
                ExecutionState::AnalizandoRiesgos,
                ExecutionState::GenerandoOutput,
                ExecutionState::Completado,
            ]
        );
        let summary = trace.summary();
        assert_eq!(summary.total_steps, 9);
        assert_eq!(summary.total_errors, 0);
        assert!(summary.successful);
        assert!(trace.is_finalized());

        let completed = trace.steps.last().unwrap();
        assert_eq!(
            completed.metadata["duracion_ms"],
            json!(trace.duration_ms.unwrap())
        );
        assert!(trace.steps[2].detail.starts_with("Área detectada automáticamente"));
    }

    #[test]
    fn area_without_components_renders_placeholder() {
        let result = generator().generate(PAYMENTS, Some("seguros"), false);
        assert!(result.successful);

        let outputs = result.outputs.unwrap();
        assert!(outputs.solution.ends_with("\n- Módulos personalizados"));
        assert_eq!(outputs.risks.len(), 4);
        assert!(result.proposal.contains("- Módulos personalizados\n\n---"));
    }

    #[test]
    fn trace_is_omitted_unless_requested() {
        assert!(generator().generate(PAYMENTS, None, false).trace.is_none());
        assert!(generator().generate("corto", None, false).trace.is_none());
    }

    #[test]
    fn short_need_is_a_validation_failure() {
        let result = generator().generate("Hola", None, true);

        assert!(!result.successful);
        assert!(result.is_validation_failure());
        assert_eq!(
            result.error.as_deref(),
            Some("La descripción debe tener al menos 10 caracteres")
        );
        assert!(result.proposal.is_empty());
        assert!(result.detected_area.is_empty());
        assert!(result.outputs.is_none());

        let trace = result.trace.unwrap();
        assert_eq!(trace.states(), vec![ExecutionState::Iniciado]);
        assert_eq!(trace.errors.len(), 1);
        assert_eq!(trace.errors[0].kind, "ValidationError");
        assert_eq!(trace.errors[0].context, "Validación de entrada");
        assert!(!trace.summary().successful);
    }

    #[test]
    fn short_need_is_rejected_even_with_forced_area() {
        let result = generator().generate("Pagos web", Some("fintech"), true);

        assert!(!result.successful);
        assert!(result.is_validation_failure());
        assert_eq!(
            result.error.as_deref(),
            Some("La descripción debe tener al menos 10 caracteres")
        );
        assert!(result.detected_area.is_empty());
        assert_eq!(result.trace.unwrap().errors.len(), 1);
    }

    #[test]
    fn whitespace_padding_does_not_count() {
        let result = generator().generate("   pagos    ", None, false);
        assert!(!result.successful);
        assert!(generator().generate("", None, false).is_validation_failure());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 10 characters, 14 bytes.
        let result = generator().generate("ñañañañaña", None, false);
        assert!(result.successful);
        // 9 characters, 13 bytes.
        let result = generator().generate("ñañañañañ", None, false);
        assert!(!result.successful);
    }

    #[test]
    fn forced_area_bypasses_detection() {
        let result = generator().generate(PAYMENTS, Some("medica"), true);
        assert!(result.successful);
        assert_eq!(result.detected_area, "medica");
        assert_eq!(result.outputs.as_ref().unwrap().area, "medica");
        assert_eq!(result.inputs.forced_area.as_deref(), Some("medica"));

        let trace = result.trace.unwrap();
        assert_eq!(trace.steps[2].detail, "Área forzada por el usuario: medica");
    }

    #[test]
    fn unknown_or_empty_forced_area_is_ignored() {
        for forced in ["inexistente", ""] {
            let result = generator().generate(PAYMENTS, Some(forced), false);
            assert!(result.successful);
            assert_eq!(result.detected_area, "fintech");
        }
    }

    #[test]
    fn unmatched_need_falls_back_to_default_template() {
        let result = generator().generate("xyzzy qwerty asdfgh zxcvb", None, false);
        assert!(result.successful);
        assert_eq!(result.detected_area, "general");
        assert_eq!(result.outputs.as_ref().unwrap().area, "fintech");
        assert!(result.proposal.contains("## Área: Fintech"));
    }

    #[test]
    fn empty_registry_is_an_internal_error() {
        let generator = ProposalGenerator::new(
            Arc::new(TemplateRegistry::new()),
            GeneratorSettings::default(),
        );
        let result = generator.generate(PAYMENTS, None, true);

        assert!(!result.successful);
        assert!(!result.is_validation_failure());
        assert!(result.error.as_deref().unwrap().starts_with("Error inesperado: "));

        let trace = result.trace.unwrap();
        assert_eq!(trace.errors.len(), 1);
        assert_eq!(trace.errors[0].kind, "InternalError");
        assert_eq!(trace.errors[0].context, "Ejecución del agente");
        assert_eq!(trace.steps.len(), 3);
    }

    #[test]
    fn malformed_template_is_an_internal_error() {
        let mut registry = TemplateRegistry::new();
        registry.register(TemplateRecord {
            id: "rota".into(),
            name: "Rota".into(),
            description: String::new(),
            problem: "p".into(),
            solution: "s".into(),
            architecture: "a".into(),
            risks: vec!["r - m".into()],
            technologies: vec![],
            keywords: vec!["sensor".into()],
            components: vec![],
            extra_risks: vec![],
        });
        let generator = ProposalGenerator::new(Arc::new(registry), GeneratorSettings::default());

        let result = generator.generate("Necesitamos un sensor nuevo", None, false);
        assert!(!result.successful);
        assert!(result.error.unwrap().contains("rota"));
    }

    #[test]
    fn custom_min_length_is_honoured() {
        let generator = ProposalGenerator::new(
            Arc::new(propuestas_templates::default_registry()),
            GeneratorSettings {
                min_need_chars: 3,
                max_keywords: 2,
            },
        );
        let result = generator.generate("pagos", None, false);
        assert!(result.successful);
        assert!(result.outputs.unwrap().problem.ends_with("**Palabras clave detectadas:** pagos"));

        let err = validate_need("ab", 3).unwrap_err();
        assert_eq!(err.to_string(), "La descripción debe tener al menos 3 caracteres");
    }

    #[test]
    fn list_areas_matches_registry_order() {
        let areas = generator().list_areas();
        assert_eq!(areas.len(), 10);
        assert_eq!(areas[0], "fintech");
        assert_eq!(areas[9], "combustibles");
    }

    #[test]
    fn generation_is_deterministic_apart_from_trace() {
        let a = generator().generate(PAYMENTS, None, false);
        let b = generator().generate(PAYMENTS, None, false);
        assert_eq!(a.proposal, b.proposal);
        assert_eq!(a.outputs, b.outputs);
    }

    #[test]
    fn wire_format_uses_spanish_keys() {
        let value = serde_json::to_value(generator().generate(PAYMENTS, None, true)).unwrap();
        assert_eq!(value["exitoso"], true);
        assert_eq!(value["area_detectada"], "fintech");
        assert_eq!(value["inputs"]["necesidad"], PAYMENTS);
        assert!(value["inputs"]["area_especifica"].is_null());
        assert_eq!(value["outputs"]["area"], "fintech");
        assert!(value["outputs"]["riesgos"].is_array());
        assert_eq!(value["trazabilidad"]["pasos"].as_array().unwrap().len(), 9);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn failed_result_serializes_empty_outputs() {
        let result = generator().generate("corto", None, false);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["outputs"], json!({}));
        assert_eq!(value["exitoso"], false);
        assert!(value.get("trazabilidad").is_none());

        let back: ProposalResult = serde_json::from_value(value).unwrap();
        assert!(back.outputs.is_none());
        assert_eq!(back.error, result.error);
    }

    #[test]
    fn successful_result_round_trips_outputs() {
        let result = generator().generate(PAYMENTS, None, false);
        let text = serde_json::to_string(&result).unwrap();
        let back: ProposalResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.outputs, result.outputs);
    }

    #[test]
    fn preview_truncates_on_characters() {
        let long = "á".repeat(150);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), NEED_PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
    }
}
