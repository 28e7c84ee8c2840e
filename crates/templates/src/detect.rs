//! Area detection by keyword overlap.

use crate::registry::TemplateRegistry;
use propuestas_core::FALLBACK_AREA;
use serde::Serialize;

/// How many of an area's keywords occur in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaScore {
    pub area: String,
    pub score: usize,
}

/// Score every registered area against `text`, in registration order.
///
/// A keyword counts once if it occurs anywhere in the lowercased text as a
/// substring, so `"cita"` matches inside `"solicitar"`.
pub fn score_areas(text: &str, registry: &TemplateRegistry) -> Vec<AreaScore> {
    let lowered = text.to_lowercase();
    registry
        .iter()
        .map(|template| AreaScore {
            area: template.id.clone(),
            score: template
                .keywords
                .iter()
                .filter(|kw| lowered.contains(kw.to_lowercase().as_str()))
                .count(),
        })
        .collect()
}

/// Pick the best-scoring area for `text`.
///
/// Ties go to the area registered first. When no keyword matches at all the
/// result is [`FALLBACK_AREA`].
pub fn detect_area(text: &str, registry: &TemplateRegistry) -> String {
    let mut best: Option<AreaScore> = None;
    for candidate in score_areas(text, registry) {
        let current = best.as_ref().map_or(0, |b| b.score);
        if candidate.score > current {
            best = Some(candidate);
        }
    }

    match best {
        Some(winner) => {
            tracing::debug!(area = %winner.area, score = winner.score, "Area detected");
            winner.area
        }
        None => {
            tracing::debug!(fallback = FALLBACK_AREA, "No area keywords matched");
            FALLBACK_AREA.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_registry;
    use crate::record::TemplateRecord;

    fn with_keywords(id: &str, keywords: &[&str]) -> TemplateRecord {
        TemplateRecord {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            problem: "p".into(),
            solution: "s".into(),
            architecture: "a".into(),
            risks: vec!["r".into()],
            technologies: vec!["t".into()],
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            components: vec![],
            extra_risks: vec![],
        }
    }

    #[test]
    fn detects_fintech_from_payment_need() {
        let registry = default_registry();
        let area = detect_area(
            "Necesitamos optimizar el proceso de pagos con tarjeta de crédito",
            &registry,
        );
        assert_eq!(area, "fintech");
    }

    #[test]
    fn detects_logistics() {
        let registry = default_registry();
        let area = detect_area(
            "Queremos mejorar la logística de entrega de nuestra flota de camiones",
            &registry,
        );
        assert_eq!(area, "transporte");
    }

    #[test]
    fn zero_matches_fall_back_to_general() {
        let registry = default_registry();
        assert_eq!(detect_area("xyzzy qwerty asdfgh", &registry), FALLBACK_AREA);
        assert_eq!(detect_area("", &registry), FALLBACK_AREA);
    }

    #[test]
    fn tie_goes_to_first_registered() {
        let mut registry = TemplateRegistry::new();
        registry.register(with_keywords("primero", &["sensor"]));
        registry.register(with_keywords("segundo", &["alarma"]));
        assert_eq!(detect_area("sensor con alarma", &registry), "primero");
    }

    #[test]
    fn higher_score_beats_earlier_registration() {
        let mut registry = TemplateRegistry::new();
        registry.register(with_keywords("primero", &["sensor"]));
        registry.register(with_keywords("segundo", &["alarma", "sirena"]));
        assert_eq!(detect_area("sensor, alarma y sirena", &registry), "segundo");
    }

    #[test]
    fn substring_matching_is_literal() {
        // "solicitar" contains the medical keyword "cita".
        let scores = score_areas("Queremos solicitar algo", &default_registry());
        let medica = scores.iter().find(|s| s.area == "medica").unwrap();
        assert_eq!(medica.score, 1);
    }

    #[test]
    fn scoring_is_case_insensitive() {
        let scores = score_areas("BLOCKCHAIN y NFT", &default_registry());
        let blockchain = scores.iter().find(|s| s.area == "blockchain").unwrap();
        assert_eq!(blockchain.score, 2);
    }

    #[test]
    fn scores_follow_registry_order() {
        let registry = default_registry();
        let areas: Vec<String> = score_areas("texto", &registry)
            .into_iter()
            .map(|s| s.area)
            .collect();
        assert_eq!(areas, registry.area_ids());
    }
}
