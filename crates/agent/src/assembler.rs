//! Proposal assembly: turns a template plus the user's need into the
//! four sections and the final Markdown document.
//!
//! Every function here is pure: identical inputs always render identical
//! text.

use propuestas_templates::{TemplateRecord, split_risk};

/// Heading of the suggested-components block appended to the solution.
const COMPONENTS_HEADING: &str = "**Componentes específicos sugeridos:**";

/// Block line used when the area has no suggested components.
const COMPONENTS_PLACEHOLDER: &str = "- Módulos personalizados";

const DISCLAIMER: &str =
    "*Propuesta generada automáticamente - Revisar y personalizar según requisitos específicos*";

/// The rendered sections of one proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalSections {
    pub problem: String,
    pub solution: String,
    pub architecture: String,
    pub risks: Vec<String>,
}

impl ProposalSections {
    /// Assemble every section for `need` from `template`.
    pub fn assemble(
        need: &str,
        template: &TemplateRecord,
        keywords: &[String],
        max_keywords: usize,
    ) -> Self {
        Self {
            problem: identify_problem(need, template, keywords, max_keywords),
            solution: generate_solution(template),
            architecture: design_architecture(template),
            risks: analyze_risks(template),
        }
    }
}

/// Base problem text followed by the literal need and the first
/// `max_keywords` extracted keywords.
pub fn identify_problem(
    need: &str,
    template: &TemplateRecord,
    keywords: &[String],
    max_keywords: usize,
) -> String {
    let quoted = keywords
        .iter()
        .take(max_keywords)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n\n**Necesidad específica identificada:** {need}\n\n**Palabras clave detectadas:** {quoted}",
        template.problem
    )
}

/// Base solution text followed by the area's suggested components.
pub fn generate_solution(template: &TemplateRecord) -> String {
    let block = if template.components.is_empty() {
        COMPONENTS_PLACEHOLDER.to_string()
    } else {
        template
            .components
            .iter()
            .map(|c| format!("- {c}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("{}\n\n{COMPONENTS_HEADING}\n{block}", template.solution)
}

/// Architecture text, unchanged.
pub fn design_architecture(template: &TemplateRecord) -> String {
    template.architecture.clone()
}

/// Base risks plus the area-specific extras.
pub fn analyze_risks(template: &TemplateRecord) -> Vec<String> {
    template.all_risks()
}

/// Render one risk as a Markdown bullet: `- **name**: mitigation`.
pub fn render_risk(risk: &str) -> String {
    let (name, mitigation) = split_risk(risk);
    format!("- **{name}**: {mitigation}")
}

/// Render the final Markdown document.
pub fn render_document(template: &TemplateRecord, sections: &ProposalSections) -> String {
    let risks = sections
        .risks
        .iter()
        .map(|r| render_risk(r))
        .collect::<Vec<_>>()
        .join("\n");
    let technologies = template.technologies.join(", ");

    format!(
        "# PROPUESTA TÉCNICA

## Área: {name}

---

## 1. PROBLEMA IDENTIFICADO

{problem}

---

## 2. SOLUCIÓN TÉCNICA SUGERIDA

{solution}

---

## 3. ARQUITECTURA GENERAL (ALTO NIVEL)

{architecture}

### Tecnologías Recomendadas
{technologies}

---

## 4. PRINCIPALES RIESGOS

{risks}

---

{DISCLAIMER}
",
        name = template.name,
        problem = sections.problem,
        solution = sections.solution,
        architecture = sections.architecture,
    )
}
