//! The per-area template record.

use serde::{Deserialize, Serialize};

/// Separator between a risk's name and its mitigation text.
pub const RISK_SEPARATOR: &str = " - ";

/// Static proposal boilerplate for one business area.
///
/// Built-in records are compiled in; extra records may be declared as
/// `[[templates]]` tables in the config file, so every field maps 1:1 to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Stable area identifier (e.g. `fintech`).
    pub id: String,

    /// Display name rendered in the `## Área:` heading.
    pub name: String,

    /// One-line description of the area.
    #[serde(default)]
    pub description: String,

    /// Base problem statement.
    pub problem: String,

    /// Base solution outline.
    pub solution: String,

    /// High-level architecture description.
    pub architecture: String,

    /// Ordered risks, each `"<name> - <mitigation>"`.
    pub risks: Vec<String>,

    /// Recommended technologies.
    pub technologies: Vec<String>,

    /// Keywords matched against the lowercased need.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Suggested components listed under the solution section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,

    /// Area-specific risks appended after the base risks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_risks: Vec<String>,
}

impl TemplateRecord {
    /// Check the fields every rendered proposal depends on.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let blank = [
            ("id", &self.id),
            ("name", &self.name),
            ("problem", &self.problem),
            ("solution", &self.solution),
            ("architecture", &self.architecture),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        if let Some((field, _)) = blank {
            return Err(TemplateError::Malformed {
                id: self.id.clone(),
                reason: format!("`{field}` is empty"),
            });
        }

        if self.risks.is_empty() {
            return Err(TemplateError::Malformed {
                id: self.id.clone(),
                reason: "no risks defined".into(),
            });
        }

        if self.technologies.is_empty() {
            return Err(TemplateError::Malformed {
                id: self.id.clone(),
                reason: "no technologies defined".into(),
            });
        }

        Ok(())
    }

    /// Base risks followed by the area-specific extras.
    pub fn all_risks(&self) -> Vec<String> {
        self.risks
            .iter()
            .chain(self.extra_risks.iter())
            .cloned()
            .collect()
    }
}

/// Split a risk into `(name, mitigation)` at the first [`RISK_SEPARATOR`].
///
/// A risk without the separator is all name and an empty mitigation.
pub fn split_risk(risk: &str) -> (&str, &str) {
    risk.split_once(RISK_SEPARATOR).unwrap_or((risk, ""))
}

/// Template errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TemplateError {
    #[error("template '{id}' is malformed: {reason}")]
    Malformed { id: String, reason: String },
}
