//! Template registry: ordered, id-keyed collection of area templates.

use crate::record::TemplateRecord;
use propuestas_core::DEFAULT_TEMPLATE_AREA;

/// Ordered set of templates.
///
/// Registration order is significant: it is the order areas are listed and
/// the order detection walks when two areas tie.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<TemplateRecord>,
}

impl TemplateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    ///
    /// A template whose id is already registered replaces the existing one
    /// in place (keeping its position) and the old record is returned.
    pub fn register(&mut self, template: TemplateRecord) -> Option<TemplateRecord> {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => {
                tracing::debug!(area = %template.id, "Replacing registered template");
                Some(std::mem::replace(slot, template))
            }
            None => {
                self.templates.push(template);
                None
            }
        }
    }

    /// Look up a template by exact id.
    pub fn get(&self, id: &str) -> Option<&TemplateRecord> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Resolve an id to the template a proposal should use.
    ///
    /// Unknown ids (including the detector's fallback) resolve to
    /// [`DEFAULT_TEMPLATE_AREA`]; if that area is not registered either, the
    /// first registered template is used. Only an empty registry yields
    /// `None`.
    pub fn resolve(&self, id: &str) -> Option<&TemplateRecord> {
        self.get(id)
            .or_else(|| self.get(DEFAULT_TEMPLATE_AREA))
            .or_else(|| self.templates.first())
    }

    /// Area ids in registration order.
    pub fn area_ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_registry;

    fn record(id: &str) -> TemplateRecord {
        TemplateRecord {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            problem: "p".into(),
            solution: "s".into(),
            architecture: "a".into(),
            risks: vec!["r - m".into()],
            technologies: vec!["t".into()],
            keywords: vec![],
            components: vec![],
            extra_risks: vec![],
        }
    }

    #[test]
    fn register_appends_in_order() {
        let mut registry = TemplateRegistry::new();
        assert!(registry.register(record("b")).is_none());
        assert!(registry.register(record("a")).is_none());
        assert_eq!(registry.area_ids(), vec!["b", "a"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_same_id_replaces_in_place() {
        let mut registry = TemplateRegistry::new();
        registry.register(record("a"));
        registry.register(record("b"));

        let replacement = TemplateRecord {
            name: "Nueva A".into(),
            ..record("a")
        };
        let old = registry.register(replacement).unwrap();

        assert_eq!(old.name, "A");
        assert_eq!(registry.area_ids(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().name, "Nueva A");
    }

    #[test]
    fn resolve_unknown_falls_back_to_fintech() {
        let registry = default_registry();
        assert_eq!(registry.resolve("general").unwrap().id, "fintech");
        assert_eq!(registry.resolve("no_existe").unwrap().id, "fintech");
        assert_eq!(registry.resolve("medica").unwrap().id, "medica");
    }

    #[test]
    fn resolve_without_default_area_uses_first() {
        let mut registry = TemplateRegistry::new();
        registry.register(record("energia"));
        registry.register(record("mineria"));
        assert_eq!(registry.resolve("general").unwrap().id, "energia");
    }

    #[test]
    fn resolve_on_empty_registry_is_none() {
        let registry = TemplateRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("fintech").is_none());
    }

    #[test]
    fn contains_is_exact() {
        let registry = default_registry();
        assert!(registry.contains("seguros"));
        assert!(!registry.contains("Seguros"));
        assert!(!registry.contains(""));
    }
}
