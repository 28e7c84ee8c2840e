//! Area templates for Propuestas.
//!
//! Holds the static per-area proposal boilerplate and the two pieces of
//! selection logic that operate on it:
//!
//! - [`keywords::extract_keywords`]: content-word tokenizer with a fixed
//!   Spanish stop-word list
//! - [`detect::detect_area`]: keyword-overlap scoring over the registry
//!
//! The registry is built once at startup ([`default_registry`]) and shared
//! read-only by every request.

pub mod builtin;
pub mod detect;
pub mod keywords;
pub mod record;
pub mod registry;

pub use detect::{AreaScore, detect_area, score_areas};
pub use keywords::{STOP_WORDS, extract_keywords};
pub use record::{RISK_SEPARATOR, TemplateError, TemplateRecord, split_risk};
pub use registry::TemplateRegistry;

/// Create a registry holding the ten built-in area templates.
pub fn default_registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    for template in builtin::templates() {
        registry.register(template);
    }
    registry
}
