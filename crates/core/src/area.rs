//! Area identifiers.
//!
//! An *area* is the business domain a need is classified into. The built-in
//! identifiers are an external contract: their strings never change and their
//! order is the registration order of the built-in template registry, which in
//! turn decides detection tie-breaks and listing order.

/// Result of area detection when no template keyword matches the input.
///
/// No template is registered under this identifier; template lookup resolves
/// it to [`DEFAULT_TEMPLATE_AREA`].
pub const FALLBACK_AREA: &str = "general";

/// Template used when a lookup names an area that is not registered.
pub const DEFAULT_TEMPLATE_AREA: &str = "fintech";

/// Built-in area identifiers, in registration order.
pub const BUILTIN_AREAS: [&str; 10] = [
    "fintech",
    "app_moviles",
    "blockchain",
    "arquitectura",
    "seguros",
    "medica",
    "telecomunicaciones",
    "transporte",
    "almacenamiento",
    "combustibles",
];

/// Whether `id` is one of the built-in area identifiers.
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_AREAS.contains(&id)
}
