//! # Propuestas Core
//!
//! Domain types, traits, and error definitions shared by every Propuestas crate.
//! This crate has **no framework dependencies**: it defines the vocabulary
//! (area identifiers, error kinds, LLM messages) that the other crates
//! implement against.
//!
//! ## Layout
//!
//! - [`area`]: stable area identifiers and the two named fallbacks
//! - [`error`]: the error taxonomy surfaced in proposal results
//! - [`message`] / [`provider`]: the narrow LLM collaborator interface

pub mod area;
pub mod error;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use area::{BUILTIN_AREAS, DEFAULT_TEMPLATE_AREA, FALLBACK_AREA};
pub use error::{Error, ProviderError, Result};
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
