//! LLM provider implementations for Propuestas.
//!
//! All providers implement the `propuestas_core::Provider` trait.
//! The router selects the configured provider for the LLM-backed writer.

pub mod openai_compat;
pub mod router;

pub use openai_compat::OpenAiCompatProvider;
pub use router::{ProviderRouter, build_from_config, model_for};
