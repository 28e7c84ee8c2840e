//! LLM-backed proposal writer.
//!
//! Sends the need to a chat-completion provider together with fixed
//! instructions and returns whatever document the model writes. The
//! provider owns timeouts; nothing is retried.

use crate::generator::validate_need;
use propuestas_core::error::Result;
use propuestas_core::message::Message;
use propuestas_core::provider::{Provider, ProviderRequest};
use std::sync::Arc;
use tracing::{debug, info};

/// Instructions sent as the system message.
pub const SYSTEM_PROMPT: &str = "Eres un arquitecto de soluciones senior. \
A partir de una necesidad de negocio breve, redacta una propuesta técnica en Markdown \
que empiece con el título \"# PROPUESTA TÉCNICA\" y contenga exactamente estas secciones:\n\
## 1. PROBLEMA IDENTIFICADO\n\
## 2. SOLUCIÓN TÉCNICA SUGERIDA\n\
## 3. ARQUITECTURA GENERAL (ALTO NIVEL)\n\
## 4. PRINCIPALES RIESGOS\n\
Justifica las tecnologías elegidas, describe componentes y capas, y acompaña cada riesgo \
con su mitigación. Sé concreto, realista y profesional.";

/// Writes proposals through an LLM provider.
pub struct LlmProposalWriter {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    min_need_chars: usize,
}

impl LlmProposalWriter {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
            min_need_chars: 10,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_min_need_chars(mut self, min_need_chars: usize) -> Self {
        self.min_need_chars = min_need_chars;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request(&self, need: &str) -> ProviderRequest {
        ProviderRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(SYSTEM_PROMPT),
                Message::user(format!("Necesidad de negocio:\n{}", need.trim())),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Write a proposal for `need`.
    ///
    /// The need is validated like the template path; provider failures come
    /// back as [`propuestas_core::Error::Provider`].
    pub async fn write(&self, need: &str) -> Result<String> {
        validate_need(need, self.min_need_chars)?;

        debug!(provider = %self.provider.name(), model = %self.model, "Requesting LLM proposal");
        let response = self.provider.complete(self.request(need)).await?;

        info!(
            provider = %self.provider.name(),
            model = %response.model,
            tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "LLM proposal received"
        );
        Ok(response.message.content)
    }
}
