//! The proposal generator: the heart of Propuestas.
//!
//! Two ways to turn a business need into a technical proposal:
//!
//! 1. **Template path** ([`ProposalGenerator`]): extract keywords, detect the
//!    business area, assemble the four sections from the area template and
//!    render the Markdown document, recording an execution trace throughout
//! 2. **LLM path** ([`LlmProposalWriter`]): hand the need to a
//!    chat-completion provider with fixed instructions
//!
//! The template path is synchronous and never fails outright: every error
//! is folded into the returned [`ProposalResult`].

pub mod assembler;
pub mod generator;
pub mod llm;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use assembler::{ProposalSections, render_document, render_risk};
pub use generator::{
    GeneratorSettings, ProposalGenerator, ProposalInputs, ProposalOutputs, ProposalResult,
    validate_need,
};
pub use llm::{LlmProposalWriter, SYSTEM_PROMPT};
