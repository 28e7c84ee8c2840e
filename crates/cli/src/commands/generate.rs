//! `propuestas generate`: Turn a business need into a technical proposal.

use propuestas_agent::{GeneratorSettings, LlmProposalWriter, ProposalGenerator, ProposalResult};
use propuestas_config::AppConfig;
use propuestas_telemetry::ExecutionTrace;
use std::path::PathBuf;
use std::sync::Arc;

/// Flags for the template path.
pub struct GenerateOptions {
    pub area: Option<String>,
    pub trace: bool,
    pub json: bool,
    pub trace_out: Option<PathBuf>,
}

pub async fn run(need: &str, options: GenerateOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let generator = ProposalGenerator::new(
        Arc::new(config.template_registry()),
        GeneratorSettings::from(&config.generator),
    );

    let want_trace = options.trace || options.json || options.trace_out.is_some();
    tracing::debug!(area = ?options.area, want_trace, "Generating proposal from templates");
    let result = generator.generate(need, options.area.as_deref(), want_trace);

    if let (Some(path), Some(trace)) = (&options.trace_out, &result.trace) {
        std::fs::write(path, serde_json::to_string_pretty(trace)?)?;
        eprintln!("Trace written to {}", path.display());
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.successful {
        print!("{}", result.proposal);
    }

    if options.trace && !options.json {
        if let Some(trace) = &result.trace {
            eprintln!();
            eprint!("{}", render_trace(trace));
        }
    }

    into_outcome(result)
}

/// Fail the command when the proposal was not generated.
fn into_outcome(result: ProposalResult) -> Result<(), Box<dyn std::error::Error>> {
    if result.successful {
        return Ok(());
    }
    let message = result
        .error
        .unwrap_or_else(|| "No se pudo generar la propuesta".to_string());
    Err(message.into())
}

/// Human-readable trace listing.
fn render_trace(trace: &ExecutionTrace) -> String {
    let summary = trace.summary();
    let mut out = format!(
        "Traza {}: {} pasos, {} errores, {}\n",
        trace.id,
        summary.total_steps,
        summary.total_errors,
        match summary.duration_ms {
            Some(ms) => format!("{ms} ms"),
            None => "en curso".to_string(),
        }
    );

    for (i, step) in trace.steps.iter().enumerate() {
        out.push_str(&format!("  {:>2}. [{}] {}\n", i + 1, step.state, step.detail));
    }
    for error in &trace.errors {
        out.push_str(&format!("  ❌ {}: {} ({})\n", error.kind, error.message, error.context));
    }

    out
}

pub async fn run_llm(need: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if !config.has_api_key() && config.default_provider != "ollama" {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    PROPUESTAS_API_KEY   (generic)");
        eprintln!("    OPENAI_API_KEY       (for OpenAI direct)");
        eprintln!("    OPENROUTER_API_KEY   (for OpenRouter)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_path().display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let router = propuestas_providers::build_from_config(&config)?;
    let provider = router.default().ok_or("No default provider configured")?;
    let model = propuestas_providers::model_for(&config, router.default_name());

    let writer = LlmProposalWriter::new(provider, model)
        .with_temperature(config.default_temperature)
        .with_max_tokens(config.default_max_tokens)
        .with_min_need_chars(config.generator.min_need_chars);

    eprint!("  Generando con {}...", writer.model());
    let document = writer.write(need).await;
    eprint!("\r{}\r", " ".repeat(60));

    println!("{}", document?);
    Ok(())
}
