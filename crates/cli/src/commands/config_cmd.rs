//! `propuestas config`: Configuration management commands.

use propuestas_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let warnings = warnings(&config);
            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Areas:     {}", config.template_registry().len());
            println!("   Provider:  {}", config.default_provider);
            println!("   Model:     {}", config.default_model);
            println!(
                "   Gateway:   {}:{}",
                config.gateway.host, config.gateway.port
            );
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

/// Non-fatal findings on an otherwise valid config.
fn warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if !config.has_api_key() {
        warnings.push(
            "No API key set (only needed for --llm; set PROPUESTAS_API_KEY or OPENAI_API_KEY)"
                .to_string(),
        );
    }

    if config.gateway.host == "0.0.0.0" {
        warnings.push("Gateway bound to 0.0.0.0 (reachable from the network)".to_string());
    }

    let mut seen = std::collections::HashSet::new();
    for template in &config.templates {
        if !seen.insert(template.id.as_str()) {
            warnings.push(format!(
                "Template '{}' declared more than once; the last one wins",
                template.id
            ));
        }
    }

    warnings
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    redact(&mut config);
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

fn redact(config: &mut AppConfig) {
    if config.api_key.is_some() {
        config.api_key = Some("***".into());
    }
    for provider in config.providers.values_mut() {
        if provider.api_key.is_some() {
            provider.api_key = Some("***".into());
        }
    }
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
