//! `propuestas status`: Show current settings.

use propuestas_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let registry = config.template_registry();

    println!("📝 Propuestas Status");
    println!("====================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Areas:        {} ({} from config)", registry.len(), config.templates.len());
    println!("  Min. need:    {} chars", config.generator.min_need_chars);
    println!("  Trace:        {}", if config.generator.include_trace { "included" } else { "omitted" });
    println!("  Provider:     {}", config.default_provider);
    println!("  Model:        {}", config.default_model);
    println!("  API key:      {}", if config.has_api_key() { "set" } else { "missing" });
    println!("  Gateway:      {}:{}", config.gateway.host, config.gateway.port);

    if config.has_api_key() {
        let router = propuestas_providers::build_from_config(&config)?;
        if let Some(provider) = router.default() {
            let reachable = provider.health_check().await.unwrap_or(false);
            println!(
                "  LLM API:      {}",
                if reachable { "reachable" } else { "unreachable" }
            );
        }
    }

    if AppConfig::config_path().exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file: run `propuestas onboard` first");
    }

    Ok(())
}
