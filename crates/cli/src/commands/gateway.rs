//! `propuestas gateway`: Start the HTTP API server.

use propuestas_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📝 Propuestas Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Stored traces: up to {}", config.gateway.max_stored_traces);

    propuestas_gateway::start(config).await?;

    Ok(())
}
