//! `propuestas areas`: List the registered business areas.

use propuestas_config::AppConfig;
use propuestas_templates::TemplateRegistry;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    print!("{}", render(&config.template_registry()));
    Ok(())
}

fn render(registry: &TemplateRegistry) -> String {
    let width = registry.iter().map(|t| t.id.len()).max().unwrap_or(0);
    let mut out = format!("📚 {} áreas disponibles\n\n", registry.len());
    for template in registry.iter() {
        out.push_str(&format!(
            "  {:<width$}  {}\n      {}\n",
            template.id, template.name, template.description
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_builtin_area() {
        let listing = render(&propuestas_templates::default_registry());
        assert!(listing.starts_with("📚 10 áreas disponibles"));
        assert!(listing.contains("fintech"));
        assert!(listing.contains("Transporte y Logística"));
        assert!(listing.find("fintech").unwrap() < listing.find("combustibles").unwrap());
    }
}
