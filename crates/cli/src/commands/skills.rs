//! `propuestas architecture` and `propuestas plan`: Architecture and
//! orchestration skills.

use propuestas_skills::{ArchitecturePlan, ArchitectureStyle, OrchestrationPattern, hybrid_plan};

pub async fn architecture(
    style: &str,
    services: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let style: ArchitectureStyle = style.parse()?;
    let plan = propuestas_skills::full_architecture(style, &services);
    print!("{}", render_architecture(&plan));
    Ok(())
}

pub async fn plan(
    need: &str,
    style: &str,
    pattern: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let style: ArchitectureStyle = style.parse()?;
    let pattern: OrchestrationPattern = pattern.parse()?;

    let plan = hybrid_plan(need, style, pattern);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn render_architecture(plan: &ArchitecturePlan) -> String {
    format!(
        "# Arquitectura {}\n\n{}\n\n{}",
        plan.style, plan.diagram, plan.summary
    )
}
