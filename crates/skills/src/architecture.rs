//! Canned architecture blueprints: component catalogs, ASCII diagrams and a
//! Markdown component summary.

use crate::SkillError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Architecture style a blueprint is requested for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ArchitectureStyle {
    Microservicios,
    Serverless,
    EventDriven,
    Monolito,
    Hibrida,
}

impl ArchitectureStyle {
    pub const ALL: [ArchitectureStyle; 5] = [
        Self::Microservicios,
        Self::Serverless,
        Self::EventDriven,
        Self::Monolito,
        Self::Hibrida,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Microservicios => "microservicios",
            Self::Serverless => "serverless",
            Self::EventDriven => "event_driven",
            Self::Monolito => "monolito",
            Self::Hibrida => "hibrida",
        }
    }
}

impl fmt::Display for ArchitectureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchitectureStyle {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s.trim())
            .ok_or_else(|| SkillError::UnknownStyle(s.to_string()))
    }
}

/// One building block of a blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureComponent {
    /// Stable key, e.g. `api_gateway` or `servicio_pagos`.
    #[serde(rename = "clave")]
    pub key: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tecnologias", default)]
    pub technologies: Vec<String>,
    #[serde(rename = "dependencias", default)]
    pub dependencies: Vec<String>,
    #[serde(rename = "responsabilidad", default)]
    pub responsibility: String,
}

impl ArchitectureComponent {
    fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        kind: &str,
        description: impl Into<String>,
        technologies: &[&str],
        responsibility: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind: kind.to_string(),
            description: description.into(),
            technologies: technologies.iter().map(|t| (*t).to_string()).collect(),
            dependencies: Vec::new(),
            responsibility: responsibility.into(),
        }
    }
}

/// A complete blueprint for one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitecturePlan {
    #[serde(rename = "tipo_arquitectura")]
    pub style: ArchitectureStyle,
    #[serde(rename = "componentes")]
    pub components: Vec<ArchitectureComponent>,
    #[serde(rename = "diagrama")]
    pub diagram: String,
    #[serde(rename = "resumen")]
    pub summary: String,
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Microservices catalog: gateway, mesh, one component per service, then
/// data, messaging and observability.
pub fn microservices_components(services: &[String]) -> Vec<ArchitectureComponent> {
    let mut components = vec![
        ArchitectureComponent::new(
            "api_gateway",
            "API Gateway",
            "gateway",
            "Punto de entrada único para todas las APIs",
            &["Kong", "AWS API Gateway", "Nginx"],
            "Routing, autenticación, rate limiting",
        ),
        ArchitectureComponent::new(
            "service_mesh",
            "Service Mesh",
            "infraestructura",
            "Comunicación entre servicios",
            &["Istio", "Linkerd", "Envoy"],
            "mTLS, observabilidad, balanceo",
        ),
    ];

    components.extend(services.iter().map(|service| {
        ArchitectureComponent::new(
            format!("servicio_{service}"),
            format!("Servicio {}", title_case(service)),
            "business",
            format!("Lógica de negocio para {service}"),
            &["Python/FastAPI", "Node.js/Express", "Go"],
            format!("Gestión de {service}"),
        )
    }));

    components.extend([
        ArchitectureComponent::new(
            "base_datos",
            "Capa de Datos",
            "persistencia",
            "Almacenamiento de datos",
            &["PostgreSQL", "MongoDB", "Redis"],
            "Persistencia y caché",
        ),
        ArchitectureComponent::new(
            "mensajeria",
            "Sistema de Mensajería",
            "async",
            "Comunicación asíncrona",
            &["Kafka", "RabbitMQ", "AWS SQS"],
            "Eventos, colas, procesamiento async",
        ),
        ArchitectureComponent::new(
            "observabilidad",
            "Observabilidad",
            "infraestructura",
            "Monitoreo y logging",
            &["Prometheus", "Grafana", "ELK", "Jaeger"],
            "Métricas, logs, tracing",
        ),
    ]);

    components
}

/// Serverless catalog: gateway, storage, queue, one component per function,
/// then CDN.
pub fn serverless_components(functions: &[String]) -> Vec<ArchitectureComponent> {
    let mut components = vec![
        ArchitectureComponent::new(
            "http_gateway",
            "HTTP Gateway",
            "gateway",
            "Trigger HTTP para funciones",
            &["AWS API Gateway", "Cloud Functions", "Azure Functions"],
            "Enrutamiento HTTP",
        ),
        ArchitectureComponent::new(
            "storage",
            "Storage Layer",
            "persistencia",
            "Almacenamiento de archivos y datos",
            &["S3", "Azure Blob", "DynamoDB"],
            "Persistencia",
        ),
        ArchitectureComponent::new(
            "queue",
            "Message Queue",
            "async",
            "Colas para procesamiento asíncrono",
            &["AWS SQS", "Azure Queue", "Google Pub/Sub"],
            "Procesamiento async",
        ),
    ];

    components.extend(functions.iter().map(|function| {
        ArchitectureComponent::new(
            format!("funcion_{function}"),
            format!("Función {}", title_case(function)),
            "compute",
            format!("Función serverless para {function}"),
            &["AWS Lambda", "Azure Functions", "Google Cloud Functions"],
            format!("Ejecutar lógica de {function}"),
        )
    }));

    components.push(ArchitectureComponent::new(
        "cdn",
        "CDN",
        "infraestructura",
        "Distribución de contenido estático",
        &["CloudFront", "Azure CDN", "Cloud CDN"],
        "Entrega rápida de contenido",
    ));

    components
}

const MICROSERVICES_DIAGRAM: &str = r#"```
┌─────────────────────────────────────────────────────────────┐
│                          CLIENTES                           │
│                (Web, Mobile, API Consumers)                 │
└──────────────────────────────┬──────────────────────────────┘
                               │
                               ▼
┌─────────────────────────────────────────────────────────────┐
│                         API GATEWAY                         │
│                  (Kong / AWS API Gateway)                   │
└──────────────────────────────┬──────────────────────────────┘
                               │
             ┌─────────────────┼─────────────────┐
             ▼                 ▼                 ▼
      ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
      │ Servicio A  │   │ Servicio B  │   │ Servicio C  │
      │   (Core)    │   │ (Business)  │   │  (Support)  │
      └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
             └─────────────────┼─────────────────┘
                               ▼
┌─────────────────────────────────────────────────────────────┐
│                        SERVICE MESH                         │
│                     (Istio / Linkerd)                       │
└──────────────────────────────┬──────────────────────────────┘
                               │
             ┌─────────────────┼─────────────────┐
             ▼                 ▼                 ▼
      ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
      │ PostgreSQL  │   │    Redis    │   │    Kafka    │
      │   (Data)    │   │   (Cache)   │   │  (Events)   │
      └─────────────┘   └─────────────┘   └─────────────┘
```"#;

const SERVERLESS_DIAGRAM: &str = r#"```
┌─────────────────────────────────────────────────────────────┐
│                          USUARIOS                           │
│                (Web, Mobile, IoT Devices)                   │
└──────────────────────────────┬──────────────────────────────┘
                               ▼
┌─────────────────────────────────────────────────────────────┐
│                        CDN / STATIC                         │
│                     (CloudFront / S3)                       │
└──────────────────────────────┬──────────────────────────────┘
                               ▼
┌─────────────────────────────────────────────────────────────┐
│                         API GATEWAY                         │
│                     (Lambda Triggers)                       │
└──────┬───────────────────────┬───────────────────────┬──────┘
       ▼                       ▼                       ▼
 ┌──────────┐            ┌──────────┐            ┌──────────┐
 │  Lambda  │            │  Lambda  │            │  Lambda  │
 │  Func A  │            │  Func B  │            │  Func C  │
 └────┬─────┘            └────┬─────┘            └────┬─────┘
      └──────────────┬────────┴─────────┬─────────────┘
                     ▼                  ▼
               ┌──────────┐       ┌──────────┐
               │ DynamoDB │       │    S3    │
               │ (NoSQL)  │       │ (Files)  │
               └──────────┘       └──────────┘
```"#;

const EVENT_DRIVEN_DIAGRAM: &str = r#"```
┌─────────────────────────────────────────────────────────────┐
│                         PRODUCTORES                         │
│                (API, Webhooks, IoT, Mobile)                 │
└──────────────────────────────┬──────────────────────────────┘
                               ▼
┌─────────────────────────────────────────────────────────────┐
│                      KAFKA / RABBITMQ                       │
│                      (Message Broker)                       │
└────────┬───────────────────┬───────────────────┬────────────┘
         ▼                   ▼                   ▼
  ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
  │  Consumer   │     │  Consumer   │     │  Consumer   │
  │  (Orders)   │     │   (Notif)   │     │ (Analytics) │
  └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
         ▼                   ▼                   ▼
  ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
  │ PostgreSQL  │     │    Redis    │     │  Snowflake  │
  │   (OLTP)    │     │   (Cache)   │     │   (OLAP)    │
  └─────────────┘     └─────────────┘     └─────────────┘
```"#;

/// Text returned for styles without a diagram.
pub const NO_DIAGRAM: &str = "Diagrama no disponible";

/// ASCII box diagram for `style`, fenced as a Markdown code block.
pub fn diagram(style: ArchitectureStyle) -> &'static str {
    match style {
        ArchitectureStyle::Microservicios => MICROSERVICES_DIAGRAM,
        ArchitectureStyle::Serverless => SERVERLESS_DIAGRAM,
        ArchitectureStyle::EventDriven => EVENT_DRIVEN_DIAGRAM,
        ArchitectureStyle::Monolito | ArchitectureStyle::Hibrida => NO_DIAGRAM,
    }
}

/// Markdown summary listing every component.
pub fn components_summary(components: &[ArchitectureComponent]) -> String {
    let mut summary = String::from("## Resumen de Componentes\n\n");

    for component in components {
        summary.push_str(&format!("### {}\n", component.name));
        summary.push_str(&format!("- **Tipo**: {}\n", component.kind));
        summary.push_str(&format!("- **Descripción**: {}\n", component.description));
        if !component.technologies.is_empty() {
            summary.push_str(&format!(
                "- **Tecnologías**: {}\n",
                component.technologies.join(", ")
            ));
        }
        if !component.responsibility.is_empty() {
            summary.push_str(&format!(
                "- **Responsabilidad**: {}\n",
                component.responsibility
            ));
        }
        summary.push('\n');
    }

    summary
}

/// Blueprint for `style`.
///
/// `services` names the business services (microservices) or functions
/// (serverless); other styles carry no component catalog.
pub fn full_architecture(style: ArchitectureStyle, services: &[String]) -> ArchitecturePlan {
    let components = match style {
        ArchitectureStyle::Microservicios => microservices_components(services),
        ArchitectureStyle::Serverless => serverless_components(services),
        _ => Vec::new(),
    };

    ArchitecturePlan {
        style,
        summary: components_summary(&components),
        diagram: diagram(style).to_string(),
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn style_parses_and_displays() {
        for style in ArchitectureStyle::ALL {
            assert_eq!(style.to_string().parse::<ArchitectureStyle>().unwrap(), style);
        }
        assert_eq!(
            "event_driven".parse::<ArchitectureStyle>().unwrap(),
            ArchitectureStyle::EventDriven
        );
        assert!(matches!(
            "cliente_servidor".parse::<ArchitectureStyle>(),
            Err(SkillError::UnknownStyle(_))
        ));
    }

    #[test]
    fn microservices_catalog_order() {
        let keys: Vec<String> = microservices_components(&services(&["pagos", "usuarios"]))
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "api_gateway",
                "service_mesh",
                "servicio_pagos",
                "servicio_usuarios",
                "base_datos",
                "mensajeria",
                "observabilidad",
            ]
        );
    }

    #[test]
    fn service_names_are_title_cased() {
        let components = microservices_components(&services(&["gestión de pedidos"]));
        let service = &components[2];
        assert_eq!(service.name, "Servicio Gestión De Pedidos");
        assert_eq!(service.kind, "business");
        assert_eq!(service.responsibility, "Gestión de gestión de pedidos");
    }

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(title_case("pagos_online"), "Pagos_Online");
        assert_eq!(title_case("API"), "Api");
    }

    #[test]
    fn serverless_catalog_order() {
        let keys: Vec<String> = serverless_components(&services(&["facturar"]))
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(
            keys,
            vec!["http_gateway", "storage", "queue", "funcion_facturar", "cdn"]
        );
    }

    #[test]
    fn diagrams_exist_for_three_styles() {
        assert!(diagram(ArchitectureStyle::Microservicios).contains("SERVICE MESH"));
        assert!(diagram(ArchitectureStyle::Serverless).contains("DynamoDB"));
        assert!(diagram(ArchitectureStyle::EventDriven).contains("KAFKA / RABBITMQ"));
        assert_eq!(diagram(ArchitectureStyle::Monolito), NO_DIAGRAM);
        assert_eq!(diagram(ArchitectureStyle::Hibrida), NO_DIAGRAM);
    }

    #[test]
    fn summary_format() {
        let mut component = ArchitectureComponent::new("x", "Cola", "async", "Colas", &[], "");
        let summary = components_summary(std::slice::from_ref(&component));
        assert_eq!(
            summary,
            "## Resumen de Componentes\n\n### Cola\n- **Tipo**: async\n- **Descripción**: Colas\n\n"
        );

        component.technologies = vec!["SQS".into(), "Kafka".into()];
        component.responsibility = "Eventos".into();
        let summary = components_summary(&[component]);
        assert!(summary.contains("- **Tecnologías**: SQS, Kafka\n- **Responsabilidad**: Eventos\n"));
    }

    #[test]
    fn full_architecture_for_monolith_has_no_components() {
        let plan = full_architecture(ArchitectureStyle::Monolito, &services(&["pagos"]));
        assert!(plan.components.is_empty());
        assert_eq!(plan.summary, "## Resumen de Componentes\n\n");
        assert_eq!(plan.diagram, NO_DIAGRAM);
    }

    #[test]
    fn plan_serializes_spanish_keys() {
        let plan = full_architecture(ArchitectureStyle::Serverless, &[]);
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["tipo_arquitectura"], "serverless");
        assert_eq!(value["componentes"].as_array().unwrap().len(), 4);
        assert_eq!(value["componentes"][0]["nombre"], "HTTP Gateway");
        assert!(value["resumen"].as_str().unwrap().contains("### CDN"));
    }
}
