//! The ten built-in area templates, in registration order.
//!
//! Order matters: it is the order `listar_areas` reports and the order area
//! detection walks when breaking ties.

use crate::record::TemplateRecord;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Build the built-in templates.
pub fn templates() -> Vec<TemplateRecord> {
    vec![
        fintech(),
        app_moviles(),
        blockchain(),
        arquitectura(),
        seguros(),
        medica(),
        telecomunicaciones(),
        transporte(),
        almacenamiento(),
        combustibles(),
    ]
}

fn fintech() -> TemplateRecord {
    TemplateRecord {
        id: "fintech".into(),
        name: "Fintech".into(),
        description: "Soluciones financieras tecnológicas".into(),
        problem: "Los procesos financieros tradicionales son lentos, manuales y propensos a errores, carentes de automatización y seguridad.".into(),
        solution: "Plataforma financiera digital con procesamiento en tiempo real, cumplimiento normativo automático y APIs abiertas.".into(),
        architecture: "Arquitectura de microservicios con API Gateway, servicios de procesamiento de pagos, módulo de cumplimiento (KYC/AML), base de datos transaccional (PostgreSQL), caché (Redis), cola de mensajes (Kafka) para procesamiento asíncrono, y auditoría blockchain para trazabilidad.".into(),
        risks: strings(&[
            "Cumplimiento regulatorio - Mitigación: Integración con servicios de compliance y auditoría continua",
            "Fraude financiero - Mitigación: Sistemas de detección de anomalías con ML y autenticación multifactor",
            "Disponibilidad 24/7 - Mitigación: Arquitectura redundante con auto-scaling y disaster recovery",
            "Seguridad de datos financieros - Mitigación: Encriptación en tránsito y reposo, tokenización de datos sensibles",
        ]),
        technologies: strings(&[
            "Python/Django",
            "PostgreSQL",
            "Redis",
            "Kafka",
            "Kubernetes",
            "AWS/GCP",
            "Stripe API",
        ]),
        keywords: strings(&[
            "pagos",
            "banco",
            "transacciones",
            "crédito",
            "préstamo",
            "tarjeta",
            "banca",
            "finanzas",
            "criptomoneda",
        ]),
        components: strings(&[
            "Procesador de pagos en tiempo real",
            "Módulo de KYC/AML",
            "Dashboard de análisis financiero",
        ]),
        extra_risks: strings(&[
            "Adaptación al mercado crypto - Mitigación: Monitoreo de tendencias y regulación",
        ]),
    }
}

fn app_moviles() -> TemplateRecord {
    TemplateRecord {
        id: "app_moviles".into(),
        name: "Aplicaciones Móviles".into(),
        description: "Desarrollo de apps iOS y Android".into(),
        problem: "Las aplicaciones existentes son lentas, no ofrecen experiencia de usuario óptima, y no se integran con otros sistemas empresariales.".into(),
        solution: "Aplicación móvil nativa o multiplataforma con arquitectura moderna, sincronización offline, y backend escalable.".into(),
        architecture: "Frontend con Flutter/React Native para multiplataforma o Swift/Kotlin nativo. Backend como servicio (Firebase/AWS Amplify) o API REST/GraphQL propia. Sincronización offline con SQLite/Realm, notificaciones push (FCM), y analytics integrado.".into(),
        risks: strings(&[
            "Fragmentación de dispositivos - Mitigación: Testing en múltiples dispositivos y versiones de OS",
            "Experiencia de usuario inconsistente - Mitigación: Diseño responsive y guías de estilo rigurosas",
            "Rendimiento en dispositivos de gama baja - Mitigación: Optimización de assets y código, lazy loading",
            "Actualizaciones frecuentes de OS - Mitigación: Actualizaciones proactivas del SDK y testing temprano",
        ]),
        technologies: strings(&[
            "Flutter",
            "React Native",
            "Swift",
            "Kotlin",
            "Firebase",
            "GraphQL",
            "Realm",
        ]),
        keywords: strings(&[
            "app",
            "móvil",
            "ios",
            "android",
            "smartphone",
            "aplicación",
            "usuario",
            "interfaz",
        ]),
        components: strings(&[
            "App móvil nativa/multiplataforma",
            "Backend API REST/GraphQL",
            "Sistema de notificaciones push",
        ]),
        extra_risks: strings(&[
            "Retención de usuarios - Mitigación: Analytics y engagement features",
        ]),
    }
}

fn blockchain() -> TemplateRecord {
    TemplateRecord {
        id: "blockchain".into(),
        name: "Blockchain".into(),
        description: "Soluciones basadas en tecnología blockchain".into(),
        problem: "Falta de transparencia, trazabilidad insuficiente, costos elevados en intermediarios, y falta de confianza entre partes.".into(),
        solution: "Plataforma blockchain para gestión de activos digitales, contratos inteligentes, y trazabilidad inmutable.".into(),
        architecture: "Red blockchain (Ethereum/Polygon/Hyperledger según caso de uso), smart contracts en Solidity/Rust, oráculos para datos externos (Chainlink), almacenamiento descentralizado (IPFS), wallet integration, y dashboard de análisis on-chain.".into(),
        risks: strings(&[
            "Escalabilidad de la blockchain - Mitigación: Layer 2 solutions, sharding, o blockchain permissionada",
            "Regulación incierta - Mitigación: Asesoramiento legal especializado y arquitectura compliant",
            "Volatilidad de criptomonedas - Mitigación: Stablecoins o conversión a fiat inmediata",
            "Seguridad de smart contracts - Mitigación: Auditorías de código, bug bounties, y métodos formales",
        ]),
        technologies: strings(&[
            "Solidity",
            "Ethereum",
            "Polygon",
            "Hyperledger",
            "Web3.js",
            "IPFS",
            "Chainlink",
        ]),
        keywords: strings(&[
            "blockchain",
            "smart contract",
            "token",
            "criptomoneda",
            "descentralizado",
            "web3",
            "nft",
            "defi",
        ]),
        components: strings(&[
            "Smart contracts para automatización",
            "Sistema de tokens",
            "Oráculos para datos externos",
        ]),
        extra_risks: strings(&[
            "Adopción por usuarios - Mitigación: UX simplificada y onboarding guiado",
        ]),
    }
}

fn arquitectura() -> TemplateRecord {
    TemplateRecord {
        id: "arquitectura".into(),
        name: "Arquitectura de Sistemas".into(),
        description: "Diseño y modernización de infraestructura".into(),
        problem: "Sistemas monolíticos difíciles de mantener, acoplamiento fuerte, baja escalabilidad, y tiempos de despliegue lentos.".into(),
        solution: "Modernización a arquitectura de microservicios o serverless con CI/CD, observabilidad completa, y infraestructura como código.".into(),
        architecture: "Contenedores con Docker y orquestación Kubernetes. API Gateway para routing, service mesh (Istio) para comunicación entre servicios, funciones serverless (AWS Lambda/Azure Functions) para cargas variables. Infraestructura con Terraform/Ansible, monitoreo con Prometheus/Grafana, logging centralizado (ELK), y tracing distribuido (Jaeger).".into(),
        risks: strings(&[
            "Complejidad operativa - Mitigación: Documentación exhaustiva, training, y herramientas de gestión",
            "Latencia entre servicios - Mitigación: Comunicación sincrónica vs asincrónica según caso, caching",
            "Gestión de datos distribuidos - Mitigación: Patrones de consistencia eventual, sagas para transacciones",
            "Curva de aprendizaje del equipo - Mitigación: Plan de capacitación y pair programming",
        ]),
        technologies: strings(&[
            "Docker",
            "Kubernetes",
            "Terraform",
            "AWS",
            "Azure",
            "GCP",
            "Istio",
            "Prometheus",
        ]),
        keywords: strings(&[
            "microservicios",
            "serverless",
            "contenedores",
            "docker",
            "kubernetes",
            "cloud",
            "infraestructura",
            "despliegue",
        ]),
        components: strings(&[
            "Contenedores y orquestación",
            "API Gateway",
            "Sistema de observabilidad",
        ]),
        extra_risks: vec![],
    }
}

fn seguros() -> TemplateRecord {
    TemplateRecord {
        id: "seguros".into(),
        name: "Seguros".into(),
        description: "Digitalización del sector asegurador".into(),
        problem: "Los procesos de cotización, suscripción y reclamos son manuales, lentos, y propensos a errores humanos.".into(),
        solution: "Plataforma de seguros digital con automatización de cotizaciones, evaluación de riesgos con IA, y procesamiento de reclamos automatizado.".into(),
        architecture: "Sistema de gestión de pólizas con motor de reglas de negocio (Drools), módulo de tarificación, integración con fuentes de datos externas (historial crediticio, dispositivos IoT), proceso de claims con workflow automatizado, y portal de autoservicio para clientes.".into(),
        risks: strings(&[
            "Cumplimiento regulatorio de seguros - Mitigación: Motor de reglas validado por actuaristas, auditorías",
            "Fraude en reclamos - Mitigación: Detección de anomalías con ML, investigación basada en riesgo",
            "Integración con sistemas legacy - Mitigación: Capas de abstracción, migración gradual",
            "Pricing inadecuado - Mitigación: Modelos actuariales validados, revisión periódica",
        ]),
        technologies: strings(&[
            "Java/Spring",
            "PostgreSQL",
            "Redis",
            "Drools",
            "Python/ML",
            "Camunda",
        ]),
        keywords: strings(&[
            "póliza",
            "reclamo",
            "siniestro",
            "cotización",
            "prima",
            "asegurado",
            "riesgo",
            "cobertura",
        ]),
        components: vec![],
        extra_risks: vec![],
    }
}

fn medica() -> TemplateRecord {
    TemplateRecord {
        id: "medica".into(),
        name: "Salud / Médica".into(),
        description: "Digitalización del sector salud".into(),
        problem: "Fragmentación de información del paciente, procesos administrativos lentos, falta de interoperabilidad entre sistemas.".into(),
        solution: "Sistema de gestión hospitalaria (HIS) integrado con EHR/EMR, telemedicina, y cumplimiento HIPAA.".into(),
        architecture: "EHR interoperable con estándares HL7 FHIR, sistema de citas y gestión de pacientes, módulo de telemedicina (WebRTC), integración con dispositivos médicos (IoT), motor de reglas clínicas, y portal de resultados para pacientes.".into(),
        risks: strings(&[
            "Protección de datos de salud (HIPAA/GDPR) - Mitigación: Encriptación, controles de acceso, auditorías",
            "Interoperabilidad de sistemas - Mitigación: Estándares HL7 FHIR, APIs RESTful",
            "Disponibilidad crítica - Mitigación: Alta disponibilidad 99.99%, redundancia",
            "Errores médicos por software - Mitigación: Validaciones estrictas, testing clínico",
        ]),
        technologies: strings(&[
            "HL7 FHIR",
            "Python/Django",
            "React",
            "PostgreSQL",
            "WebRTC",
            "IoMT",
        ]),
        keywords: strings(&[
            "paciente",
            "historial clínico",
            "cita",
            "médico",
            "diagnóstico",
            "receta",
            "hospital",
            "telemedicina",
        ]),
        components: strings(&[
            "Sistema de historial clínico (EHR)",
            "Módulo de telemedicina",
            "Portal de pacientes",
        ]),
        extra_risks: vec![],
    }
}

fn telecomunicaciones() -> TemplateRecord {
    TemplateRecord {
        id: "telecomunicaciones".into(),
        name: "Telecomunicaciones".into(),
        description: "Gestión de redes y servicios de telecom".into(),
        problem: "Gestión manual de red ineficiente, falta de visibilidad en tiempo real, y tiempos de resolución de fallas elevados.".into(),
        solution: "Plataforma de gestión de red (OSS/BSS) con monitoreo en tiempo real, automatización de provisioning, y analytics predictivo.".into(),
        architecture: "Sistema de gestión de red (OSS) con SNMP/netconf monitoring, orchestration (ONAP), BSS para gestión de suscriptores y facturación, CRM integrado, mediation layer para conciliación de CDR, y dashboard de analytics en tiempo real.".into(),
        risks: strings(&[
            "Disponibilidad de red crítica - Mitigación: Redundancia geográficamente distribuida, failover automático",
            "Volumen masivo de datos (CDRs, logs) - Mitigación: Procesamiento streaming, almacenamiento distribuido",
            "Integración con equipos legacy - Mitigación: Adaptadores, migración gradual",
            "Cumplimiento regulatorio de telecomunicaciones - Mitigación: Auditorías, logging inmutable",
        ]),
        technologies: strings(&[
            "Java",
            "PostgreSQL",
            "Kafka",
            "SNMP",
            "ONAP",
            "Kubernetes",
            "Prometheus",
        ]),
        keywords: strings(&[
            "red",
            "operador",
            "servicio",
            "facturación",
            "cdr",
            "backhaul",
            "fibra",
            "5g",
        ]),
        components: strings(&[
            "OSS/BSS integrado",
            "Sistema de provisioning",
            "Analytics en tiempo real",
        ]),
        extra_risks: vec![],
    }
}

fn transporte() -> TemplateRecord {
    TemplateRecord {
        id: "transporte".into(),
        name: "Transporte y Logística".into(),
        description: "Gestión de flotas y logística".into(),
        problem: "Rutas ineficientes, falta de visibilidad de carga, tiempos de entrega impredecibles, y costos operativos altos.".into(),
        solution: "Plataforma de gestión de transporte (TMS) con optimización de rutas en tiempo real, tracking de flota, y visibilidad de extremo a extremo.".into(),
        architecture: "Módulo de optimización de rutas con algoritmos de ML, sistema de tracking GPS/IoT, gestión de flotas con conductor app, warehouse management integrado, visibilidad de carga en tiempo real, y analytics predictivo de demanda.".into(),
        risks: strings(&[
            "Dependencia de datos de ubicación - Mitigación: Múltiples fuentes de GPS, offline capability",
            "Optimización de rutas complejas - Mitigación: Algoritmos probados, fallback a rutas experimentadas",
            "Integración con operadores logísticos - Mitigación: APIs estándar, EDI",
            "Cambios last-mile - Mitigación: Flexibilidad en ventana de entrega, comunicación proactiva",
        ]),
        technologies: strings(&[
            "Python",
            "PostgreSQL",
            "Redis",
            "GraphHopper",
            "AWS IoT",
            "React Native",
        ]),
        keywords: strings(&[
            "ruta",
            "flota",
            "camión",
            "entrega",
            "carga",
            "logística",
            "tracking",
            "conductor",
        ]),
        components: strings(&[
            "TMS con optimización de rutas",
            "Tracking GPS",
            "Gestión de flotas",
        ]),
        extra_risks: vec![],
    }
}

fn almacenamiento() -> TemplateRecord {
    TemplateRecord {
        id: "almacenamiento".into(),
        name: "Almacenamiento y Bodegaje".into(),
        description: "Gestión de inventarios y almacenes".into(),
        problem: "Inventario desactualizado, ubicación ineficiente de productos, picking lento, y falta de trazabilidad.".into(),
        solution: "Sistema de gestión de almacén (WMS) con código de barras/RFID, optimización de ubicaciones, y automatización de picking.".into(),
        architecture: "WMS con gestión de ubicaciones dinámicas, módulo de inbound/receiving, optimización de ubicaciones con ML, sistema de picking (wave/pick-to-light/voice), integración con robots AMR/AGV, y analytics de rotación de inventario.".into(),
        risks: strings(&[
            "Inventario desincronizado - Mitigación: Conteos cíclicos, auditorías aleatorias",
            "Dependencia de hardware (scanners, RFID) - Mitigación: Redundancia, fallback manual",
            "Curva de aprendizaje del personal - Mitigación: Training intensivo, UI intuitiva",
            "Integración con ERP - Mitigación: Middleware, validación de datos bidireccional",
        ]),
        technologies: strings(&["Java", "PostgreSQL", "RFID", "Barcode", "Kafka", "React", "IoT"]),
        keywords: strings(&[
            "bodega",
            "inventario",
            "picking",
            "ubicación",
            "producto",
            "stock",
            "recepción",
            "expedición",
        ]),
        components: strings(&[
            "WMS con RFID",
            "Optimización de ubicaciones",
            "Sistema de picking automatizado",
        ]),
        extra_risks: vec![],
    }
}

fn combustibles() -> TemplateRecord {
    TemplateRecord {
        id: "combustibles".into(),
        name: "Combustibles y Energía".into(),
        description: "Gestión de estaciones de servicio y distribución".into(),
        problem: "Control de inventario de combustibles ineficiente, falta de visibilidad de tanques, y procesos de conciliación manual.".into(),
        solution: "Sistema de gestión de estaciones de servicio con monitoreo de tanques en tiempo real, automatización de pedidos, y conciliación automática.".into(),
        architecture: "Sistema de gestión de estaciones con módulo de tanques (ATG integration), control de dispensarios (fuel management), gestión de inventarios con forecasting, módulo de facturación y pos, integración con sistemas corporativos (ERP), y analytics de consumo.".into(),
        risks: strings(&[
            "Fugas o robos de combustible - Mitigación: Monitoreo en tiempo real, alertas automáticas",
            "Cumplimiento ambiental - Mitigación: Monitorización de vapores, reportes regulatorios",
            "Dependencia de proveedores de combustible - Mitigación: Múltiples proveedores, contratos",
            "Fallos en hardware de medición - Mitigación: Calibración periódica, mantenimiento preventivo",
        ]),
        technologies: strings(&["C#/.NET", "SQL Server", "IoT", "Modbus", "REST API", "Azure"]),
        keywords: strings(&[
            "combustible",
            "gasolina",
            "diésel",
            "tanque",
            "estación",
            "dispensario",
            "inventario",
            "bomba",
        ]),
        components: strings(&[
            "Monitoreo de tanques (ATG)",
            "Control de dispensarios",
            "Gestión de inventario",
        ]),
        extra_risks: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_has_four_base_risks() {
        for template in templates() {
            assert_eq!(template.risks.len(), 4, "{}", template.id);
        }
    }

    #[test]
    fn only_three_areas_carry_extra_risks() {
        let with_extras: Vec<String> = templates()
            .into_iter()
            .filter(|t| !t.extra_risks.is_empty())
            .map(|t| t.id)
            .collect();
        assert_eq!(with_extras, vec!["fintech", "app_moviles", "blockchain"]);
    }

    #[test]
    fn seguros_has_no_suggested_components() {
        let without: Vec<String> = templates()
            .into_iter()
            .filter(|t| t.components.is_empty())
            .map(|t| t.id)
            .collect();
        assert_eq!(without, vec!["seguros"]);
    }

    #[test]
    fn keywords_are_lowercase() {
        for template in templates() {
            for keyword in &template.keywords {
                assert_eq!(keyword, &keyword.to_lowercase(), "{}", template.id);
            }
        }
    }
}
