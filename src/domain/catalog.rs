// Canonical Terrigo content: brand palette, service list and contact details.

use crate::domain::icon::Icon;
use crate::domain::model::{
    AccentColor, AppTheme, Appearance, Brand, ColorRole, Contact, Radius, ServiceCatalog,
    ServiceDescriptor, Theme,
};

impl Default for Theme {
    fn default() -> Self {
        let colors = [
            (ColorRole::Primary, "#007BFF"),
            (ColorRole::Secondary, "#00CFFF"),
            (ColorRole::Accent, "#00D29E"),
            (ColorRole::Dark, "#0C1220"),
            (ColorRole::Light, "#FFFFFF"),
            (ColorRole::Gray, "#6C757D"),
        ]
        .into_iter()
        .map(|(role, hex)| (role.as_str().to_string(), hex.to_string()))
        .collect();

        Theme::new(
            colors,
            vec![
                "Inter".to_string(),
                "system-ui".to_string(),
                "sans-serif".to_string(),
            ],
        )
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        ServiceCatalog::new(vec![
            ServiceDescriptor::new(
                "Observatorios de Datos",
                "Plataformas avanzadas para la visualización y análisis de datos territoriales en tiempo real.",
                Icon::BarChart3,
            ),
            ServiceDescriptor::new(
                "Decisiones Basadas en Datos",
                "Herramientas de inteligencia artificial para optimizar la toma de decisiones públicas.",
                Icon::Brain,
            ),
            ServiceDescriptor::new(
                "Automatización de Contratación",
                "Sistemas inteligentes para agilizar y transparentar los procesos de contratación estatal.",
                Icon::FileText,
            ),
            ServiceDescriptor::new(
                "Transformación Digital",
                "Modernización integral de procesos y servicios en entidades públicas.",
                Icon::Smartphone,
            ),
            ServiceDescriptor::new(
                "Inteligencia Artificial",
                "Soluciones de IA aplicadas a la gestión pública y análisis predictivo.",
                Icon::Cpu,
            ),
            ServiceDescriptor::new(
                "Integración de Plataformas",
                "Conectamos CiviData, UnityGov y TerriGov para un ecosistema digital completo.",
                Icon::Network,
            ),
        ])
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Terrigo S.A.S.".to_string(),
            tagline: "Innovación y Desarrollo para el Territorio".to_string(),
            logo_src: "/logo.png".to_string(),
            logo_alt: "Terrigo Logo".to_string(),
            copyright_year: 2024,
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: "contacto@terrigo.com".to_string(),
            whatsapp_number: "573207803362".to_string(),
            whatsapp_display: "+57 320 780 3362".to_string(),
            location: "Colombia".to_string(),
            linkedin_url: "#".to_string(),
            github_url: "#".to_string(),
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            appearance: Appearance::Light,
            has_background: true,
            radius: Radius::Medium,
            accent: AccentColor::Blue,
        }
    }
}
