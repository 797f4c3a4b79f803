//! Fixed studio catalog: plans, quote services and add-on products
//!
//! Prices are whole US dollars. Lookups by identifier return a
//! [`CatalogError`] instead of silently yielding nothing, so callers decide
//! whether a missing id is ignorable.

use serde::Serialize;

/// Studio inbox shown on the site
pub const STUDIO_EMAIL: &str = "framehouselatam@gmail.com";

/// Catalog lookup failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Unknown option {option} for service {service}")]
    UnknownOption { service: String, option: String },
}

/// A subscription plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    /// Name used in quotes and the plan selector
    pub name: &'static str,
    /// Uppercase headline used in the plans showcase
    pub headline: &'static str,
    pub price: u32,
    pub featured: bool,
    /// Short deliverable summary ("12 videos/mes")
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

impl Plan {
    /// Label for the plan selector, e.g. "Plan Estudio - $3,000"
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, super::format::format_usd(self.price))
    }
}

/// A priced choice within a [`Service`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
}

/// A service line offered in the quote picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [ServiceOption],
}

impl Service {
    pub fn option(&self, option_id: &str) -> Result<&ServiceOption, CatalogError> {
        self.options
            .iter()
            .find(|o| o.id == option_id)
            .ok_or_else(|| CatalogError::UnknownOption {
                service: self.id.to_string(),
                option: option_id.to_string(),
            })
    }
}

/// An add-on product for the custom plan builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
}

pub static PLANS: &[Plan] = &[
    Plan {
        id: "basico",
        name: "Plan Básico",
        headline: "NORMAL",
        price: 80,
        featured: false,
        tagline: "4 videos/mes",
        description: "Perfecto para empezar con contenido consistente",
        features: &[
            "4 videos/mes",
            "Edición básica",
            "Captions incluidos",
            "1 revisión",
            "Entrega en 72h",
        ],
    },
    Plan {
        id: "profesional",
        name: "Plan Profesional",
        headline: "PROFESIONAL",
        price: 120,
        featured: true,
        tagline: "12 videos/mes",
        description: "El plan más popular para escalar tu presencia",
        features: &[
            "12 videos/mes",
            "Edición + captions",
            "Guía de publicación",
            "2 revisiones",
            "Entrega en 48h",
        ],
    },
    Plan {
        id: "estudio",
        name: "Plan Estudio",
        headline: "PLAN DE ESTUDIO",
        price: 3000,
        featured: false,
        tagline: "Producción + estrategia",
        description: "Solución completa para marcas serias",
        features: &[
            "Videos ilimitados",
            "Producción full-service",
            "Estrategia de contenido",
            "Revisiones ilimitadas",
            "Soporte prioritario",
        ],
    },
];

pub static PRODUCTS: &[Product] = &[
    Product { id: "prod1", name: "Producto adicional 1", price: 150 },
    Product { id: "prod2", name: "Producto adicional 2", price: 300 },
    Product { id: "prod3", name: "Producto adicional 3", price: 450 },
    Product { id: "prod4", name: "Producto adicional 4", price: 200 },
    Product { id: "prod5", name: "Producto adicional 5", price: 350 },
    Product { id: "prod6", name: "Producto adicional 6", price: 500 },
];

pub static SERVICES: &[Service] = &[
    Service {
        id: "social",
        name: "Contenido Social",
        description: "Videos short-form para redes sociales",
        options: &[
            ServiceOption { id: "social-4", name: "4 videos/mes", price: 299 },
            ServiceOption { id: "social-8", name: "8 videos/mes", price: 499 },
            ServiceOption { id: "social-12", name: "12 videos/mes", price: 699 },
        ],
    },
    Service {
        id: "brand",
        name: "Brand Films",
        description: "Videos cinematográficos de marca",
        options: &[
            ServiceOption { id: "brand-1", name: "1 video corto (30-60s)", price: 399 },
            ServiceOption { id: "brand-2", name: "1 video largo (1-3min)", price: 699 },
            ServiceOption { id: "brand-pack", name: "Pack completo (3 videos)", price: 1499 },
        ],
    },
    Service {
        id: "ads",
        name: "Creative Ads",
        description: "Anuncios optimizados para conversión",
        options: &[
            ServiceOption { id: "ads-3", name: "3 variaciones", price: 199 },
            ServiceOption { id: "ads-6", name: "6 variaciones", price: 349 },
            ServiceOption { id: "ads-10", name: "10 variaciones + testing", price: 549 },
        ],
    },
    Service {
        id: "editing",
        name: "Edición",
        description: "Edición profesional de video",
        options: &[
            ServiceOption { id: "edit-basic", name: "Edición básica", price: 99 },
            ServiceOption { id: "edit-pro", name: "Edición pro + color", price: 199 },
            ServiceOption { id: "edit-premium", name: "Edición premium + motion", price: 349 },
        ],
    },
];

pub fn plan(id: &str) -> Result<&'static Plan, CatalogError> {
    PLANS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::UnknownPlan(id.to_string()))
}

/// The plan highlighted by default in the showcase
pub fn featured_plan() -> &'static Plan {
    PLANS.iter().find(|p| p.featured).unwrap_or(&PLANS[0])
}

pub fn product(id: &str) -> Result<&'static Product, CatalogError> {
    PRODUCTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))
}

pub fn service(id: &str) -> Result<&'static Service, CatalogError> {
    SERVICES
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| CatalogError::UnknownService(id.to_string()))
}

/// Look up an option through its parent service.
pub fn service_option(
    service_id: &str,
    option_id: &str,
) -> Result<(&'static Service, &'static ServiceOption), CatalogError> {
    let service = service(service_id)?;
    let option = service.option(option_id)?;
    Ok((service, option))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(PLANS.len(), 3);
        assert_eq!(PRODUCTS.len(), 6);
        assert_eq!(SERVICES.len(), 4);
        assert!(SERVICES.iter().all(|s| s.options.len() == 3));
        assert!(PLANS.iter().all(|p| p.features.len() == 5));
    }

    #[test]
    fn test_plan_lookup() {
        assert_eq!(plan("profesional").map(|p| p.price), Ok(120));
        assert_eq!(
            plan("premium"),
            Err(CatalogError::UnknownPlan("premium".to_string()))
        );
    }

    #[test]
    fn test_featured_plan() {
        assert_eq!(featured_plan().id, "profesional");
    }

    #[test]
    fn test_plan_label_uses_thousands_separator() {
        assert_eq!(plan("estudio").unwrap().label(), "Plan Estudio - $3,000");
        assert_eq!(plan("basico").unwrap().label(), "Plan Básico - $80");
    }

    #[test]
    fn test_service_option_lookup() {
        let (service, option) = service_option("brand", "brand-pack").unwrap();
        assert_eq!(service.name, "Brand Films");
        assert_eq!(option.price, 1499);

        assert_eq!(
            service_option("brand", "social-4"),
            Err(CatalogError::UnknownOption {
                service: "brand".to_string(),
                option: "social-4".to_string(),
            })
        );
        assert!(matches!(
            service_option("music", "x"),
            Err(CatalogError::UnknownService(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::UnknownProduct("prod9".into()).to_string(),
            "Unknown product: prod9"
        );
    }
}
