//! Quotation calculator
//!
//! Two selection shapes exist side by side:
//! - [`ServiceSelection`]: several services, each with any number of options
//!   toggled on (the quote picker modal)
//! - [`PlanQuote`]: exactly one plan plus any number of add-on products
//!   (the custom plan page)
//!
//! Both use toggle semantics and recompute their totals from the catalog on
//! every call. Identifiers missing from the catalog contribute nothing.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::catalog::{self, Plan, Product, SERVICES};
use super::format::format_usd;

/// Placeholder for contact fields left blank
pub const UNSPECIFIED: &str = "No especificado";

/// Placeholder line when no products were chosen
pub const NO_PRODUCTS: &str = "Ninguno";

const RULE: &str = "═══════════════════════════════════════";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("A plan must be selected before generating a quote")]
    MissingPlan,
}

/// One selected service option, for summary display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub service: &'static str,
    pub option: &'static str,
    pub price: u32,
}

/// Options selected per service in the quote picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceSelection {
    selected: BTreeMap<String, BTreeSet<String>>,
}

impl ServiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an option, or deselect it if already selected.
    pub fn toggle(&mut self, service_id: &str, option_id: &str) {
        let options = self.selected.entry(service_id.to_string()).or_default();
        if !options.remove(option_id) {
            options.insert(option_id.to_string());
        }
        if options.is_empty() {
            self.selected.remove(service_id);
        }
    }

    pub fn is_selected(&self, service_id: &str, option_id: &str) -> bool {
        self.selected
            .get(service_id)
            .is_some_and(|options| options.contains(option_id))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Sum of every selected option's price.
    pub fn total(&self) -> u32 {
        self.selected
            .iter()
            .flat_map(|(service_id, options)| {
                options
                    .iter()
                    .filter_map(move |option_id| catalog::service_option(service_id, option_id).ok())
            })
            .map(|(_, option)| option.price)
            .sum()
    }

    /// Selected options flattened in catalog order.
    pub fn line_items(&self) -> Vec<LineItem> {
        SERVICES
            .iter()
            .flat_map(|service| {
                service
                    .options
                    .iter()
                    .filter(|option| self.is_selected(service.id, option.id))
                    .map(|option| LineItem {
                        service: service.name,
                        option: option.name,
                        price: option.price,
                    })
            })
            .collect()
    }
}

/// A single plan plus add-on products
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanQuote {
    plan: Option<String>,
    /// Product ids in the order they were selected
    products: Vec<String>,
}

impl PlanQuote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a plan; `None` or an empty id clears the choice.
    pub fn select_plan(&mut self, plan_id: Option<&str>) {
        self.plan = plan_id.filter(|id| !id.is_empty()).map(str::to_string);
    }

    pub fn plan_id(&self) -> Option<&str> {
        self.plan.as_deref()
    }

    /// The selected plan, if it exists in the catalog.
    pub fn plan(&self) -> Option<&'static Plan> {
        self.plan.as_deref().and_then(|id| catalog::plan(id).ok())
    }

    /// Select a product, or deselect it if already selected.
    pub fn toggle_product(&mut self, product_id: &str) {
        if let Some(pos) = self.products.iter().position(|p| p == product_id) {
            self.products.remove(pos);
        } else {
            self.products.push(product_id.to_string());
        }
    }

    pub fn is_product_selected(&self, product_id: &str) -> bool {
        self.products.iter().any(|p| p == product_id)
    }

    /// Selected products known to the catalog, in selection order.
    pub fn products(&self) -> Vec<&'static Product> {
        self.products
            .iter()
            .filter_map(|id| catalog::product(id).ok())
            .collect()
    }

    pub fn plan_subtotal(&self) -> u32 {
        self.plan().map_or(0, |p| p.price)
    }

    pub fn products_subtotal(&self) -> u32 {
        self.products().iter().map(|p| p.price).sum()
    }

    pub fn total(&self) -> u32 {
        self.plan_subtotal() + self.products_subtotal()
    }

    /// Build the quotation summary for `contact`, stamped with `generated_at`.
    pub fn summary(
        &self,
        contact: &ContactDetails,
        generated_at: impl Into<String>,
    ) -> Result<QuotationSummary, QuoteError> {
        let plan = self.plan().ok_or(QuoteError::MissingPlan)?;

        Ok(QuotationSummary {
            contact: contact.clone(),
            plan_name: plan.name.to_string(),
            plan_price: plan.price,
            products: self
                .products()
                .into_iter()
                .map(|p| SummaryLine {
                    name: p.name.to_string(),
                    price: p.price,
                })
                .collect(),
            total: self.total(),
            generated_at: generated_at.into(),
        })
    }
}

/// Optional free-text contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl ContactDetails {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: company.into(),
        }
    }
}

fn or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        UNSPECIFIED
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub price: u32,
}

/// Snapshot of a plan quote, rendered as clipboard text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotationSummary {
    pub contact: ContactDetails,
    pub plan_name: String,
    pub plan_price: u32,
    pub products: Vec<SummaryLine>,
    pub total: u32,
    pub generated_at: String,
}

impl QuotationSummary {
    /// Render the fixed-format text block handed to the clipboard.
    pub fn text(&self) -> String {
        let products = if self.products.is_empty() {
            format!("• {}", NO_PRODUCTS)
        } else {
            self.products
                .iter()
                .map(|p| format!("• {}: {}", p.name, format_usd(p.price)))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "{rule}\n    COTIZACIÓN DE PLAN PERSONALIZADO\n{rule}\n\n\
             📋 DATOS DEL CLIENTE:\n\
             Nombre: {name}\n\
             Email: {email}\n\
             Empresa: {company}\n\n\
             📦 PLAN SELECCIONADO:\n\
             {plan} - {plan_price}\n\n\
             ➕ PRODUCTOS ADICIONALES:\n\
             {products}\n\n\
             💰 TOTAL ESTIMADO: {total}\n\n\
             {rule}\n\
             Generado el: {generated_at}\n",
            rule = RULE,
            name = or_unspecified(&self.contact.name),
            email = or_unspecified(&self.contact.email),
            company = or_unspecified(&self.contact.company),
            plan = self.plan_name,
            plan_price = format_usd(self.plan_price),
            products = products,
            total = format_usd(self.total),
            generated_at = self.generated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_toggle_adds_and_removes() {
        let mut selection = ServiceSelection::new();
        selection.toggle("social", "social-8");
        assert!(selection.is_selected("social", "social-8"));
        assert_eq!(selection.total(), 499);

        selection.toggle("social", "social-8");
        assert!(!selection.is_selected("social", "social-8"));
        assert!(selection.is_empty());
        assert_eq!(selection.total(), 0);
    }

    #[test]
    fn test_service_total_across_services() {
        let mut selection = ServiceSelection::new();
        selection.toggle("social", "social-4");
        selection.toggle("social", "social-12");
        selection.toggle("ads", "ads-10");
        selection.toggle("editing", "edit-pro");

        assert_eq!(selection.total(), 299 + 699 + 549 + 199);
    }

    #[test]
    fn test_service_unknown_ids_contribute_zero() {
        let mut selection = ServiceSelection::new();
        selection.toggle("brand", "brand-1");
        selection.toggle("brand", "brand-99");
        selection.toggle("music", "music-1");

        assert_eq!(selection.total(), 399);
        assert_eq!(selection.line_items().len(), 1);
    }

    #[test]
    fn test_line_items_follow_catalog_order() {
        let mut selection = ServiceSelection::new();
        selection.toggle("editing", "edit-premium");
        selection.toggle("brand", "brand-pack");
        selection.toggle("brand", "brand-1");

        let items = selection.line_items();
        let options: Vec<_> = items.iter().map(|i| i.option).collect();
        assert_eq!(
            options,
            vec![
                "1 video corto (30-60s)",
                "Pack completo (3 videos)",
                "Edición premium + motion"
            ]
        );
        assert_eq!(items[0].service, "Brand Films");
        assert_eq!(items[2].service, "Edición");
    }

    #[test]
    fn test_plan_quote_total() {
        let mut quote = PlanQuote::new();
        quote.select_plan(Some("profesional"));
        quote.toggle_product("prod1");
        quote.toggle_product("prod3");

        assert_eq!(quote.plan_subtotal(), 120);
        assert_eq!(quote.products_subtotal(), 600);
        assert_eq!(quote.total(), 720);
    }

    #[test]
    fn test_plan_quote_without_plan_counts_products() {
        let mut quote = PlanQuote::new();
        quote.toggle_product("prod6");

        assert!(quote.plan().is_none());
        assert_eq!(quote.total(), 500);
    }

    #[test]
    fn test_product_toggle_twice_restores_state() {
        let mut quote = PlanQuote::new();
        quote.select_plan(Some("basico"));
        quote.toggle_product("prod2");
        let before = quote.clone();

        quote.toggle_product("prod5");
        assert_eq!(quote.total(), 80 + 300 + 350);
        quote.toggle_product("prod5");

        assert_eq!(quote, before);
        assert_eq!(quote.total(), 380);
    }

    #[test]
    fn test_select_plan_clears_on_empty() {
        let mut quote = PlanQuote::new();
        quote.select_plan(Some("estudio"));
        assert_eq!(quote.plan_subtotal(), 3000);

        quote.select_plan(Some(""));
        assert!(quote.plan_id().is_none());
        assert_eq!(quote.plan_subtotal(), 0);
    }

    #[test]
    fn test_summary_requires_plan() {
        let mut quote = PlanQuote::new();
        quote.toggle_product("prod1");

        let result = quote.summary(&ContactDetails::default(), "1/1/2026, 10:00:00");
        assert_eq!(result, Err(QuoteError::MissingPlan));
    }

    #[test]
    fn test_summary_text_placeholders() {
        let mut quote = PlanQuote::new();
        quote.select_plan(Some("estudio"));

        let contact = ContactDetails::new("Ana", "", "   ");
        let text = quote
            .summary(&contact, "15/10/2026, 12:30:00")
            .unwrap()
            .text();

        assert!(text.contains("Nombre: Ana\n"));
        assert!(text.contains("Email: No especificado\n"));
        assert!(text.contains("Empresa: No especificado\n"));
        assert!(text.contains("Plan Estudio - $3,000\n"));
        assert!(text.contains("• Ninguno\n"));
        assert!(text.contains("💰 TOTAL ESTIMADO: $3,000\n"));
        assert!(text.ends_with("Generado el: 15/10/2026, 12:30:00\n"));
    }

    #[test]
    fn test_summary_lists_products_in_selection_order() {
        let mut quote = PlanQuote::new();
        quote.select_plan(Some("profesional"));
        quote.toggle_product("prod3");
        quote.toggle_product("prod1");

        let summary = quote
            .summary(&ContactDetails::new("Ana", "ana@example.com", "Acme"), "now")
            .unwrap();

        assert_eq!(summary.total, 720);
        let text = summary.text();
        assert!(text.contains(
            "➕ PRODUCTOS ADICIONALES:\n• Producto adicional 3: $450\n• Producto adicional 1: $150\n\n"
        ));
        assert!(text.starts_with(
            "═══════════════════════════════════════\n    COTIZACIÓN DE PLAN PERSONALIZADO\n"
        ));
        assert!(text.contains("Email: ana@example.com\n"));
    }
}
