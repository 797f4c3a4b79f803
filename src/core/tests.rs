#[cfg(test)]
mod tests {
    use crate::core::catalog::{PLANS, PRODUCTS};
    use crate::core::{
        ContactDetails, PinnedTrigger, PlanQuote, QuoteError, ServiceSelection, ShakeCue,
        SnapCoordinator,
    };

    /// Home page with three pinned sections, each pinned for one 800px
    /// viewport, in a 6400px scroll range.
    fn home_page_coordinator() -> SnapCoordinator {
        let mut coordinator = SnapCoordinator::new(3);
        coordinator.register("hero", PinnedTrigger::new(0, 0.0, Some(800.0)));
        coordinator.register("process", PinnedTrigger::new(2, 2400.0, Some(3200.0)));
        coordinator.register("plans", PinnedTrigger::new(4, 4800.0, Some(5600.0)));
        coordinator
    }

    #[test]
    fn test_home_page_snap_targets() {
        let mut coordinator = home_page_coordinator();
        let rule = coordinator.try_install(6400.0, false).unwrap();

        let centers: Vec<_> = rule.regions().iter().map(|r| r.center).collect();
        assert_eq!(centers, vec![0.0625, 0.4375, 0.8125]);

        // Near the process section: pulled to its center
        assert_eq!(rule.resolve(0.40), 0.4375);
        // Between sections, outside every buffered zone: untouched
        assert_eq!(rule.resolve(0.25), 0.25);
        assert_eq!(rule.resolve(0.65), 0.65);
        // Inside the buffer just before the plans pin
        assert_eq!(rule.resolve(0.72), 0.8125);
    }

    #[test]
    fn test_unmounted_section_drops_out_before_install() {
        let mut coordinator = home_page_coordinator();
        coordinator.deregister("process");

        // Barrier no longer satisfied; the settle timer forces installation
        assert!(coordinator.try_install(6400.0, false).is_none());
        let rule = coordinator.try_install(6400.0, true).unwrap();
        assert_eq!(rule.regions().len(), 2);
        assert_eq!(rule.resolve(0.40), 0.40);
    }

    #[test]
    fn test_total_for_every_plan_and_product_subset() {
        for plan in PLANS {
            for mask in 0u32..(1 << PRODUCTS.len()) {
                let mut quote = PlanQuote::new();
                quote.select_plan(Some(plan.id));

                let mut expected = plan.price;
                for (i, product) in PRODUCTS.iter().enumerate() {
                    if mask & (1 << i) != 0 {
                        quote.toggle_product(product.id);
                        expected += product.price;
                    }
                }

                assert_eq!(quote.total(), expected, "plan {} mask {mask:06b}", plan.id);
            }
        }
    }

    #[test]
    fn test_double_toggle_is_identity_for_every_product() {
        let mut quote = PlanQuote::new();
        quote.select_plan(Some("profesional"));
        quote.toggle_product("prod1");
        quote.toggle_product("prod3");
        let baseline = quote.total();

        for product in PRODUCTS {
            let before = quote.products().len();
            quote.toggle_product(product.id);
            quote.toggle_product(product.id);
            assert_eq!(quote.total(), baseline);
            assert_eq!(quote.products().len(), before);
        }
    }

    #[test]
    fn test_missing_plan_produces_no_text() {
        let mut quote = PlanQuote::new();
        quote.toggle_product("prod2");

        let contact = ContactDetails::new("Ana", "", "");
        let text = quote.summary(&contact, "now").map(|s| s.text());
        assert_eq!(text, Err(QuoteError::MissingPlan));
    }

    #[test]
    fn test_missing_plan_shakes_transiently() {
        let mut quote = PlanQuote::new();
        let mut cue = ShakeCue::new();
        let contact = ContactDetails::default();

        // Two clicks on copy without a plan, the second before the first shake ends
        let mut lowerings = Vec::new();
        for _ in 0..2 {
            assert!(quote.summary(&contact, "now").is_err());
            lowerings.push(cue.raise());
            assert!(cue.is_raised());
        }

        // The first click's timer fires mid-shake and leaves it running
        assert!(!cue.lower(lowerings[0]));
        assert!(cue.is_raised());
        assert!(cue.lower(lowerings[1]));
        assert!(!cue.is_raised());

        // With a plan chosen the copy goes through and no cue is raised
        quote.select_plan(Some("estudio"));
        assert!(quote.summary(&contact, "now").is_ok());
        assert!(!cue.is_raised());
    }

    #[test]
    fn test_service_selection_full_package() {
        let mut selection = ServiceSelection::new();
        for (service, option) in [
            ("social", "social-12"),
            ("brand", "brand-pack"),
            ("ads", "ads-10"),
            ("editing", "edit-premium"),
        ] {
            selection.toggle(service, option);
        }

        assert_eq!(selection.total(), 699 + 1499 + 549 + 349);
        let services: Vec<_> = selection.line_items().iter().map(|i| i.service).collect();
        assert_eq!(
            services,
            vec!["Contenido Social", "Brand Films", "Creative Ads", "Edición"]
        );
    }
}
