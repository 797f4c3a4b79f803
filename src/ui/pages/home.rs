//! Home page: the scroll-driven studio site
//!
//! Owns the snap context for its pinned sections and the menu overlay.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::menu_overlay::MenuOverlay;
use crate::ui::scroll::{SnapController, provide_snap_context};
use crate::ui::sections::{
    ContactSection, HeroSection, MetricsSection, PINNED_SECTIONS, PlansSection, PortfolioSection,
    ProcessSection, ScrollAnimationScript, ServicesSection, TestimonialsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    provide_snap_context(PINNED_SECTIONS);
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <Title text="Frame House | Produce a tu marca" />
        <Meta
            name="description"
            content="Producimos contenido short-form que se ve premium y performa: producción, edición, hooks y entrega incluidos."
        />

        <div class="site">
            <div class="grain-overlay" aria-hidden="true"></div>

            <MenuOverlay
                open=menu_open.into()
                on_close=Callback::new(move |_| set_menu_open.set(false))
            />

            <main>
                <HeroSection on_menu_open=Callback::new(move |_| set_menu_open.set(true)) />
                <ServicesSection />
                <ProcessSection />
                <MetricsSection />
                <PlansSection />
                <PortfolioSection />
                <TestimonialsSection />
                <ContactSection />
            </main>

            <SnapController />
        </div>

        <ScrollAnimationScript />
    }
}
