use leptos::prelude::*;

use crate::core::timeline::exit_style;
use crate::ui::icon::{Icon, icons};
use crate::ui::quote_modal::QuoteModal;
use crate::ui::scroll::{PinnedSection, scroll_to_anchor, use_section_progress};
use crate::ui::video_modal::VideoModal;

#[component]
pub fn HeroSection(on_menu_open: Callback<()>) -> impl IntoView {
    let (quote_open, set_quote_open) = signal(false);
    let (reel_open, set_reel_open) = signal(false);

    view! {
        <QuoteModal
            open=quote_open.into()
            on_close=Callback::new(move |_| set_quote_open.set(false))
            on_go_to_contact=Callback::new(move |_| scroll_to_anchor("contact"))
        />
        <VideoModal
            open=reel_open.into()
            on_close=Callback::new(move |_| set_reel_open.set(false))
            title=Some("Showreel Frame House".to_string())
        />

        <PinnedSection id="hero" order=0 class="hero">
            <div class="hero-backdrop" aria-hidden="true"></div>

            <nav class="hero-nav load-fade-down">
                <div class="brand">"FRAME HOUSE"</div>
                <div class="hero-nav-actions">
                    <button class="nav-link" on:click=move |_| on_menu_open.run(())>
                        <Icon name=icons::MENU class="icon mobile-only" />
                        <span class="desktop-only">"MENU"</span>
                    </button>
                    <button class="btn-primary btn-sm" on:click=move |_| set_quote_open.set(true)>
                        <span class="desktop-only">"Solicitar cotización"</span>
                        <span class="mobile-only">"Cotizar"</span>
                    </button>
                </div>
            </nav>

            <HeroStage on_play=Callback::new(move |_| set_reel_open.set(true)) />
        </PinnedSection>
    }
}

/// Hero content; it loads visible and only animates out while pinned.
#[component]
fn HeroStage(on_play: Callback<()>) -> impl IntoView {
    let progress = use_section_progress();

    view! {
        <div class="hero-grid">
            <div class="hero-left load-slide-left" style=move || exit_style(progress.get(), -40.0, 0.4, false)>
                <h1 class="headline-xl">"Produce a tu marca"</h1>
                <p class="lead muted">"El nuevo estándar para el storytelling de marca."</p>
            </div>

            <div class="hero-phone load-rise" style=move || exit_style(progress.get(), -60.0, 0.4, true)>
                <button class="phone-frame" on:click=move |_| on_play.run(()) aria-label="Ver showreel">
                    <span class="phone-play">
                        <Icon name=icons::PLAY class="icon-lg" />
                    </span>
                </button>
            </div>

            <div class="hero-right load-slide-right" style=move || exit_style(progress.get(), 40.0, 0.4, false)>
                <p class="muted">
                    "Producimos contenido short-form que se ve premium y performa: producción, edición, hooks y entrega incluidos."
                </p>
                <button class="btn-primary" on:click=move |_| scroll_to_anchor("contact")>
                    "Contáctanos"
                </button>
            </div>
        </div>

        <div class="scroll-indicator" style=move || exit_style(progress.get(), 0.0, 0.0, true)>
            <span class="label-mono muted">"SCROLL"</span>
            <Icon name=icons::ARROW_DOWN class="icon bounce" />
        </div>
    }
}
