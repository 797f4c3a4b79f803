//! Full-screen navigation menu

use leptos::prelude::*;

use crate::core::catalog::STUDIO_EMAIL;
use crate::core::overlay::MENU_SCROLL_DELAY_MS;
use crate::ui::common::Overlay;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_anchor;
use crate::ui::timers::TimerSet;

/// Menu entries as (label, anchor id)
pub const MENU_ITEMS: [(&str, &str); 5] = [
    ("Servicios", "services"),
    ("Proceso", "process"),
    ("Planes", "plans"),
    ("Trabajos", "portfolio"),
    ("Contacto", "contact"),
];

#[component]
pub fn MenuOverlay(open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let timers = TimerSet::new();

    // Close first, scroll once the overlay is out of the way
    let go_to = move |anchor: &'static str| {
        on_close.run(());
        timers.schedule(MENU_SCROLL_DELAY_MS, move || scroll_to_anchor(anchor));
    };

    view! {
        <Overlay open=open on_close=on_close class="menu-overlay" label="Menú">
            <button class="menu-close" on:click=move |_| on_close.run(()) aria-label="Cerrar menú">
                <Icon name=icons::X class="icon-lg" />
            </button>

            <nav class="menu-nav">
                {MENU_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, &(label, anchor))| {
                        view! {
                            <a
                                href=format!("#{anchor}")
                                class="menu-item"
                                style=format!("animation-delay: {}ms;", 200 + index * 80)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    go_to(anchor);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <a href=format!("mailto:{STUDIO_EMAIL}") class="menu-mail label-mono">
                {STUDIO_EMAIL}
            </a>
        </Overlay>
    }
}
