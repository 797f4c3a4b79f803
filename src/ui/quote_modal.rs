//! Multi-service quote picker
//!
//! Two steps: pick any number of options per service, then review the line
//! items and the total before moving on to the contact form.

use leptos::prelude::*;

use crate::core::ServiceSelection;
use crate::core::catalog::SERVICES;
use crate::core::format::format_usd;
use crate::core::overlay::MODAL_NAVIGATE_DELAY_MS;
use crate::ui::common::Overlay;
use crate::ui::icon::{Icon, icons};
use crate::ui::timers::TimerSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteStep {
    Services,
    Summary,
}

#[component]
pub fn QuoteModal(
    open: Signal<bool>,
    on_close: Callback<()>,
    /// Runs once the modal has closed
    on_go_to_contact: Callback<()>,
) -> impl IntoView {
    let selection = RwSignal::new(ServiceSelection::new());
    let step = RwSignal::new(QuoteStep::Services);
    let timers = TimerSet::new();

    let total = Memo::new(move |_| selection.with(|s| s.total()));

    let go_to_contact = move |_| {
        on_close.run(());
        timers.schedule(MODAL_NAVIGATE_DELAY_MS, move || on_go_to_contact.run(()));
    };

    view! {
        <Overlay open=open on_close=on_close class="quote-overlay" label="Cotización">
            <div class="dialog">
                <header class="dialog-header">
                    <h2 class="dialog-title">
                        {move || match step.get() {
                            QuoteStep::Services => "Arma tu paquete",
                            QuoteStep::Summary => "Resumen de cotización",
                        }}
                    </h2>
                    <button class="overlay-close" on:click=move |_| on_close.run(()) aria-label="Cerrar">
                        <Icon name=icons::X class="icon" />
                    </button>
                </header>

                <div class="dialog-body">
                    {move || match step.get() {
                        QuoteStep::Services => view! { <ServicePicker selection=selection /> }.into_any(),
                        QuoteStep::Summary => view! { <QuoteSummary selection=selection total=total /> }.into_any(),
                    }}
                </div>

                <footer class="dialog-footer">
                    <Show
                        when=move || step.get() == QuoteStep::Services
                        fallback=move || view! {
                            <button class="btn-outline" on:click=move |_| step.set(QuoteStep::Services)>
                                "Volver"
                            </button>
                            <button class="btn-primary" on:click=go_to_contact>
                                "Continuar a contacto"
                                <Icon name=icons::ARROW_RIGHT class="icon-sm" />
                            </button>
                        }
                    >
                        <div class="dialog-total">
                            <span class="muted">"Total estimado:"</span>
                            <span class="price-accent">{move || format_usd(total.get())}</span>
                        </div>
                        <button
                            class="btn-primary"
                            disabled=move || total.get() == 0
                            on:click=move |_| step.set(QuoteStep::Summary)
                        >
                            "Ver resumen"
                            <Icon name=icons::ARROW_RIGHT class="icon-sm" />
                        </button>
                    </Show>
                </footer>
            </div>
        </Overlay>
    }
}

#[component]
fn ServicePicker(selection: RwSignal<ServiceSelection>) -> impl IntoView {
    view! {
        <div class="service-list">
            {SERVICES
                .iter()
                .map(|service| {
                    let service_id = service.id;
                    view! {
                        <div class="service-card">
                            <h3 class="service-name">{service.name}</h3>
                            <p class="muted">{service.description}</p>
                            <div class="service-options">
                                {service
                                    .options
                                    .iter()
                                    .map(|option| {
                                        let option_id = option.id;
                                        let is_selected = move || {
                                            selection.with(|s| s.is_selected(service_id, option_id))
                                        };
                                        view! {
                                            <button
                                                class="option-row"
                                                class:is-selected=is_selected
                                                aria-pressed=move || is_selected().to_string()
                                                on:click=move |_| selection.update(|s| s.toggle(service_id, option_id))
                                            >
                                                <span class="option-check">
                                                    <Show when=is_selected>
                                                        <Icon name=icons::CHECK class="icon-xs" />
                                                    </Show>
                                                </span>
                                                <span class="option-name">{option.name}</span>
                                                <span class="price-accent">{format_usd(option.price)}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn QuoteSummary(selection: RwSignal<ServiceSelection>, total: Memo<u32>) -> impl IntoView {
    view! {
        <div class="quote-summary">
            {move || {
                selection
                    .with(|s| s.line_items())
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="summary-item">
                                <div>
                                    <p class="summary-service">{item.service}</p>
                                    <p class="muted">{item.option}</p>
                                </div>
                                <span class="price-accent">{format_usd(item.price)}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <div class="summary-total">
                <span>"Total"</span>
                <span class="price-accent price-lg">{move || format_usd(total.get())}</span>
            </div>
        </div>
    }
}
