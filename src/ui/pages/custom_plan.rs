//! Build-your-own-plan page
//!
//! Visitors pick one plan plus any add-on products, see a running total,
//! and copy a plain-text quotation to paste into their first message.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::catalog::{PLANS, PRODUCTS};
use crate::core::format::{format_usd, now_timestamp};
use crate::core::cue::SHAKE_MS;
use crate::core::notice::{self, NoticeStage};
use crate::core::{ContactDetails, NoticeSequence, PlanQuote, ShakeCue};
use crate::ui::clipboard::copy_text;
use crate::ui::common::{CheckboxField, FormField, SelectField};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::timers::TimerSet;

/// Shown when neither clipboard path worked
const COPY_FAILED: &str = "Tu navegador no permitió copiar los detalles. Inténtalo de nuevo.";

#[component]
pub fn CustomPlanPage() -> impl IntoView {
    let notifications = use_notifications();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let quote = RwSignal::new(PlanQuote::new());

    let notice = RwSignal::new(NoticeSequence::new());
    let notice_timers = TimerSet::new();
    let shake = RwSignal::new(ShakeCue::new());
    let shake_timers = TimerSet::new();

    // Restarting drops the previous run's timers before scheduling new ones
    let start_notices = move || {
        notice_timers.clear();
        let Some(generation) = notice.try_update(|n| n.start()) else {
            return;
        };
        for step in notice::schedule() {
            notice_timers.schedule(step.at_ms, move || {
                notice.try_update(|n| n.apply(generation, step));
            });
        }
    };

    let stop_notices = move || {
        notice_timers.clear();
        notice.try_update(|n| n.cancel());
    };

    let flag_missing_plan = move || {
        let Some(generation) = shake.try_update(|s| s.raise()) else {
            return;
        };
        shake_timers.schedule(SHAKE_MS, move || {
            shake.try_update(|s| s.lower(generation));
        });
    };

    let on_copy = move |_| {
        let contact = ContactDetails::new(
            name.get_untracked(),
            email.get_untracked(),
            company.get_untracked(),
        );

        match quote.with_untracked(|q| q.summary(&contact, now_timestamp())) {
            Ok(summary) => {
                let text = summary.text();
                leptos::task::spawn_local(async move {
                    if copy_text(&text).await.is_copied() {
                        start_notices();
                    } else {
                        stop_notices();
                        notifications.error("No se pudo copiar", COPY_FAILED);
                    }
                });
            }
            Err(err) => {
                warn!("quotation not copied: {err}");
                flag_missing_plan();
            }
        }
    };

    let plan_options = std::iter::once((String::new(), "-- Elige un plan --".to_string()))
        .chain(PLANS.iter().map(|p| (p.id.to_string(), p.label())))
        .collect::<Vec<_>>();

    view! {
        <Title text="Crea tu propio plan | Frame House" />

        <div class="plan-page">
            <A href="/" attr:class="home-button" attr:title="Volver al inicio" attr:aria-label="Volver al inicio">
                <Icon name=icons::HOME class="icon" />
            </A>

            <div class="card plan-builder">
                <h1 class="plan-title">"Crea tu propio plan"</h1>

                <div class="contact-fields">
                    <FormField
                        label="Nombre"
                        placeholder="Tu nombre"
                        value=name.into()
                        on_input=Callback::new(move |v| name.set(v))
                    />
                    <FormField
                        label="Email"
                        input_type="email"
                        placeholder="tu@email.com"
                        value=email.into()
                        on_input=Callback::new(move |v| email.set(v))
                    />
                    <FormField
                        label="Empresa"
                        placeholder="Nombre empresa (opcional)"
                        value=company.into()
                        on_input=Callback::new(move |v| company.set(v))
                    />
                </div>

                <SelectField
                    label="Selecciona tu plan"
                    value=Signal::derive(move || quote.with(|q| q.plan_id().unwrap_or_default().to_string()))
                    on_change=Callback::new(move |id: String| quote.update(|q| q.select_plan(Some(id.as_str()))))
                    options=plan_options
                    error=Signal::derive(move || shake.with(|s| s.is_raised()))
                />

                <div class="products-section">
                    <h3 class="products-title">"Productos adicionales"</h3>
                    <div class="products-grid">
                        {PRODUCTS
                            .iter()
                            .map(|product| {
                                let id = product.id;
                                view! {
                                    <CheckboxField
                                        label=product.name.to_string()
                                        detail=format_usd(product.price)
                                        checked=Signal::derive(move || quote.with(|q| q.is_product_selected(id)))
                                        on_change=Callback::new(move |_| quote.update(|q| q.toggle_product(id)))
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <dl class="summary">
                    <div class="summary-row">
                        <dt>"Plan seleccionado:"</dt>
                        <dd>{move || quote.with(|q| q.plan().map(|p| p.name).unwrap_or("Ninguno"))}</dd>
                    </div>
                    <div class="summary-row">
                        <dt>"Subtotal plan:"</dt>
                        <dd>{move || format_usd(quote.with(|q| q.plan_subtotal()))}</dd>
                    </div>
                    <div class="summary-row">
                        <dt>"Adicionales:"</dt>
                        <dd>{move || format_usd(quote.with(|q| q.products_subtotal()))}</dd>
                    </div>
                    <div class="summary-row summary-total">
                        <dt>"Total estimado"</dt>
                        <dd class="price-accent price-lg">{move || format_usd(quote.with(|q| q.total()))}</dd>
                    </div>
                </dl>

                <button type="button" class="btn-primary btn-block" on:click=on_copy>
                    "Copiar detalles del plan"
                    <Icon name=icons::CLIPBOARD class="icon-sm" />
                </button>
            </div>

            {[NoticeStage::Copied, NoticeStage::PromptingContact]
                .into_iter()
                .map(|stage| {
                    view! {
                        <div class="notice" class:show=move || notice.with(|n| n.stage() == stage) role="status">
                            <div class="notice-title">{stage.title()}</div>
                            <div class="notice-text">{stage.message()}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
